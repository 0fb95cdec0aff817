//! Binds the navigation to the host page's buttons and panels.

use std::collections::HashMap;
use std::rc::Rc;

use log::{debug, info};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlElement};

use super::controller::{NavigationController, NavigationSurface};
use super::machine::{ButtonId, NavigationState, PanelId, Timing};
use crate::config::PortfolioConfig;
use crate::host;
use crate::scheduler::Timers;

const ACTIVE: &str = "active";
const INACTIVE_BUTTON: &str = "nav-btn-inactive";
const HIDDEN: &str = "hidden";
const FADE_OUT: &str = "fade-out";

/// What the class protocol needs from a button or panel element.
pub trait NavElement {
	/// Add a class.
	fn add_class(&self, class: &str);
	/// Remove a class.
	fn remove_class(&self, class: &str);
	/// Read layout, flushing pending style changes.
	fn force_layout(&self);
	/// Whether the element fits inside the viewport vertically.
	fn fully_visible(&self) -> bool;
	/// Smooth-scroll the element to the top of the viewport.
	fn scroll_to_start(&self);
}

impl NavElement for HtmlElement {
	fn add_class(&self, class: &str) {
		host::add_class(self, class);
	}

	fn remove_class(&self, class: &str) {
		host::remove_class(self, class);
	}

	fn force_layout(&self) {
		let _ = self.offset_height();
	}

	fn fully_visible(&self) -> bool {
		host::fully_in_viewport(self)
	}

	fn scroll_to_start(&self) {
		host::scroll_to_start(self);
	}
}

/// Navigation buttons and content panels of the page.
pub struct DomNavigation<E: NavElement = HtmlElement> {
	buttons: Vec<E>,
	panels: HashMap<PanelId, E>,
}

impl<E: NavElement> DomNavigation<E> {
	/// Buttons in `ButtonId` order and panels keyed by id.
	pub fn new(buttons: Vec<E>, panels: HashMap<PanelId, E>) -> Self {
		Self { buttons, panels }
	}

	fn panel(&self, id: &str) -> Option<&E> {
		self.panels.get(id)
	}
}

impl<E: NavElement> NavigationSurface for DomNavigation<E> {
	fn set_button_active(&self, button: ButtonId, active: bool) {
		let Some(element) = self.buttons.get(button.0) else {
			return;
		};
		if active {
			element.remove_class(INACTIVE_BUTTON);
			element.add_class(ACTIVE);
		} else {
			element.remove_class(ACTIVE);
			element.add_class(INACTIVE_BUTTON);
		}
	}

	fn fade_out_panel(&self, panel: &str) {
		if let Some(element) = self.panel(panel) {
			element.add_class(FADE_OUT);
		}
	}

	fn hide_panel(&self, panel: &str) {
		if let Some(element) = self.panel(panel) {
			element.remove_class(ACTIVE);
			element.remove_class(FADE_OUT);
			element.add_class(HIDDEN);
		}
	}

	fn show_panel(&self, panel: &str) {
		if let Some(element) = self.panel(panel) {
			element.remove_class(HIDDEN);
			// Layout read between unhide and `active`, or the fade-in is skipped.
			element.force_layout();
			element.add_class(ACTIVE);
		}
	}

	fn reveal_panel(&self, panel: &str) {
		if let Some(element) = self.panel(panel) {
			if !element.fully_visible() {
				element.scroll_to_start();
			}
		}
	}
}

/// Collect buttons and panels, style the initial tab and listen for clicks.
/// `None` if the page has no navigation buttons.
pub fn mount_navigation(
	document: &Document,
	config: &PortfolioConfig,
	timers: Rc<dyn Timers>,
) -> Option<Rc<NavigationController<DomNavigation>>> {
	let selectors = &config.selectors;
	let buttons = host::query_all(document, &selectors.nav_button);
	let Some(first_button) = buttons.first().cloned() else {
		debug!(
			"portfolio-motion: no {} elements, skipping navigation",
			selectors.nav_button
		);
		return None;
	};

	let panel_elements = host::query_all(document, &selectors.content_panel);
	let initial_panel = panel_elements
		.iter()
		.find(|p| !host::has_class(p, HIDDEN))
		.map(|p| p.id())
		.filter(|id| !id.is_empty());
	let initial_button = buttons
		.iter()
		.position(|b| host::has_class(b, ACTIVE))
		.map(ButtonId);
	let targets: Vec<PanelId> = buttons
		.iter()
		.map(|b| b.get_attribute(&selectors.target_attribute).unwrap_or_default())
		.collect();
	let panels: HashMap<PanelId, HtmlElement> = panel_elements
		.into_iter()
		.map(|p| (p.id(), p))
		.filter(|(id, _)| !id.is_empty())
		.collect();

	let state = NavigationState::new(
		panels.keys().cloned(),
		targets,
		initial_panel,
		initial_button,
		Timing::from(&config.navigation),
	);
	info!(
		"portfolio-motion: navigation over {} buttons, {} panels, initial {:?}",
		state.buttons(),
		panels.len(),
		state.active_panel()
	);

	let controller = NavigationController::new(state, DomNavigation::new(buttons, panels), timers);
	controller.bootstrap();

	let container: Element = first_button
		.closest("nav")
		.ok()
		.flatten()
		.or_else(|| first_button.parent_element())?;
	let (on_click_controller, button_selector) =
		(Rc::clone(&controller), selectors.nav_button.clone());
	let on_click = Closure::<dyn FnMut(web_sys::Event)>::new(move |event: web_sys::Event| {
		let Some(clicked) = event
			.target()
			.and_then(|t| t.dyn_into::<Element>().ok())
			.and_then(|t| t.closest(&button_selector).ok().flatten())
		else {
			return;
		};
		let clicked: &JsValue = clicked.as_ref();
		let index = on_click_controller
			.surface()
			.buttons
			.iter()
			.position(|b| AsRef::<JsValue>::as_ref(b) == clicked);
		if let Some(index) = index {
			on_click_controller.select(ButtonId(index));
		}
	});
	host::listen(&container, "click", on_click);

	Some(controller)
}

#[cfg(test)]
mod tests {
	use std::cell::{Cell, RefCell};

	use super::*;
	use crate::scheduler::testing::ManualTimers;

	/// Element that appends every operation to a log shared with the test.
	struct FakeElement {
		name: &'static str,
		log: Rc<RefCell<Vec<String>>>,
		visible: Cell<bool>,
	}

	impl FakeElement {
		fn new(name: &'static str, log: &Rc<RefCell<Vec<String>>>) -> Self {
			Self {
				name,
				log: Rc::clone(log),
				visible: Cell::new(true),
			}
		}

		fn record(&self, op: String) {
			self.log.borrow_mut().push(format!("{} {}", self.name, op));
		}
	}

	impl NavElement for FakeElement {
		fn add_class(&self, class: &str) {
			self.record(format!("+{class}"));
		}

		fn remove_class(&self, class: &str) {
			self.record(format!("-{class}"));
		}

		fn force_layout(&self) {
			self.record("layout".into());
		}

		fn fully_visible(&self) -> bool {
			self.visible.get()
		}

		fn scroll_to_start(&self) {
			self.record("scroll".into());
		}
	}

	fn page(log: &Rc<RefCell<Vec<String>>>) -> DomNavigation<FakeElement> {
		let panels = ["a", "b"]
			.into_iter()
			.map(|id| (id.to_string(), FakeElement::new(id, log)))
			.collect();
		DomNavigation::new(
			vec![FakeElement::new("btn0", log), FakeElement::new("btn1", log)],
			panels,
		)
	}

	fn ops(log: &Rc<RefCell<Vec<String>>>) -> Vec<String> {
		std::mem::take(&mut *log.borrow_mut())
	}

	#[test]
	fn show_unhides_then_reads_layout_then_activates() {
		let log = Rc::new(RefCell::new(Vec::new()));
		page(&log).show_panel("b");
		assert_eq!(ops(&log), ["b -hidden", "b layout", "b +active"]);
	}

	#[test]
	fn hide_clears_marks_before_hiding() {
		let log = Rc::new(RefCell::new(Vec::new()));
		page(&log).hide_panel("a");
		assert_eq!(ops(&log), ["a -active", "a -fade-out", "a +hidden"]);
	}

	#[test]
	fn reveal_scrolls_only_when_out_of_view() {
		let log = Rc::new(RefCell::new(Vec::new()));
		let nav = page(&log);

		nav.reveal_panel("b");
		assert!(ops(&log).is_empty());

		nav.panels["b"].visible.set(false);
		nav.reveal_panel("b");
		assert_eq!(ops(&log), ["b scroll"]);
	}

	#[test]
	fn button_styles_swap_between_active_and_inactive() {
		let log = Rc::new(RefCell::new(Vec::new()));
		let nav = page(&log);
		nav.set_button_active(ButtonId(1), true);
		nav.set_button_active(ButtonId(0), false);
		assert_eq!(
			ops(&log),
			["btn1 -nav-btn-inactive", "btn1 +active", "btn0 -active", "btn0 +nav-btn-inactive"]
		);
	}

	#[test]
	fn unknown_ids_touch_nothing() {
		let log = Rc::new(RefCell::new(Vec::new()));
		let nav = page(&log);
		nav.show_panel("missing");
		nav.set_button_active(ButtonId(7), true);
		assert!(ops(&log).is_empty());
	}

	#[test]
	fn switch_runs_the_class_protocol_in_order() {
		let log = Rc::new(RefCell::new(Vec::new()));
		let timers = Rc::new(ManualTimers::default());
		let nav = page(&log);
		nav.panels["b"].visible.set(false);
		let state = NavigationState::new(
			["a", "b"].map(String::from),
			vec!["a".into(), "b".into()],
			Some("a".into()),
			Some(ButtonId(0)),
			Timing::default(),
		);
		let controller = NavigationController::new(state, nav, timers.clone());

		controller.select(ButtonId(1));
		assert_eq!(
			ops(&log),
			[
				"btn0 -active",
				"btn0 +nav-btn-inactive",
				"btn1 -nav-btn-inactive",
				"btn1 +active",
				"a +fade-out",
			]
		);

		timers.advance(250);
		assert_eq!(
			ops(&log),
			[
				"a -active",
				"a -fade-out",
				"a +hidden",
				"b -hidden",
				"b layout",
				"b +active",
				"b scroll",
			]
		);

		timers.advance(400);
		assert!(ops(&log).is_empty());
		assert!(!controller.is_transitioning());
	}
}
