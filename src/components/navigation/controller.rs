//! Runs navigation effects against a surface and a timer source.

use std::cell::RefCell;
use std::rc::Rc;

use log::{debug, warn};

use super::machine::{ButtonId, Effect, NavEvent, NavigationState};
use crate::scheduler::Timers;

/// The page elements the navigation drives.
pub trait NavigationSurface {
	/// Style a button as the current tab (or not).
	fn set_button_active(&self, button: ButtonId, active: bool);
	/// Begin the fade-out of a visible panel.
	fn fade_out_panel(&self, panel: &str);
	/// Hide a panel and clear its transition marks.
	fn hide_panel(&self, panel: &str);
	/// Unhide a panel and start its fade-in.
	fn show_panel(&self, panel: &str);
	/// Scroll a panel into view if it is not already fully visible.
	fn reveal_panel(&self, panel: &str);
}

/// Owns the [`NavigationState`] and interprets its effects.
///
/// `Schedule` effects become timeouts that dispatch their event back into the
/// controller; the machine itself never sees a clock.
pub struct NavigationController<S: NavigationSurface> {
	state: RefCell<NavigationState>,
	surface: S,
	timers: Rc<dyn Timers>,
}

impl<S: NavigationSurface + 'static> NavigationController<S> {
	/// Controller over `state`, driving `surface`.
	pub fn new(state: NavigationState, surface: S, timers: Rc<dyn Timers>) -> Rc<Self> {
		Rc::new(Self {
			state: RefCell::new(state),
			surface,
			timers,
		})
	}

	/// Bring the surface in line with the initial state.
	pub fn bootstrap(self: &Rc<Self>) {
		let effects = self.state.borrow().bootstrap();
		self.apply(effects);
	}

	/// A button was clicked.
	pub fn select(self: &Rc<Self>, button: ButtonId) {
		self.dispatch(NavEvent::Select(button));
	}

	/// Feed an event to the machine and run the resulting effects.
	pub fn dispatch(self: &Rc<Self>, event: NavEvent) {
		let effects = self.state.borrow_mut().handle(event.clone());
		if effects.is_empty() {
			debug!("portfolio-motion: navigation ignored {:?}", event);
			return;
		}
		self.apply(effects);
	}

	/// Copy of the current state.
	pub fn snapshot(&self) -> NavigationState {
		self.state.borrow().clone()
	}

	/// Whether a switch is in flight.
	pub fn is_transitioning(&self) -> bool {
		self.state.borrow().is_transitioning()
	}

	/// The driven page elements.
	pub fn surface(&self) -> &S {
		&self.surface
	}

	fn apply(self: &Rc<Self>, effects: Vec<Effect>) {
		for effect in effects {
			match effect {
				Effect::ActivateButton(button) => self.surface.set_button_active(button, true),
				Effect::DeactivateButton(button) => self.surface.set_button_active(button, false),
				Effect::FadeOutPanel(panel) => self.surface.fade_out_panel(&panel),
				Effect::HidePanel(panel) => self.surface.hide_panel(&panel),
				Effect::ShowPanel(panel) => self.surface.show_panel(&panel),
				Effect::RevealPanel(panel) => self.surface.reveal_panel(&panel),
				Effect::Schedule { delay_ms, event } => self.schedule(delay_ms, event),
			}
		}
	}

	fn schedule(self: &Rc<Self>, delay_ms: u32, event: NavEvent) {
		let controller = Rc::downgrade(self);
		let fire = event.clone();
		let handle = self.timers.set_timeout(
			delay_ms,
			Box::new(move || {
				if let Some(controller) = controller.upgrade() {
					controller.dispatch(fire);
				}
			}),
		);
		if handle.is_none() {
			// Never leave the machine stuck mid-transition.
			warn!(
				"portfolio-motion: could not schedule {:?}, running it now",
				event
			);
			self.dispatch(event);
		}
	}
}
