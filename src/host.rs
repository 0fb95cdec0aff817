//! Small helpers over the host document.
//!
//! Every lookup returns `Option`; a missing element is a normal condition for
//! pages that only carry some of the animated sections.

use log::warn;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
	AddEventListenerOptions, Document, Element, EventTarget, HtmlElement, ScrollBehavior,
	ScrollIntoViewOptions, ScrollLogicalPosition, Window,
};

/// The global window, if any.
pub fn window() -> Option<Window> {
	web_sys::window()
}

/// The window's document.
pub fn document() -> Option<Document> {
	window()?.document()
}

/// Element by id, as an `HtmlElement`.
pub fn element_by_id(document: &Document, id: &str) -> Option<HtmlElement> {
	document.get_element_by_id(id)?.dyn_into().ok()
}

/// All `HtmlElement`s matching `selector`, in document order.
pub fn query_all(document: &Document, selector: &str) -> Vec<HtmlElement> {
	let Ok(list) = document.query_selector_all(selector) else {
		warn!("portfolio-motion: invalid selector {:?}", selector);
		return Vec::new();
	};
	(0..list.length())
		.filter_map(|i| list.get(i))
		.filter_map(|node| node.dyn_into::<HtmlElement>().ok())
		.collect()
}

/// Add `class` to the element's class list.
pub fn add_class(element: &Element, class: &str) {
	let _ = element.class_list().add_1(class);
}

/// Remove `class` from the element's class list.
pub fn remove_class(element: &Element, class: &str) {
	let _ = element.class_list().remove_1(class);
}

/// Whether the element carries `class`.
pub fn has_class(element: &Element, class: &str) -> bool {
	element.class_list().contains(class)
}

/// Attach `handler` for the lifetime of the page.
pub fn listen(target: &EventTarget, event: &str, handler: Closure<dyn FnMut(web_sys::Event)>) {
	if let Err(e) = target.add_event_listener_with_callback(event, handler.as_ref().unchecked_ref()) {
		warn!("portfolio-motion: failed to listen for {}: {:?}", event, e);
		return;
	}
	handler.forget();
}

/// Like [`listen`], registered as passive (the handler never cancels the event).
pub fn listen_passive(
	target: &EventTarget,
	event: &str,
	handler: Closure<dyn FnMut(web_sys::Event)>,
) {
	let options = AddEventListenerOptions::new();
	options.set_passive(true);
	if let Err(e) = target.add_event_listener_with_callback_and_add_event_listener_options(
		event,
		handler.as_ref().unchecked_ref(),
		&options,
	) {
		warn!("portfolio-motion: failed to listen for {}: {:?}", event, e);
		return;
	}
	handler.forget();
}

/// Whether a box spanning `top..bottom` (viewport coordinates) sticks out of
/// a viewport `viewport_height` pixels tall.
pub fn needs_scroll(top: f64, bottom: f64, viewport_height: f64) -> bool {
	top < 0.0 || bottom > viewport_height
}

/// Whether `element` lies completely inside the vertical viewport.
pub fn fully_in_viewport(element: &Element) -> bool {
	let rect = element.get_bounding_client_rect();
	let viewport_height = window()
		.and_then(|w| w.inner_height().ok())
		.and_then(|h| h.as_f64())
		.unwrap_or(f64::INFINITY);
	!needs_scroll(rect.top(), rect.bottom(), viewport_height)
}

/// Smooth-scroll so that `element` starts at the top of the viewport.
pub fn scroll_to_start(element: &Element) {
	let options = ScrollIntoViewOptions::new();
	options.set_behavior(ScrollBehavior::Smooth);
	options.set_block(ScrollLogicalPosition::Start);
	element.scroll_into_view_with_scroll_into_view_options(&options);
}

/// Run `f` once the document has been parsed.
pub fn on_ready(f: impl FnOnce() + 'static) {
	let Some(document) = document() else {
		return;
	};
	if document.ready_state() != "loading" {
		f();
		return;
	}
	let mut f = Some(f);
	let handler = Closure::<dyn FnMut(web_sys::Event)>::new(move |_| {
		if let Some(f) = f.take() {
			f();
		}
	});
	listen(&document, "DOMContentLoaded", handler);
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn box_touching_both_edges_stays() {
		assert!(!needs_scroll(0.0, 800.0, 800.0));
		assert!(!needs_scroll(120.0, 480.0, 800.0));
	}

	#[test]
	fn box_above_the_top_scrolls() {
		assert!(needs_scroll(-1.0, 400.0, 800.0));
	}

	#[test]
	fn box_below_the_fold_scrolls() {
		assert!(needs_scroll(300.0, 801.0, 800.0));
		assert!(needs_scroll(-50.0, 1_200.0, 800.0));
	}
}
