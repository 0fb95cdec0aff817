//! Binds the orbit to the host page.

use std::rc::Rc;

use log::debug;
use wasm_bindgen::prelude::*;
use web_sys::{Document, HtmlElement};

use super::animator::OrbitAnimator;
use super::metrics::{ContainerBounds, ViewportTracker};
use super::state::OrbitParams;
use crate::config::PortfolioConfig;
use crate::host;
use crate::scheduler::{FrameScheduler, Timers};

/// The running orbit and the tracker feeding it radii.
pub struct OrbitMount {
	/// Frame loop moving the icons.
	pub animator: OrbitAnimator<HtmlElement>,
	/// Debounced radii source.
	pub viewport: ViewportTracker,
}

/// Find the orbit container and icons, measure, listen for resizes and start
/// the loop. `None` if the container or the icons are missing.
pub fn mount_orbit(
	document: &Document,
	config: &PortfolioConfig,
	frames: Rc<dyn FrameScheduler>,
	timers: Rc<dyn Timers>,
) -> Option<OrbitMount> {
	let selectors = &config.selectors;
	let Some(container) = host::element_by_id(document, &selectors.orbit_container) else {
		debug!(
			"portfolio-motion: no #{}, skipping orbit",
			selectors.orbit_container
		);
		return None;
	};
	let icons = host::query_all(document, &selectors.orbit_icon);
	if icons.is_empty() {
		debug!(
			"portfolio-motion: no {} elements, skipping orbit",
			selectors.orbit_icon
		);
		return None;
	}

	let viewport = ViewportTracker::new(
		move || {
			let rect = container.get_bounding_client_rect();
			ContainerBounds {
				width: rect.width(),
				height: rect.height(),
			}
		},
		config.orbit.icon_padding,
		timers,
		config.resize.debounce_ms,
	);

	if let Some(window) = host::window() {
		let trigger = viewport.resize_trigger();
		let on_resize = Closure::<dyn FnMut(web_sys::Event)>::new(move |_| trigger.trigger());
		host::listen_passive(&window, "resize", on_resize);
	}

	let animator = OrbitAnimator::new(
		icons,
		viewport.radii(),
		OrbitParams::from(&config.orbit),
		frames,
	)?;
	animator.start();

	Some(OrbitMount { animator, viewport })
}
