//! Orbit radii derived from the container size.

use std::cell::Cell;
use std::rc::Rc;

use log::debug;

use crate::scheduler::{Debouncer, Timers};

/// Size of the orbit container in CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ContainerBounds {
	/// Width in pixels.
	pub width: f64,
	/// Height in pixels.
	pub height: f64,
}

/// Semi-axes of the orbit ellipse.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct OrbitRadii {
	/// Horizontal semi-axis.
	pub x: f64,
	/// Vertical semi-axis.
	pub y: f64,
}

/// Half the container size minus the icon padding, never negative.
pub fn compute_radii(bounds: ContainerBounds, padding: f64) -> OrbitRadii {
	OrbitRadii {
		x: (bounds.width / 2.0 - padding).max(0.0),
		y: (bounds.height / 2.0 - padding).max(0.0),
	}
}

/// Radii shared between the tracker (writer) and the animator (reader).
///
/// Both axes are stored in one `Cell`, so a reader always sees a pair written
/// together.
#[derive(Clone, Debug, Default)]
pub struct SharedRadii(Rc<Cell<OrbitRadii>>);

impl SharedRadii {
	/// New cell holding `radii`.
	pub fn new(radii: OrbitRadii) -> Self {
		Self(Rc::new(Cell::new(radii)))
	}

	/// Current pair.
	pub fn get(&self) -> OrbitRadii {
		self.0.get()
	}

	/// Replace both axes at once.
	pub fn set(&self, radii: OrbitRadii) {
		self.0.set(radii);
	}
}

/// Keeps [`SharedRadii`] in step with the container size.
///
/// Radii are measured once on construction; after that, resize notifications
/// go through a [`Debouncer`] so a drag-resize burst costs one layout read.
pub struct ViewportTracker {
	radii: SharedRadii,
	debouncer: Debouncer,
}

impl ViewportTracker {
	/// Measure now and recompute `quiet_ms` after the last resize.
	pub fn new(
		measure: impl Fn() -> ContainerBounds + 'static,
		padding: f64,
		timers: Rc<dyn Timers>,
		quiet_ms: u32,
	) -> Self {
		let radii = SharedRadii::new(compute_radii(measure(), padding));
		let target = radii.clone();
		let debouncer = Debouncer::new(timers, quiet_ms, move || {
			let next = compute_radii(measure(), padding);
			debug!("portfolio-motion: orbit radii now {:.1} x {:.1}", next.x, next.y);
			target.set(next);
		});
		Self { radii, debouncer }
	}

	/// Shared handle to the current radii.
	pub fn radii(&self) -> SharedRadii {
		self.radii.clone()
	}

	/// Note a resize event. Recomputation happens after the quiet window.
	pub fn on_resize(&self) {
		self.debouncer.trigger();
	}

	/// Trigger usable from an event listener.
	pub fn resize_trigger(&self) -> Debouncer {
		self.debouncer.clone()
	}
}
