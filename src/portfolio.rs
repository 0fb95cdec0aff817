//! Page-level wiring of the three components.

use std::rc::Rc;

use log::warn;
use web_sys::Document;

use crate::components::navigation::{DomNavigation, NavigationController, mount_navigation};
use crate::components::orbit::{OrbitMount, mount_orbit};
use crate::components::particles::mount_particles;
use crate::config::PortfolioConfig;
use crate::scheduler::{BrowserFrames, BrowserTimers, FrameScheduler, Timers};

/// Everything started on the page. Each part is `None` when its markup is missing.
pub struct Portfolio {
	/// Number of particles inserted.
	pub particles: Option<usize>,
	/// Orbit animation.
	pub orbit: Option<OrbitMount>,
	/// Tab navigation.
	pub navigation: Option<Rc<NavigationController<DomNavigation>>>,
}

impl Portfolio {
	/// Start every component whose host elements are present.
	pub fn mount(document: &Document, config: &PortfolioConfig) -> Option<Self> {
		let (Some(frames), Some(timers)) = (BrowserFrames::new(), BrowserTimers::new()) else {
			warn!("portfolio-motion: no window, nothing to animate");
			return None;
		};
		let frames: Rc<dyn FrameScheduler> = Rc::new(frames);
		let timers: Rc<dyn Timers> = Rc::new(timers);

		Some(Self {
			particles: mount_particles(document, config),
			orbit: mount_orbit(document, config, frames, Rc::clone(&timers)),
			navigation: mount_navigation(document, config, timers),
		})
	}

	/// Keep the components alive for the rest of the page's life.
	pub fn keep_alive(self) {
		std::mem::forget(self);
	}
}
