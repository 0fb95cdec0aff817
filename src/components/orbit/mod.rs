//! Icons orbiting the center of a container.
//!
//! - [`ViewportTracker`]: ellipse radii from the container size, recomputed
//!   after debounced resizes
//! - [`OrbitState`]: angle accumulator and per-element placement math
//! - [`OrbitAnimator`]: frame loop applying placements to elements

mod animator;
mod dom;
mod metrics;
mod state;

pub use animator::{OrbitAnimator, OrbitTarget};
pub use dom::{OrbitMount, mount_orbit};
pub use metrics::{ContainerBounds, OrbitRadii, SharedRadii, ViewportTracker, compute_radii};
pub use state::{OrbitParams, OrbitState, Translation};
