//! Tabbed panel navigation with a timed fade transition.

mod controller;
mod dom;
mod machine;

pub use controller::{NavigationController, NavigationSurface};
pub use dom::{DomNavigation, NavElement, mount_navigation};
pub use machine::{ButtonId, Effect, NavEvent, NavigationState, PanelId, Phase, Stage, Timing, transition};
