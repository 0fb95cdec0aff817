//! Page components.

pub mod navigation;
pub mod orbit;
pub mod particles;
