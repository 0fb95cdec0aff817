//! Tunable parameters for the page animations.
//!
//! All sections deserialize with per-field defaults, so a host page only has to
//! spell out the values it wants to change:
//!
//! ```json
//! { "orbit": { "speed": 0.01 }, "navigation": { "fade_out_ms": 300 } }
//! ```

use serde::Deserialize;

/// Background particle layout.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct ParticleConfig {
	/// Number of particles inserted into the container.
	pub count: usize,
	/// Smallest particle edge length in pixels.
	pub min_size: f64,
	/// Largest particle edge length in pixels.
	pub max_size: f64,
	/// Shortest float animation in seconds.
	pub min_duration: f64,
	/// Longest float animation in seconds.
	pub max_duration: f64,
	/// Upper bound of the animation start delay in seconds.
	pub max_delay: f64,
}

impl Default for ParticleConfig {
	fn default() -> Self {
		Self {
			count: 35,
			min_size: 1.0,
			max_size: 4.0,
			min_duration: 8.0,
			max_duration: 13.0,
			max_delay: 5.0,
		}
	}
}

impl ParticleConfig {
	/// Returns a copy with ordered, non-negative ranges.
	pub fn validated(&self) -> Self {
		let (min_size, max_size) = ordered(self.min_size.max(0.0), self.max_size.max(0.0));
		let (min_duration, max_duration) =
			ordered(self.min_duration.max(0.0), self.max_duration.max(0.0));
		Self {
			count: self.count,
			min_size,
			max_size,
			min_duration,
			max_duration,
			max_delay: self.max_delay.max(0.0),
		}
	}
}

fn ordered(a: f64, b: f64) -> (f64, f64) {
	if a <= b { (a, b) } else { (b, a) }
}

/// Orbit motion parameters.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct OrbitConfig {
	/// Angle added per animation frame, in radians.
	///
	/// Rotation rate therefore scales with the display refresh rate.
	pub speed: f64,
	/// Peak vertical bobbing offset in pixels.
	pub bobbing_intensity: f64,
	/// Bobbing frequency relative to the orbit angle.
	pub bobbing_speed: f64,
	/// Distance kept between the orbit ellipse and the container edge, in pixels.
	pub icon_padding: f64,
}

impl Default for OrbitConfig {
	fn default() -> Self {
		Self {
			speed: 0.005,
			bobbing_intensity: 10.0,
			bobbing_speed: 2.0,
			icon_padding: 30.0,
		}
	}
}

/// Resize handling.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct ResizeConfig {
	/// Quiet window before radii are recomputed after a burst of resize events.
	pub debounce_ms: u32,
}

impl Default for ResizeConfig {
	fn default() -> Self {
		Self { debounce_ms: 150 }
	}
}

/// Panel transition timing.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct NavigationConfig {
	/// Delay between fading out the old panel and swapping in the new one.
	pub fade_out_ms: u32,
	/// Delay between the swap and accepting the next navigation.
	pub settle_ms: u32,
}

impl Default for NavigationConfig {
	fn default() -> Self {
		Self {
			fade_out_ms: 250,
			settle_ms: 400,
		}
	}
}

/// How the host markup is located.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct SelectorConfig {
	/// Element id of the particle container.
	pub particle_container: String,
	/// Element id of the orbit container.
	pub orbit_container: String,
	/// CSS selector matching the orbiting icons.
	pub orbit_icon: String,
	/// CSS selector matching the navigation buttons.
	pub nav_button: String,
	/// CSS selector matching the content panels.
	pub content_panel: String,
	/// Button attribute naming the id of the panel it opens.
	pub target_attribute: String,
}

impl Default for SelectorConfig {
	fn default() -> Self {
		Self {
			particle_container: "particle-container".into(),
			orbit_container: "orbit-container".into(),
			orbit_icon: ".tech-icon".into(),
			nav_button: ".nav-btn".into(),
			content_panel: ".content-section".into(),
			target_attribute: "data-target".into(),
		}
	}
}

/// Complete configuration for the page.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct PortfolioConfig {
	/// Background particles.
	pub particles: ParticleConfig,
	/// Orbiting icons.
	pub orbit: OrbitConfig,
	/// Resize debounce.
	pub resize: ResizeConfig,
	/// Tab transitions.
	pub navigation: NavigationConfig,
	/// Host markup lookup.
	pub selectors: SelectorConfig,
}

impl PortfolioConfig {
	/// Parse a JSON config object.
	pub fn from_json(text: &str) -> serde_json::Result<Self> {
		serde_json::from_str(text)
	}
}
