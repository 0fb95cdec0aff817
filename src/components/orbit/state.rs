//! Orbit angle and per-element placement.
//!
//! Elements sit evenly spaced on an ellipse centered in the container. Each
//! frame the shared angle advances by a fixed step, and every element gets a
//! vertical sine "bob" phase-shifted by its index so neighbors never pulse in
//! unison.

use std::f64::consts::TAU;

use super::metrics::{OrbitRadii, SharedRadii};
use crate::config::OrbitConfig;

/// Motion constants for the orbit.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrbitParams {
	/// Radians added per frame.
	pub speed: f64,
	/// Peak vertical bob in pixels.
	pub bobbing_amplitude: f64,
	/// Bob frequency as a multiple of the orbit angle.
	pub bobbing_speed: f64,
}

impl From<&OrbitConfig> for OrbitParams {
	fn from(config: &OrbitConfig) -> Self {
		Self {
			speed: config.speed,
			bobbing_amplitude: config.bobbing_intensity,
			bobbing_speed: config.bobbing_speed,
		}
	}
}

/// Offset of an element from the orbit center, in CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Translation {
	/// Horizontal offset.
	pub x: f64,
	/// Vertical offset, bob included.
	pub y: f64,
}

impl Translation {
	/// CSS transform value. `translate3d` keeps the icon on its own compositor layer.
	pub fn to_css(self) -> String {
		format!("translate3d({}px, {}px, 0)", self.x, self.y)
	}
}

/// Orbit angle plus the radii it is drawn with.
#[derive(Clone, Debug)]
pub struct OrbitState {
	angle: f64,
	radii: SharedRadii,
	count: usize,
}

impl OrbitState {
	/// `count` elements at angle zero.
	pub fn new(count: usize, radii: SharedRadii) -> Self {
		Self {
			angle: 0.0,
			radii,
			count,
		}
	}

	/// Accumulated angle in radians.
	pub fn angle(&self) -> f64 {
		self.angle
	}

	/// Angular distance between neighbors. Zero when there are no elements.
	pub fn angular_step(&self) -> f64 {
		if self.count == 0 {
			0.0
		} else {
			TAU / self.count as f64
		}
	}

	/// Angle of element `index` on the ellipse.
	pub fn element_angle(&self, index: usize) -> f64 {
		self.angle + index as f64 * self.angular_step()
	}

	/// Advance one frame.
	///
	/// The step is per frame, not per second: a 120 Hz display rotates twice
	/// as fast as a 60 Hz one.
	pub fn advance(&mut self, params: &OrbitParams) {
		self.angle += params.speed;
	}

	/// Placement of element `index` at the current angle.
	pub fn translation(&self, index: usize, params: &OrbitParams) -> Translation {
		self.place(index, self.radii.get(), params)
	}

	/// Placements for all elements, reading the radii once so every element
	/// of a frame uses the same ellipse.
	pub fn translations(&self, params: &OrbitParams) -> Vec<Translation> {
		let radii = self.radii.get();
		(0..self.count)
			.map(|i| self.place(i, radii, params))
			.collect()
	}

	fn place(&self, index: usize, radii: OrbitRadii, params: &OrbitParams) -> Translation {
		let theta = self.element_angle(index);
		let bobbing =
			(self.angle * params.bobbing_speed + index as f64).sin() * params.bobbing_amplitude;
		Translation {
			x: radii.x * theta.cos(),
			y: radii.y * theta.sin() + bobbing,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	const EPS: f64 = 1e-9;

	fn params() -> OrbitParams {
		OrbitParams::from(&OrbitConfig::default())
	}

	fn state(count: usize, x: f64, y: f64) -> OrbitState {
		OrbitState::new(count, SharedRadii::new(OrbitRadii { x, y }))
	}

	#[test]
	fn step_divides_the_circle_evenly() {
		for n in 1..=12 {
			let s = state(n, 100.0, 50.0);
			assert!((s.angular_step() - TAU / n as f64).abs() < EPS);
		}
	}

	#[test]
	fn element_angles_are_distinct_and_evenly_spaced() {
		let mut s = state(5, 100.0, 50.0);
		s.advance(&params());
		s.advance(&params());
		let step = s.angular_step();
		let angles: Vec<f64> = (0..5).map(|i| s.element_angle(i)).collect();

		for (i, a) in angles.iter().enumerate() {
			assert!((a - (s.angle() + i as f64 * step)).abs() < EPS);
		}
		for i in 0..5 {
			for j in (i + 1)..5 {
				assert!((angles[i] - angles[j]).abs() > EPS);
			}
		}
	}

	#[test]
	fn advance_adds_speed_per_frame() {
		let mut s = state(3, 100.0, 50.0);
		for _ in 0..10 {
			s.advance(&params());
		}
		assert!((s.angle() - 0.05).abs() < EPS);
	}

	#[test]
	fn translation_follows_ellipse_plus_bobbing() {
		let mut s = state(4, 200.0, 100.0);
		let p = params();
		s.advance(&p);
		let angle = s.angle();

		for i in 0..4 {
			let theta = angle + i as f64 * TAU / 4.0;
			let bob = (angle * 2.0 + i as f64).sin() * 10.0;
			let t = s.translation(i, &p);
			assert!((t.x - 200.0 * theta.cos()).abs() < EPS);
			assert!((t.y - (100.0 * theta.sin() + bob)).abs() < EPS);
		}
		assert_eq!(s.translations(&p)[3], s.translation(3, &p));
	}

	#[test]
	fn bobbing_is_out_of_phase_between_elements() {
		let s = state(3, 0.0, 0.0);
		let t = s.translations(&params());
		assert!((t[0].y - t[1].y).abs() > 1.0);
		assert!((t[0].y - t[2].y).abs() > 1.0);
	}

	#[test]
	fn radii_updates_apply_on_next_read() {
		let radii = SharedRadii::new(OrbitRadii { x: 100.0, y: 100.0 });
		let s = OrbitState::new(1, radii.clone());
		let p = OrbitParams {
			speed: 0.0,
			bobbing_amplitude: 0.0,
			bobbing_speed: 0.0,
		};
		assert_eq!(s.translation(0, &p).x, 100.0);
		radii.set(OrbitRadii { x: 40.0, y: 20.0 });
		assert_eq!(s.translation(0, &p).x, 40.0);
	}

	#[test]
	fn css_uses_translate3d() {
		let t = Translation { x: 12.5, y: -3.0 };
		assert_eq!(t.to_css(), "translate3d(12.5px, -3px, 0)");
	}
}
