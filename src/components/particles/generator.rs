//! Randomized layout for the floating background particles.

use std::ops::RangeInclusive;

use crate::config::ParticleConfig;

/// Layout of a single particle. Fixed once generated.
#[derive(Clone, Debug, PartialEq)]
pub struct ParticleSpec {
	/// Edge length in pixels.
	pub size: f64,
	/// Horizontal position as a percentage of the container width.
	pub left: f64,
	/// Float animation duration in seconds.
	pub duration: f64,
	/// Float animation start delay in seconds.
	pub delay: f64,
}

impl ParticleSpec {
	/// Inline style placing and timing the particle.
	pub fn style(&self) -> String {
		format!(
			"width: {size}px; height: {size}px; left: {left}%; animation-duration: {duration}s; animation-delay: {delay}s;",
			size = self.size,
			left = self.left,
			duration = self.duration,
			delay = self.delay,
		)
	}
}

/// Draw `count` particles, each value independently uniform over its range.
pub fn generate(
	rng: &mut fastrand::Rng,
	count: usize,
	size: RangeInclusive<f64>,
	duration: RangeInclusive<f64>,
	max_delay: f64,
) -> Vec<ParticleSpec> {
	(0..count)
		.map(|_| ParticleSpec {
			size: uniform(rng, &size),
			duration: uniform(rng, &duration),
			delay: rng.f64() * max_delay,
			left: rng.f64() * 100.0,
		})
		.collect()
}

/// [`generate`] with the ranges of a [`ParticleConfig`].
pub fn generate_from(rng: &mut fastrand::Rng, config: &ParticleConfig) -> Vec<ParticleSpec> {
	let config = config.validated();
	generate(
		rng,
		config.count,
		config.min_size..=config.max_size,
		config.min_duration..=config.max_duration,
		config.max_delay,
	)
}

fn uniform(rng: &mut fastrand::Rng, range: &RangeInclusive<f64>) -> f64 {
	range.start() + rng.f64() * (range.end() - range.start())
}
