//! Decorative background particles.
//!
//! Generated once at page start and never updated; the float animation is
//! driven entirely by CSS using the per-particle duration and delay.

mod component;
mod generator;

pub use component::{BatchNode, ParticleField, attach_in_one_batch, mount_particles};
pub use generator::{ParticleSpec, generate, generate_from};
