//! Falling-particle animation for the seasonal terminal demo.
//!
//! This crate owns the full particle lifecycle: a spawn schedule that emits
//! new elements at a configured, viewport-scaled interval, per-particle fall
//! and fade trajectories, and retirement once a fall completes. Everything
//! runs cooperatively from the host's tick loop; there are no threads and no
//! shared mutable module state.

mod animator;
mod chars;
mod color;
mod particle;

pub use animator::{AnimatorError, MAX_PARTICLES, ParticleAnimator};
pub use color::attenuate;
pub use particle::Particle;
