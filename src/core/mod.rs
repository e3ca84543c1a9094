//! Core simulation data structures and the frame-stepped engine.
//!
//! `particle` and `store` hold the entity model, `random` generates spawn
//! attributes, `spawn` places particles without overlap, and `sim` runs the
//! per-frame physics pipeline.

pub mod particle;
pub mod random;
pub mod sim;
pub mod spawn;
pub mod store;

pub use particle::{Particle, Rgb};
pub use sim::Simulation;
pub use store::ParticleStore;
