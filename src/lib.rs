//! 2D bouncing-ball simulation core.
//!
//! Circular particles spawn at non-overlapping random positions inside a
//! bounded canvas and bounce elastically off the walls and each other. The
//! crate owns the physics: radius-weighted impulse resolution for pairwise
//! collisions, fixed-order wall reflection, and per-frame Euler
//! integration. Drawing is delegated to a [`Renderer`] implementation, and
//! [`FrameLoop`] drives the step/render cycle with an explicit stop signal.
//!
//! ```no_run
//! use ballsim::{FrameLoop, Renderer, Rgb, SimConfig, Simulation};
//!
//! struct Console;
//! impl Renderer for Console {
//!     fn clear(&mut self, _w: f64, _h: f64) {}
//!     fn draw_circle(&mut self, x: f64, y: f64, r: f64, _c: Rgb) {
//!         println!("circle at ({x:.1}, {y:.1}) radius {r}");
//!     }
//! }
//!
//! fn main() -> ballsim::Result<()> {
//!     let mut sim = Simulation::new(SimConfig::new(800.0, 600.0), None)?;
//!     let frame_loop = FrameLoop::new(60)?;
//!     frame_loop.run_frames(&mut sim, &mut Console, 600);
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod core;
pub mod error;
pub mod render;
pub mod runner;

pub use config::SimConfig;
pub use core::{Particle, ParticleStore, Rgb, Simulation};
pub use error::{Error, Result};
pub use render::Renderer;
pub use runner::{FrameLoop, StopHandle};
