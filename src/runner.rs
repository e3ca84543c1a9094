//! Frame-driven loop for the simulation.
//!
//! Replaces a host-scheduler callback with an explicit paced loop: each
//! frame steps the physics, hands the store to the renderer, then sleeps
//! out the remainder of the frame interval. A shared stop flag gates every
//! iteration so another thread can shut the loop down cleanly.

use crate::core::sim::Simulation;
use crate::error::{Error, Result};
use crate::render::Renderer;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

/// Cloneable handle that stops a running [`FrameLoop`] before its next frame.
#[derive(Debug, Clone)]
pub struct StopHandle(Arc<AtomicBool>);

impl StopHandle {
    /// Request the loop to exit. Takes effect before the next frame starts.
    pub fn stop(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    /// True once a stop has been requested.
    pub fn is_stopped(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Paced frame loop driving a [`Simulation`] against a [`Renderer`].
#[derive(Debug)]
pub struct FrameLoop {
    interval: Duration,
    stop: Arc<AtomicBool>,
}

impl FrameLoop {
    /// Create a loop targeting `fps` frames per second.
    ///
    /// Errors: `Error::InvalidParam` if `fps` is zero.
    pub fn new(fps: u32) -> Result<Self> {
        if fps == 0 {
            return Err(Error::InvalidParam("fps must be > 0".into()));
        }
        Ok(Self {
            interval: Duration::from_secs(1) / fps,
            stop: Arc::new(AtomicBool::new(false)),
        })
    }

    /// Handle for stopping this loop, usable from any thread.
    pub fn stop_handle(&self) -> StopHandle {
        StopHandle(Arc::clone(&self.stop))
    }

    /// Run until the stop handle fires: step, render, sleep per frame.
    pub fn run<R: Renderer>(&self, sim: &mut Simulation, renderer: &mut R) {
        log::debug!(
            "frame loop started: {} particles, {:?} interval",
            sim.num_particles(),
            self.interval
        );
        while !self.stop.load(Ordering::Relaxed) {
            self.frame(sim, renderer);
        }
        log::debug!("frame loop stopped");
    }

    /// Run at most `frames` frames, honoring the stop handle between frames.
    pub fn run_frames<R: Renderer>(&self, sim: &mut Simulation, renderer: &mut R, frames: u64) {
        for _ in 0..frames {
            if self.stop.load(Ordering::Relaxed) {
                break;
            }
            self.frame(sim, renderer);
        }
    }

    fn frame<R: Renderer>(&self, sim: &mut Simulation, renderer: &mut R) {
        let frame_start = Instant::now();
        sim.step();
        sim.render(renderer);
        if let Some(remaining) = self.interval.checked_sub(frame_start.elapsed()) {
            thread::sleep(remaining);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_fps_rejected() {
        let err = FrameLoop::new(0).unwrap_err();
        assert!(err.to_string().contains("fps"));
    }

    #[test]
    fn stop_handle_round_trips() -> Result<()> {
        let frame_loop = FrameLoop::new(60)?;
        let handle = frame_loop.stop_handle();
        assert!(!handle.is_stopped());
        handle.stop();
        assert!(handle.is_stopped());
        // Clones observe the same flag.
        assert!(frame_loop.stop_handle().is_stopped());
        Ok(())
    }
}
