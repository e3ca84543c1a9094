use ballsim::{FrameLoop, Renderer, Result, Rgb, SimConfig, Simulation};
use std::thread;
use std::time::Duration;

/// Recording renderer: counts clears and captures draw calls in order.
#[derive(Debug, Default)]
struct Recorder {
    clears: usize,
    draws: Vec<(f64, f64, f64, Rgb)>,
}

impl Renderer for Recorder {
    fn clear(&mut self, _width: f64, _height: f64) {
        self.clears += 1;
    }

    fn draw_circle(&mut self, x: f64, y: f64, radius: f64, color: Rgb) {
        self.draws.push((x, y, radius, color));
    }
}

fn small_sim(num_balls: usize, seed: u64) -> Result<Simulation> {
    let cfg = SimConfig {
        num_balls,
        ..SimConfig::default()
    };
    Simulation::new(cfg, Some(seed))
}

/// `run_frames(n)` clears once per frame and draws every particle each
/// frame, in store order.
#[test]
fn run_frames_renders_each_frame() -> Result<()> {
    let mut sim = small_sim(5, 21)?;
    let frame_loop = FrameLoop::new(1000)?;
    let mut recorder = Recorder::default();

    frame_loop.run_frames(&mut sim, &mut recorder, 3);

    assert_eq!(recorder.clears, 3, "one clear per frame");
    assert_eq!(recorder.draws.len(), 3 * 5, "five circles per frame");

    // The last frame's draws line up with the store's current state and
    // order.
    let last_frame = &recorder.draws[2 * 5..];
    for (drawn, p) in last_frame.iter().zip(sim.store().iter()) {
        assert_eq!(drawn.0, p.x);
        assert_eq!(drawn.1, p.y);
        assert_eq!(drawn.2, p.radius);
        assert_eq!(drawn.3, p.color);
    }
    Ok(())
}

/// A pre-fired stop handle prevents any frame from running.
#[test]
fn stopped_loop_runs_no_frames() -> Result<()> {
    let mut sim = small_sim(3, 22)?;
    let frame_loop = FrameLoop::new(60)?;
    frame_loop.stop_handle().stop();

    let mut recorder = Recorder::default();
    frame_loop.run(&mut sim, &mut recorder);
    assert_eq!(recorder.clears, 0, "stopped loop must not step or render");

    frame_loop.run_frames(&mut sim, &mut recorder, 10);
    assert_eq!(recorder.clears, 0, "run_frames honors the stop flag too");
    Ok(())
}

/// Stopping from another thread terminates an indefinite `run`.
#[test]
fn stop_handle_terminates_running_loop() -> Result<()> {
    let mut sim = small_sim(3, 23)?;
    let frame_loop = FrameLoop::new(500)?;
    let handle = frame_loop.stop_handle();

    let stopper = thread::spawn(move || {
        thread::sleep(Duration::from_millis(20));
        handle.stop();
    });

    let mut recorder = Recorder::default();
    frame_loop.run(&mut sim, &mut recorder);

    stopper.join().expect("stopper thread panicked");
    assert!(
        recorder.clears >= 1,
        "the loop should have rendered at least one frame before stopping"
    );
    Ok(())
}

/// Particles keep moving across frames: positions change under the loop.
#[test]
fn frames_advance_particle_positions() -> Result<()> {
    let mut sim = small_sim(4, 24)?;
    let before: Vec<(f64, f64)> = sim.store().iter().map(|p| (p.x, p.y)).collect();

    let frame_loop = FrameLoop::new(1000)?;
    let mut recorder = Recorder::default();
    frame_loop.run_frames(&mut sim, &mut recorder, 5);

    let moved = sim
        .store()
        .iter()
        .zip(&before)
        .any(|(p, (x, y))| p.x != *x || p.y != *y);
    assert!(moved, "five frames of integration must move some particle");
    Ok(())
}
