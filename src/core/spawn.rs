//! Overlap-rejecting population of the particle store.

use crate::config::SimConfig;
use crate::core::particle::Particle;
use crate::core::random::{random_color, random_coordinate, random_radius, split_velocity};
use crate::core::store::ParticleStore;
use crate::error::{Error, Result};
use rand::Rng;

/// Flag every particle that overlaps another, scanning all unordered pairs
/// in store order. Detection only; velocities are untouched.
pub fn flag_overlaps(store: &mut ParticleStore) {
    let particles = store.as_mut_slice();
    let n = particles.len();
    for i in 0..n {
        for j in (i + 1)..n {
            if particles[i].overlaps(&particles[j]) {
                particles[i].colliding = true;
                particles[j].colliding = true;
            }
        }
    }
}

/// Fill the store up to `cfg.num_balls` particles, rejecting any candidate
/// that overlaps an existing particle.
///
/// Each candidate draws its attributes in a fixed order (radius, x, y,
/// color, velocity split) and is appended before the overlap check, so a
/// rejected candidate is removed again via `pop_last`. Only successful
/// insertions count toward the target. The retry loop is capped by
/// `cfg.max_attempts`; `None` preserves the historical unbounded behavior,
/// which does not terminate on an over-packed canvas.
pub fn populate<R: Rng>(store: &mut ParticleStore, cfg: &SimConfig, rng: &mut R) -> Result<()> {
    let mut rejections = 0usize;
    while store.len() < cfg.num_balls {
        if let Some(max) = cfg.max_attempts {
            if rejections >= max {
                return Err(Error::PlacementExhausted {
                    attempts: rejections,
                    context: format!(
                        "spawning particle {} of {} without overlap",
                        store.len() + 1,
                        cfg.num_balls
                    ),
                });
            }
        }

        let radius = random_radius(rng, cfg);
        let x = random_coordinate(rng, radius, cfg.width, cfg)?;
        let y = random_coordinate(rng, radius, cfg.height, cfg)?;
        let color = random_color(rng);
        let proportion = rng.random::<f64>();
        let (dx, dy) = split_velocity(rng, radius, proportion, cfg);

        let id = store.add_with(|id| Particle::new(id, x, y, dx, dy, radius, color))?;

        flag_overlaps(store);
        let rejected = store.last().is_some_and(|p| p.colliding);
        if rejected {
            store.pop_last();
            rejections += 1;
            log::trace!("rejected overlapping candidate {id} at ({x}, {y}), radius {radius}");
        }
        store.clear_collision_flags();
    }
    Ok(())
}
