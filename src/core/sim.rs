use crate::config::SimConfig;
use crate::core::spawn;
use crate::core::store::ParticleStore;
use crate::error::Result;
use crate::render::Renderer;
use rand::{rng, rngs::StdRng, Rng, SeedableRng};

/// Centers closer than this are treated as a degenerate contact with no
/// usable collision normal.
const EPS_DIST: f64 = 1e-12;

/// Frame-stepped simulation of circular particles bouncing inside an
/// axis-aligned canvas.
///
/// Each `step` runs the fixed pipeline: pairwise collision resolution,
/// wall reflection, then Euler integration. The canvas spans
/// `[0, width] x [0, height]` with walls implicit at the four edges.
#[derive(Debug)]
pub struct Simulation {
    config: SimConfig,
    store: ParticleStore,
}

impl Simulation {
    /// Create a new simulation and populate it with `config.num_balls`
    /// non-overlapping particles.
    ///
    /// `seed` makes the spawn deterministic; `None` seeds from entropy.
    pub fn new(config: SimConfig, seed: Option<u64>) -> Result<Self> {
        config.validate()?;

        let mut rng: StdRng = match seed {
            Some(s) => SeedableRng::seed_from_u64(s),
            None => SeedableRng::seed_from_u64(rng().random()),
        };

        let mut store = ParticleStore::new();
        spawn::populate(&mut store, &config, &mut rng)?;
        log::debug!(
            "spawned {} particles on a {}x{} canvas",
            store.len(),
            config.width,
            config.height
        );

        Ok(Self { config, store })
    }

    /// The immutable configuration this simulation was built with.
    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Read access to the particle store.
    pub fn store(&self) -> &ParticleStore {
        &self.store
    }

    /// Mutable access to the particle store (e.g. for scripted scenarios).
    pub fn store_mut(&mut self) -> &mut ParticleStore {
        &mut self.store
    }

    /// Number of particles.
    pub fn num_particles(&self) -> usize {
        self.store.len()
    }

    /// Advance the simulation by one frame: resolve pairwise collisions,
    /// reflect off walls, then integrate positions.
    pub fn step(&mut self) {
        self.resolve_collisions();
        self.bounce_walls();
        self.integrate();
    }

    /// Hand the current frame to the renderer: clear, then one circle per
    /// particle in store order.
    pub fn render<R: Renderer>(&self, renderer: &mut R) {
        renderer.clear(self.config.width, self.config.height);
        for p in self.store.iter() {
            renderer.draw_circle(p.x, p.y, p.radius, p.color);
        }
    }

    // ============ Physics pipeline ============

    /// Detect and resolve pairwise collisions.
    ///
    /// For each overlapping pair, both particles are flagged and an impulse
    /// of `2 * speed / (r_i + r_j)` along the contact normal is applied,
    /// weighted by the *other* particle's radius (a radius-as-mass
    /// approximation of the elastic response). A pair already separating
    /// along the normal (`speed < 0`) ends the inner scan for the current
    /// `i`; remaining `j` partners are picked up next frame. Coincident
    /// centers have no usable normal: the pair is flagged but left
    /// unresolved.
    fn resolve_collisions(&mut self) {
        self.store.clear_collision_flags();

        let particles = self.store.as_mut_slice();
        let n = particles.len();
        for i in 0..n {
            for j in (i + 1)..n {
                if !particles[i].overlaps(&particles[j]) {
                    continue;
                }
                particles[i].colliding = true;
                particles[j].colliding = true;

                let cx = particles[j].x - particles[i].x;
                let cy = particles[j].y - particles[i].y;
                let distance = (cx * cx + cy * cy).sqrt();
                if distance <= EPS_DIST {
                    log::warn!(
                        "degenerate contact between particles {} and {}: coincident centers",
                        particles[i].id,
                        particles[j].id
                    );
                    continue;
                }
                let nx = cx / distance;
                let ny = cy / distance;

                // Relative velocity projected onto the contact normal.
                let speed = (particles[i].dx - particles[j].dx) * nx
                    + (particles[i].dy - particles[j].dy) * ny;
                if speed < 0.0 {
                    break;
                }

                let impulse = 2.0 * speed / (particles[i].radius + particles[j].radius);
                let (ri, rj) = (particles[i].radius, particles[j].radius);
                particles[i].dx -= impulse * rj * nx;
                particles[i].dy -= impulse * rj * ny;
                particles[j].dx += impulse * ri * nx;
                particles[j].dy += impulse * ri * ny;
            }
        }
    }

    /// Reflect particles whose leading edge crossed a canvas boundary.
    ///
    /// The four walls are checked in fixed order (left, right, top, bottom)
    /// with `else if` semantics: at most one axis is corrected per particle
    /// per frame, so a corner hit resolves over two frames.
    fn bounce_walls(&mut self) {
        let (width, height) = (self.config.width, self.config.height);
        for p in self.store.as_mut_slice() {
            if p.x - p.radius < 0.0 {
                p.dx = -p.dx;
            } else if p.x + p.radius > width {
                p.dx = -p.dx;
            } else if p.y - p.radius < 0.0 {
                p.dy = -p.dy;
            } else if p.y + p.radius > height {
                p.dy = -p.dy;
            }
        }
    }

    /// Euler integration: add each particle's per-frame displacement to its
    /// position. No time-delta scaling; motion is frame-rate dependent.
    fn integrate(&mut self) {
        for p in self.store.as_mut_slice() {
            p.x += p.dx;
            p.y += p.dy;
        }
    }
}
