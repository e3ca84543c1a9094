use crate::core::particle::Particle;
use crate::error::Result;

/// Ordered collection of particles with internally assigned identifiers.
///
/// Iteration order is insertion order; the physics step's pairwise scans
/// rely on that ordering being stable. Ids increase monotonically and are
/// never reused, even when a freshly added particle is removed again by the
/// spawner's rejection path.
#[derive(Debug, Default)]
pub struct ParticleStore {
    particles: Vec<Particle>,
    next_id: u32,
}

impl ParticleStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate the next id and append the particle built by `make`,
    /// returning the assigned id.
    ///
    /// The id counter advances even if the particle is later removed.
    pub fn add_with<F>(&mut self, make: F) -> Result<u32>
    where
        F: FnOnce(u32) -> Result<Particle>,
    {
        let id = self.next_id;
        let particle = make(id)?;
        self.next_id += 1;
        self.particles.push(particle);
        Ok(id)
    }

    /// Remove and return the most recently added particle, if any.
    pub fn pop_last(&mut self) -> Option<Particle> {
        self.particles.pop()
    }

    /// Number of particles currently stored.
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    /// True when the store holds no particles.
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Most recently added particle, if any.
    pub fn last(&self) -> Option<&Particle> {
        self.particles.last()
    }

    /// Particle at `index` in insertion order.
    pub fn get(&self, index: usize) -> Option<&Particle> {
        self.particles.get(index)
    }

    /// Mutable particle at `index` in insertion order.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut Particle> {
        self.particles.get_mut(index)
    }

    /// Iterate particles in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Particle> {
        self.particles.iter()
    }

    /// View the particles as a slice in insertion order.
    pub fn as_slice(&self) -> &[Particle] {
        &self.particles
    }

    /// View the particles as a mutable slice in insertion order.
    pub fn as_mut_slice(&mut self) -> &mut [Particle] {
        &mut self.particles
    }

    /// Reset every particle's transient collision flag.
    pub fn clear_collision_flags(&mut self) {
        for p in &mut self.particles {
            p.colliding = false;
        }
    }
}
