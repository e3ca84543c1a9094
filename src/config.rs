use crate::error::{Error, Result};

/// Immutable simulation configuration, fixed at construction time.
///
/// Defaults mirror the historical tuning constants: a radius range of
/// `[20, 30]`, a global speed multiplier of 20, 20 particles, and a scaling
/// base of 5000 for the randomized-attribute formulas. Canvas dimensions
/// have no natural default and should come from the host viewport.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Canvas width in pixels.
    pub width: f64,
    /// Canvas height in pixels.
    pub height: f64,
    /// Minimum particle radius.
    pub min_size: f64,
    /// Width of the radius range above `min_size`; generated radii fall in
    /// `[min_size, min_size + max_size]`.
    pub max_size: f64,
    /// Global speed scale applied to every generated velocity.
    pub speed_multiplier: f64,
    /// Target particle count for the spawner.
    pub num_balls: usize,
    /// Large scaling constant used by the modulo-of-scaled-random formulas.
    pub base_mult: f64,
    /// Cap on rejection-sampling attempts (position sampling and spawn
    /// overlap retries). `None` preserves the historical unbounded loops,
    /// which hang on an over-packed canvas.
    pub max_attempts: Option<usize>,
}

impl SimConfig {
    /// Attempt cap applied by `Default`.
    pub const DEFAULT_MAX_ATTEMPTS: usize = 1_000_000;

    /// Create a configuration for the given canvas size with default tuning.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    /// Largest radius the generators can produce.
    #[inline]
    pub fn max_radius(&self) -> f64 {
        self.min_size + self.max_size
    }

    /// Validate all fields.
    ///
    /// Errors:
    /// - `Error::InvalidParam` if any numeric field is non-finite or
    ///   non-positive, if `num_balls` is zero, or if either canvas dimension
    ///   does not exceed twice the largest possible radius (which would make
    ///   position sampling unsatisfiable).
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("width", self.width),
            ("height", self.height),
            ("min_size", self.min_size),
            ("max_size", self.max_size),
            ("speed_multiplier", self.speed_multiplier),
            ("base_mult", self.base_mult),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(Error::InvalidParam(format!(
                    "{name} must be finite and > 0, got {value}"
                )));
            }
        }
        if self.num_balls == 0 {
            return Err(Error::InvalidParam("num_balls must be > 0".into()));
        }
        let min_extent = 2.0 * self.max_radius();
        if self.width <= min_extent || self.height <= min_extent {
            return Err(Error::InvalidParam(format!(
                "canvas dimensions must exceed 2 * (min_size + max_size) = {min_extent} \
                 so every generated particle can fit"
            )));
        }
        if let Some(0) = self.max_attempts {
            return Err(Error::InvalidParam(
                "max_attempts must be > 0 when set".into(),
            ));
        }
        Ok(())
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
            min_size: 20.0,
            max_size: 10.0,
            speed_multiplier: 20.0,
            num_balls: 20,
            base_mult: 5000.0,
            max_attempts: Some(Self::DEFAULT_MAX_ATTEMPTS),
        }
    }
}
