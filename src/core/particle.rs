use crate::error::{Error, Result};

/// An opaque display color, split from a 24-bit integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb {
    /// Split a 24-bit integer into byte channels. Bits above 24 are ignored.
    #[inline]
    pub fn from_u24(n: u32) -> Self {
        Self {
            r: ((n >> 16) & 0xff) as u8,
            g: ((n >> 8) & 0xff) as u8,
            b: (n & 0xff) as u8,
        }
    }
}

/// A circular particle bouncing within the canvas.
///
/// Fields:
/// - `id`: stable identifier, assigned by the store at insertion
/// - `x`, `y`: center coordinates
/// - `dx`, `dy`: per-frame displacement
/// - `radius`: circle radius (> 0), fixed for the particle's lifetime
/// - `color`: display attribute, immutable after creation
/// - `colliding`: transient flag, recomputed every frame by the physics step
#[derive(Debug, Clone)]
pub struct Particle {
    /// Stable particle identifier.
    pub id: u32,
    /// Center x coordinate.
    pub x: f64,
    /// Center y coordinate.
    pub y: f64,
    /// Per-frame x displacement.
    pub dx: f64,
    /// Per-frame y displacement.
    pub dy: f64,
    /// Circle radius (> 0).
    pub radius: f64,
    /// Display color.
    pub color: Rgb,
    /// Set while the particle overlaps another this frame.
    pub colliding: bool,
}

impl Particle {
    /// Create a new particle after validating invariants.
    ///
    /// Errors:
    /// - `Error::InvalidParam` if `radius` is non-positive or any coordinate
    ///   or velocity component is NaN/inf.
    pub fn new(id: u32, x: f64, y: f64, dx: f64, dy: f64, radius: f64, color: Rgb) -> Result<Self> {
        if !radius.is_finite() || radius <= 0.0 {
            return Err(Error::InvalidParam("radius must be finite and > 0".into()));
        }
        if !x.is_finite() || !y.is_finite() {
            return Err(Error::InvalidParam("position must be finite".into()));
        }
        if !dx.is_finite() || !dy.is_finite() {
            return Err(Error::InvalidParam("velocity must be finite".into()));
        }
        Ok(Self {
            id,
            x,
            y,
            dx,
            dy,
            radius,
            color,
            colliding: false,
        })
    }

    /// Squared center distance to `other`.
    #[inline]
    pub fn distance_sq(&self, other: &Particle) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }

    /// True when this particle overlaps `other` (center distance at most the
    /// sum of radii; compared in squared form).
    #[inline]
    pub fn overlaps(&self, other: &Particle) -> bool {
        let r_sum = self.radius + other.radius;
        self.distance_sq(other) <= r_sum * r_sum
    }
}
