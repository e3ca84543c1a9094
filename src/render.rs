use crate::core::particle::Rgb;

/// Drawing surface collaborator.
///
/// The simulation calls `clear` once per frame and then `draw_circle` for
/// every particle in store order. Implementations own all presentation
/// concerns (canvas binding, color formatting, actual rasterization).
pub trait Renderer {
    /// Wipe the drawing surface for a new frame.
    fn clear(&mut self, width: f64, height: f64);

    /// Draw one filled circle.
    fn draw_circle(&mut self, x: f64, y: f64, radius: f64, color: Rgb);
}
