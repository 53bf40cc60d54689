use crate::types::Color;
use glam::Vec2;

/// Minimal drawing capability the frame driver needs.
///
/// Implementors map these calls onto a real canvas (an egui painter in
/// the viewer, a recorder in tests).
pub trait Surface {
    /// Clears the whole drawing area.
    fn clear(&mut self);

    /// Draws a filled disc of `radius` centered at `center`.
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color);
}
