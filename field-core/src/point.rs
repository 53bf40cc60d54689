use crate::types::Color;
use glam::Vec2;

/// A single dot of the field.
///
/// `pos` and `vel` change every frame; the origin is fixed at
/// construction and only readable afterwards.
#[derive(Clone, Debug, PartialEq)]
pub struct Point {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub color: Color,
    origin: Vec2,
}

impl Point {
    /// Creates a resting point at `origin` (`pos == origin`, zero velocity).
    pub fn new(origin: Vec2, radius: f32, color: Color) -> Self {
        Self {
            pos: origin,
            vel: Vec2::ZERO,
            radius,
            color,
            origin,
        }
    }

    #[inline]
    pub fn origin(&self) -> Vec2 {
        self.origin
    }
}
