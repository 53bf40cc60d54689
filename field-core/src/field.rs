use crate::{config::Config, point::Point, types::Color};
use glam::Vec2;

/// The full grid of dots covering a viewport.
///
/// A field is never patched in place: on resize a new one is built and
/// swapped in whole.
#[derive(Clone, Debug, Default)]
pub struct Field {
    pub points: Vec<Point>,
}

impl Field {
    /// Builds a grid over `width x height` with the given `spacing`.
    ///
    /// Origins are placed at `x = 0, spacing, 2 * spacing, ...` while
    /// `x < width`, and likewise for `y`, so the last row and column may
    /// leave a partial gap. Points are ordered column by column (outer
    /// loop over `x`, inner over `y`).
    ///
    /// ### Parameters
    /// - `width`, `height` - Viewport size; zero, negative or non-finite
    ///   sizes produce an empty field.
    /// - `spacing` - Grid step; a non-positive spacing produces an empty field.
    /// - `radius`, `color` - Rendering attributes copied into every point.
    ///
    /// ### Returns
    /// A field with `ceil(width / spacing) * ceil(height / spacing)` points.
    pub fn build(width: f32, height: f32, spacing: f32, radius: f32, color: Color) -> Self {
        let cols = cells_along(width, spacing);
        let rows = cells_along(height, spacing);

        let mut points = Vec::with_capacity(cols.saturating_mul(rows));
        for i in 0..cols {
            let x = i as f32 * spacing;
            for j in 0..rows {
                let y = j as f32 * spacing;
                points.push(Point::new(Vec2::new(x, y), radius, color));
            }
        }

        Self { points }
    }

    /// Builds a field for a viewport using the grid and dot settings in `cfg`.
    pub fn for_viewport(size: Vec2, cfg: &Config) -> Self {
        Self::build(size.x, size.y, cfg.dot_spacing, cfg.dot_radius, cfg.dot_color)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Number of grid steps `0, s, 2s, ...` strictly below `extent`.
fn cells_along(extent: f32, spacing: f32) -> usize {
    if !(extent.is_finite() && extent > 0.0 && spacing.is_finite() && spacing > 0.0) {
        return 0;
    }
    (extent / spacing).ceil() as usize
}
