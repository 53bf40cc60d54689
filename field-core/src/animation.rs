//! Owned animation state driven by the host's frame and input callbacks.
//!
//! [`AnimationState`] bundles everything the frame loop and the event
//! handlers share: the current [`Field`], the [`Cursor`], the viewport
//! size and the pending resize. The host calls the event methods as
//! input arrives and [`AnimationState::tick`] once per display refresh;
//! all of it runs on one thread, so no locking is involved.

use crate::{
    config::Config, cursor::Cursor, debounce::Debouncer, field::Field, simulator,
    surface::Surface,
};
use glam::Vec2;
use log::{debug, info};

/// Shared state of the dot animation.
///
/// ### Fields
/// - `cfg` - Physical and grid parameters.
/// - `field` - Current grid of points; replaced whole on resize.
/// - `cursor` - Last pointer position or the sentinel.
/// - `viewport` - Size the current field was built for.
/// - `resize` - Pending, debounced viewport size.
#[derive(Debug)]
pub struct AnimationState {
    pub cfg: Config,
    pub field: Field,
    pub cursor: Cursor,
    viewport: Vec2,
    resize: Debouncer<Vec2>,
    rebuilds: usize,
}

impl AnimationState {
    /// Builds the initial field for `viewport` and parks the cursor.
    pub fn new(cfg: Config, viewport: Vec2) -> Self {
        let field = Field::for_viewport(viewport, &cfg);
        info!(
            "built dot field {}x{} with {} points",
            viewport.x,
            viewport.y,
            field.len()
        );

        Self {
            cursor: Cursor::away(cfg.cursor_sentinel),
            resize: Debouncer::new(cfg.resize_quiet_secs),
            field,
            viewport,
            cfg,
            rebuilds: 0,
        }
    }

    pub fn pointer_moved(&mut self, pos: Vec2) {
        self.cursor.move_to(pos);
    }

    pub fn pointer_left(&mut self) {
        debug!("pointer left; cursor parked at sentinel");
        self.cursor.leave();
    }

    /// Records a viewport resize; the rebuild happens on the first tick
    /// after the quiet window, using the latest size.
    pub fn resized(&mut self, size: Vec2, now: f64) {
        debug!("resize to {}x{} scheduled", size.x, size.y);
        self.resize.schedule(size, now);
    }

    /// Runs one frame.
    ///
    /// 1. If a debounced resize is due, replaces the field.
    /// 2. Clears the surface and runs update-then-render over every point.
    ///
    /// ### Parameters
    /// - `now` - Host time in seconds.
    /// - `surface` - Drawing target for this frame.
    ///
    /// ### Returns
    /// `true` if the field was rebuilt in this tick.
    pub fn tick(&mut self, now: f64, surface: &mut impl Surface) -> bool {
        let rebuilt = match self.resize.poll(now) {
            Some(size) => {
                self.rebuild(size);
                true
            }
            None => false,
        };

        simulator::frame(&mut self.field, &self.cursor, &self.cfg, surface);
        rebuilt
    }

    /// Replaces the field with a fresh grid for `size`.
    pub fn rebuild(&mut self, size: Vec2) {
        self.field = Field::for_viewport(size, &self.cfg);
        self.viewport = size;
        self.rebuilds += 1;
        info!(
            "rebuilt dot field {}x{} with {} points",
            size.x,
            size.y,
            self.field.len()
        );
    }

    #[inline]
    pub fn viewport(&self) -> Vec2 {
        self.viewport
    }

    #[inline]
    pub fn resize_pending(&self) -> bool {
        self.resize.is_pending()
    }

    /// Seconds until a pending resize rebuilds the field, if one is pending.
    pub fn resize_remaining(&self, now: f64) -> Option<f64> {
        self.resize.remaining(now)
    }

    /// Number of rebuilds since construction.
    #[inline]
    pub fn rebuilds(&self) -> usize {
        self.rebuilds
    }
}
