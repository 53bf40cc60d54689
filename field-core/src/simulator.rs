//! Per-point physics and drawing.
//!
//! Each frame, every point goes through:
//! 1. [`update`] — cursor attraction (inside the radius only), a spring
//!    back to the origin, friction, then position integration.
//! 2. [`render`] — a filled disc on the [`Surface`].
//!
//! Points never interact with each other, so the order in which a field
//! is processed does not matter.

use crate::{config::Config, cursor::Cursor, field::Field, point::Point, surface::Surface};
use glam::Vec2;

/// Advances one point by a single frame.
///
/// 1. `d = pos - cursor`, `distance = |d|`.
/// 2. `force = -attraction_radius / (max(distance, min_attraction_distance) * 0.5)`.
/// 3. If `distance < attraction_radius` (strict), adds
///    `force * (cos a, sin a) * attraction_force` to the velocity, with
///    `a = atan2(d.y, d.x)`. The direction points away from the cursor and
///    the force is negative, so the net effect pulls toward it.
/// 4. Always adds `(origin - pos) * restoring_force`.
/// 5. Multiplies the velocity by `friction`.
/// 6. Integrates `pos += vel`.
///
/// With `cfg.min_attraction_distance == 0.0` a point sitting exactly on the
/// cursor receives an infinite force and its state becomes non-finite.
///
/// ### Parameters
/// - `point` - The point to advance; `pos` and `vel` are mutated.
/// - `cursor` - Current cursor state (possibly parked at the sentinel).
/// - `cfg` - Physical constants.
pub fn update(point: &mut Point, cursor: &Cursor, cfg: &Config) {
    let d = point.pos - cursor.pos;
    let distance = d.length();

    if distance < cfg.attraction_radius {
        let force = -cfg.attraction_radius / (distance.max(cfg.min_attraction_distance) * 0.5);
        let angle = d.y.atan2(d.x);
        point.vel += Vec2::new(angle.cos(), angle.sin()) * force * cfg.attraction_force;
    }

    point.vel += (point.origin() - point.pos) * cfg.restoring_force;
    point.vel *= cfg.friction;
    point.pos += point.vel;
}

/// Draws a point as a filled disc at its current position.
pub fn render(point: &Point, surface: &mut impl Surface) {
    surface.fill_circle(point.pos, point.radius, point.color);
}

/// Runs one full frame over a field: clear, then update-then-render for
/// every point.
///
/// ### Parameters
/// - `field` - Points to advance and draw.
/// - `cursor` - Cursor state read by every [`update`].
/// - `cfg` - Physical constants.
/// - `surface` - Target that is cleared once and then drawn on.
pub fn frame(field: &mut Field, cursor: &Cursor, cfg: &Config, surface: &mut impl Surface) {
    surface.clear();
    for point in field.points.iter_mut() {
        update(point, cursor, cfg);
        render(point, surface);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Color;

    const EPS: f32 = 1e-4;
    const WHITE: Color = [255, 255, 255, 179];

    #[derive(Debug, PartialEq)]
    enum Call {
        Clear,
        Circle(Vec2, f32, Color),
    }

    #[derive(Default)]
    struct Recorder {
        calls: Vec<Call>,
    }

    impl Surface for Recorder {
        fn clear(&mut self) {
            self.calls.push(Call::Clear);
        }

        fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
            self.calls.push(Call::Circle(center, radius, color));
        }
    }

    fn approx(a: Vec2, b: Vec2) -> bool {
        (a - b).abs().max_element() < EPS
    }

    fn cfg_with_radius(attraction_radius: f32) -> Config {
        Config {
            attraction_radius,
            ..Config::default()
        }
    }

    #[test]
    fn far_cursor_only_applies_restoring_and_friction() {
        let cfg = cfg_with_radius(100.0);
        let cursor = Cursor::away(Vec2::new(-1000.0, -1000.0));

        let mut p = Point::new(Vec2::new(500.0, 500.0), 1.0, WHITE);
        p.pos += Vec2::new(10.0, -4.0);

        update(&mut p, &cursor, &cfg);

        // vel = (origin - pos) * k * friction
        let expected_vel = Vec2::new(-10.0, 4.0) * cfg.restoring_force * cfg.friction;
        assert!(approx(p.vel, expected_vel), "vel = {:?}", p.vel);
        assert!(approx(p.pos, Vec2::new(510.0, 496.0) + expected_vel));
    }

    #[test]
    fn point_at_rest_and_out_of_range_stays_put() {
        let cfg = cfg_with_radius(100.0);
        let cursor = Cursor::away(Vec2::new(-1000.0, -1000.0));
        let mut p = Point::new(Vec2::new(30.0, 30.0), 1.0, WHITE);

        update(&mut p, &cursor, &cfg);

        assert_eq!(p.vel, Vec2::ZERO);
        assert_eq!(p.pos, Vec2::new(30.0, 30.0));
    }

    #[test]
    fn attraction_pulls_toward_cursor_inside_radius() {
        let cfg = cfg_with_radius(100.0);
        let mut cursor = Cursor::away(cfg.cursor_sentinel);
        cursor.move_to(Vec2::ZERO);

        let mut p = Point::new(Vec2::new(10.0, 0.0), 1.0, WHITE);
        update(&mut p, &cursor, &cfg);

        // force = -100 / (10 * 0.5) = -20; dv = -20 * 0.005 = -0.1; * 0.9
        assert!(approx(p.vel, Vec2::new(-0.09, 0.0)), "vel = {:?}", p.vel);
        assert!(approx(p.pos, Vec2::new(9.91, 0.0)));
    }

    #[test]
    fn distance_equal_to_radius_gets_no_attraction() {
        let cfg = cfg_with_radius(100.0);
        let mut cursor = Cursor::away(cfg.cursor_sentinel);
        cursor.move_to(Vec2::ZERO);

        let mut p = Point::new(Vec2::new(100.0, 0.0), 1.0, WHITE);
        update(&mut p, &cursor, &cfg);

        assert_eq!(p.vel, Vec2::ZERO);
        assert_eq!(p.pos, Vec2::new(100.0, 0.0));
    }

    #[test]
    fn sentinel_still_attracts_with_default_radius() {
        let cfg = Config::default();
        let cursor = Cursor::away(cfg.cursor_sentinel);
        let mut p = Point::new(Vec2::new(500.0, 500.0), 1.0, WHITE);

        // distance ~ 2121 < 3000
        assert!((p.pos - cursor.pos).length() < cfg.attraction_radius);

        update(&mut p, &cursor, &cfg);

        assert!(p.vel.x < 0.0 && p.vel.y < 0.0, "vel = {:?}", p.vel);
        assert!(p.pos.x < 500.0 && p.pos.y < 500.0);
    }

    #[test]
    fn without_attraction_position_converges_to_origin() {
        let cfg = cfg_with_radius(100.0);
        let cursor = Cursor::away(cfg.cursor_sentinel);

        let mut p = Point::new(Vec2::new(200.0, 300.0), 1.0, WHITE);
        p.pos = Vec2::new(260.0, 240.0);
        p.vel = Vec2::new(5.0, -3.0);

        for _ in 0..2000 {
            update(&mut p, &cursor, &cfg);
        }

        assert!(approx(p.pos, p.origin()), "pos = {:?}", p.pos);
        assert!(p.vel.length() < EPS);
    }

    #[test]
    fn fixed_cursor_reaches_a_stable_offset() {
        let cfg = cfg_with_radius(100.0);
        let mut cursor = Cursor::away(cfg.cursor_sentinel);
        cursor.move_to(Vec2::new(0.0, 0.0));

        let mut p = Point::new(Vec2::new(50.0, 0.0), 1.0, WHITE);
        for _ in 0..2000 {
            update(&mut p, &cursor, &cfg);
        }
        let settled = p.pos;
        update(&mut p, &cursor, &cfg);

        // Pulled toward the cursor but held by the spring.
        assert!(settled.x < 50.0 && settled.x > 0.0);
        assert!(approx(p.pos, settled));
    }

    #[test]
    fn exact_overlap_is_finite_with_clamp() {
        let cfg = cfg_with_radius(100.0);
        let mut cursor = Cursor::away(cfg.cursor_sentinel);
        cursor.move_to(Vec2::new(30.0, 30.0));

        let mut p = Point::new(Vec2::new(30.0, 30.0), 1.0, WHITE);
        update(&mut p, &cursor, &cfg);

        assert!(p.vel.is_finite() && p.pos.is_finite());
    }

    #[test]
    fn exact_overlap_without_clamp_is_non_finite() {
        let cfg = Config {
            attraction_radius: 100.0,
            min_attraction_distance: 0.0,
            ..Config::default()
        };
        let mut cursor = Cursor::away(cfg.cursor_sentinel);
        cursor.move_to(Vec2::new(30.0, 30.0));

        let mut p = Point::new(Vec2::new(30.0, 30.0), 1.0, WHITE);
        update(&mut p, &cursor, &cfg);

        assert!(!p.vel.is_finite());
    }

    #[test]
    fn render_draws_disc_at_current_position() {
        let mut p = Point::new(Vec2::new(1.0, 2.0), 1.5, WHITE);
        p.pos = Vec2::new(3.0, 4.0);

        let mut rec = Recorder::default();
        render(&p, &mut rec);

        assert_eq!(rec.calls, vec![Call::Circle(Vec2::new(3.0, 4.0), 1.5, WHITE)]);
    }

    #[test]
    fn frame_clears_once_then_draws_every_point() {
        let cfg = cfg_with_radius(100.0);
        let cursor = Cursor::away(cfg.cursor_sentinel);
        let mut field = Field::build(60.0, 60.0, 30.0, 1.0, WHITE);

        let mut rec = Recorder::default();
        frame(&mut field, &cursor, &cfg, &mut rec);

        assert_eq!(rec.calls.len(), 1 + field.len());
        assert_eq!(rec.calls[0], Call::Clear);
        for (call, p) in rec.calls[1..].iter().zip(&field.points) {
            assert_eq!(*call, Call::Circle(p.pos, p.radius, p.color));
        }
    }

    #[test]
    fn frame_draws_each_point_after_updating_it() {
        let cfg = cfg_with_radius(100.0);
        let mut cursor = Cursor::away(cfg.cursor_sentinel);
        cursor.move_to(Vec2::new(15.0, 15.0));
        let mut field = Field::build(60.0, 60.0, 30.0, 1.0, WHITE);

        let mut rec = Recorder::default();
        frame(&mut field, &cursor, &cfg, &mut rec);

        for (call, p) in rec.calls[1..].iter().zip(&field.points) {
            // Every dot is in range, so this frame moved it off its origin.
            assert_ne!(p.pos, p.origin());
            assert!(approx(p.pos, p.origin() + p.vel));
            assert_eq!(*call, Call::Circle(p.pos, p.radius, p.color));
        }
    }
}
