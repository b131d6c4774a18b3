//! Star streak render pass
//!
//! Each star is a short line from its position along the drift direction,
//! a cheap stand-in for motion blur.

use glam::Vec2;
use rand::Rng;

use super::Surface;
use crate::sim::{Star, Starfield};
use crate::tuning::Tuning;

/// Round caps keep short streaks looking like points
pub const LINE_CAP: &str = "round";

/// Offset from a star to the end of its tail for the given drift
///
/// Near-zero components are replaced by `tail_floor` (always positive) so
/// the stroke has length and actually shows up.
pub fn tail_offset(velocity: Vec2, tuning: &Tuning) -> Vec2 {
    let floor = |v: f32| {
        if v.abs() < tuning.tail_min {
            tuning.tail_floor
        } else {
            v
        }
    };
    let tail = velocity * tuning.tail_length;
    Vec2::new(floor(tail.x), floor(tail.y))
}

/// Draw every star as a streak ending at `pos + tail`
///
/// Opacity flickers: a fresh alpha is drawn per star per call.
pub fn draw_stars<S, R>(
    surface: &mut S,
    stars: &[Star],
    tail: Vec2,
    scale: f32,
    tuning: &Tuning,
    rng: &mut R,
) -> usize
where
    S: Surface + ?Sized,
    R: Rng + ?Sized,
{
    for star in stars {
        surface.set_line_cap(LINE_CAP);
        surface.set_line_width(star.size * star.z * scale);
        surface.set_global_alpha(tuning.random_alpha(rng));
        surface.set_stroke_style(tuning.color(star.color));

        surface.begin_path();
        surface.move_to(star.pos.x, star.pos.y);
        surface.line_to(star.pos.x + tail.x, star.pos.y + tail.y);
        surface.stroke();
    }
    stars.len()
}

/// Render pass for the whole starfield; returns the number of strokes
pub fn render<S, R>(field: &mut Starfield<R>, surface: &mut S) -> usize
where
    S: Surface + ?Sized,
    R: Rng,
{
    let tail = tail_offset(field.velocity.current, &field.tuning);
    draw_stars(
        surface,
        &field.stars,
        tail,
        field.viewport.scale,
        &field.tuning,
        &mut field.rng,
    )
}
