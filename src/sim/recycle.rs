//! Recycling of stars that leave the screen
//!
//! Stars re-enter from the edge the view is drifting toward, so the field
//! looks like it streams past instead of popping in. A near-still view
//! respawns stars deep in the field, anywhere on screen.

use glam::Vec2;
use rand::Rng;

use super::state::{Star, Viewport};
use crate::tuning::Tuning;
use crate::uniform_extent;

/// Screen axis a recycled star enters along
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// Where a recycled star re-enters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entry {
    /// Anywhere on screen, at minimum depth
    Center,
    Left,
    Right,
    Top,
    Bottom,
}

/// Pick the entry axis, weighted by each drift component's share
///
/// The branch on `vx > vy` decides which axis the roll favours. Ties
/// (`vx == vy`) take the vertical arm.
pub fn choose_axis<R: Rng + ?Sized>(vx: f32, vy: f32, rng: &mut R) -> Axis {
    let roll = rng.random::<f32>();
    if vx > vy {
        if roll < vx / (vx + vy) {
            Axis::Horizontal
        } else {
            Axis::Vertical
        }
    } else if roll < vy / (vx + vy) {
        Axis::Vertical
    } else {
        Axis::Horizontal
    }
}

/// Decide where a star should re-enter for the given drift
pub fn choose_entry<R: Rng + ?Sized>(velocity: Vec2, threshold: f32, rng: &mut R) -> Entry {
    let vx = velocity.x.abs();
    let vy = velocity.y.abs();

    if vx <= threshold && vy <= threshold {
        return Entry::Center;
    }

    match choose_axis(vx, vy, rng) {
        // Moving right means new stars show up on the left
        Axis::Horizontal if velocity.x > 0.0 => Entry::Left,
        Axis::Horizontal => Entry::Right,
        Axis::Vertical if velocity.y > 0.0 => Entry::Top,
        Axis::Vertical => Entry::Bottom,
    }
}

/// Reposition an out-of-bounds star and reset its depth
///
/// Returns the entry that was used.
pub fn recycle_star<R: Rng + ?Sized>(
    star: &mut Star,
    velocity: Vec2,
    viewport: &Viewport,
    tuning: &Tuning,
    rng: &mut R,
) -> Entry {
    let entry = choose_entry(velocity, tuning.directional_speed, rng);
    let margin = tuning.overflow;
    let (w, h) = (viewport.width, viewport.height);

    star.z = tuning.random_depth(rng);

    match entry {
        Entry::Center => {
            star.z = tuning.center_depth;
            star.pos = viewport.random_point(rng);
        }
        Entry::Left => star.pos = Vec2::new(-margin, uniform_extent(rng, h)),
        Entry::Right => star.pos = Vec2::new(w + margin, uniform_extent(rng, h)),
        Entry::Top => star.pos = Vec2::new(uniform_extent(rng, w), -margin),
        Entry::Bottom => star.pos = Vec2::new(uniform_extent(rng, w), h + margin),
    }

    log::trace!("Recycled star via {:?} to {:?} (z={})", entry, star.pos, star.z);
    entry
}
