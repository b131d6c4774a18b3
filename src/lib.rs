//! Warp Starfield - a pointer-driven parallax starfield
//!
//! Core modules:
//! - `sim`: Seeded simulation (stars, drift velocity, recycling, pointer input)
//! - `renderer`: 2D drawing surface abstraction and the streak render pass
//! - `tuning`: Starfield constants as a deserializable record
//! - `error`: Initialization and tuning errors

pub mod error;
pub mod renderer;
pub mod sim;
pub mod tuning;

pub use error::StarfieldError;
pub use renderer::{RecordingSurface, Surface};
pub use sim::{InputMode, Starfield, Viewport};
pub use tuning::Tuning;

/// Starfield configuration constants
pub mod consts {
    /// Star colors: white, light yellow, light blue
    pub const STAR_COLORS: [&str; 3] = ["#ffffff", "#ffe9c4", "#d4fbff"];
    /// Base stroke width range
    pub const STAR_MIN_SIZE: f32 = 1.0;
    pub const STAR_MAX_SIZE: f32 = 5.0;
    /// Smallest depth a freshly spawned or edge-recycled star gets
    pub const STAR_MIN_SCALE: f32 = 0.3;
    /// Depth given to stars recycled through the center
    pub const CENTER_DEPTH: f32 = 0.1;
    /// How far (px) a star may drift outside the viewport before recycling
    pub const OVERFLOW_THRESHOLD: f32 = 50.0;
    /// Viewport perimeter-ish divisor for the star count: (w + h) / 9
    pub const STAR_DENSITY_DIVISOR: f32 = 9.0;

    /// Outward expansion rate per frame (also the per-frame depth increment)
    pub const EXPANSION_RATE: f32 = 0.0005;
    /// Per-frame decay of the pointer-driven target velocity
    pub const TARGET_DECAY: f32 = 0.96;
    /// Per-frame easing of the current velocity toward the target
    pub const VELOCITY_EASING: f32 = 0.8;
    /// Drift speed (either axis) above which recycling becomes directional
    pub const DIRECTIONAL_SPEED: f32 = 1.0;

    /// Pointer delta divisor when feeding the target velocity
    pub const POINTER_DIVISOR: f32 = 8.0;

    /// Tail length as a multiple of the drift velocity
    pub const TAIL_LENGTH: f32 = 2.0;
    /// Tails shorter than this are replaced by `TAIL_FLOOR` (strokes need length)
    pub const TAIL_MIN: f32 = 0.1;
    pub const TAIL_FLOOR: f32 = 0.5;
    /// Per-frame opacity flicker: alpha in [ALPHA_MIN, ALPHA_MIN + ALPHA_RANGE)
    pub const ALPHA_MIN: f32 = 0.5;
    pub const ALPHA_RANGE: f32 = 0.5;
}

/// Number of stars for a viewport, `ceil((w + h) / divisor)`
///
/// Fractional counts round up; degenerate viewports give zero stars.
#[inline]
pub fn star_count(width: f32, height: f32, divisor: f32) -> usize {
    let count = ((width + height) / divisor).ceil();
    if count.is_finite() && count > 0.0 {
        count as usize
    } else {
        0
    }
}

/// Uniform value in `[0, extent)`; zero extents collapse to 0
#[inline]
pub fn uniform_extent<R: rand::Rng + ?Sized>(rng: &mut R, extent: f32) -> f32 {
    rng.random::<f32>() * extent
}
