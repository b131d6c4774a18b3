//! 2D rendering module
//!
//! Stars are drawn as short round-capped strokes on an immediate-mode
//! surface. `Surface` is the whole capability set the starfield needs; the
//! browser canvas and the in-memory recorder both implement it.

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod frame;
pub mod recorder;
pub mod streaks;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;
pub use frame::{FrameStats, resize, step};
pub use recorder::{DrawCommand, RecordingSurface, Stroke};
pub use streaks::{draw_stars, render, tail_offset};

use crate::sim::Viewport;

/// Immediate-mode 2D drawing surface
///
/// Coordinates are in CSS pixels; `resize` sets up whatever device-pixel
/// scaling the backend needs.
pub trait Surface {
    /// Resize the backing store for `viewport` and apply its pixel scale
    fn resize(&mut self, viewport: &Viewport);
    fn clear_rect(&mut self, x: f32, y: f32, width: f32, height: f32);
    fn begin_path(&mut self);
    fn move_to(&mut self, x: f32, y: f32);
    fn line_to(&mut self, x: f32, y: f32);
    fn stroke(&mut self);
    fn set_line_width(&mut self, width: f32);
    /// Canvas line cap keyword (`"butt"`, `"round"`, `"square"`)
    fn set_line_cap(&mut self, cap: &str);
    fn set_stroke_style(&mut self, color: &str);
    fn set_global_alpha(&mut self, alpha: f32);
}
