//! One animation frame and surface resizing
//!
//! `step` is the whole per-frame routine; whoever owns the frame clock
//! (requestAnimationFrame, a test loop, the headless runner) calls it once
//! per tick.

use rand::Rng;
use serde::Serialize;

use super::Surface;
use super::streaks::render;
use crate::sim::{Starfield, Viewport, tick};

/// What a single frame did
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct FrameStats {
    /// Frame number after this step
    pub frame: u64,
    pub recycled: usize,
    pub strokes: usize,
}

/// Clear, update and draw one frame
pub fn step<S, R>(field: &mut Starfield<R>, surface: &mut S) -> FrameStats
where
    S: Surface + ?Sized,
    R: Rng,
{
    let vp = field.viewport;
    surface.clear_rect(0.0, 0.0, vp.width, vp.height);

    let recycled = tick(field);
    let strokes = render(field, surface);

    FrameStats {
        frame: field.frame,
        recycled,
        strokes,
    }
}

/// Resize the surface and scatter the stars across the new viewport
pub fn resize<S, R>(field: &mut Starfield<R>, surface: &mut S, viewport: Viewport)
where
    S: Surface + ?Sized,
    R: Rng,
{
    surface.resize(&viewport);
    field.relayout(viewport);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::{DrawCommand, RecordingSurface};

    #[test]
    fn test_step_clears_then_draws() {
        let mut field = Starfield::new(Viewport::new(320.0, 240.0, 1.0), 12345);
        let mut surface = RecordingSurface::new();

        let stats = step(&mut field, &mut surface);

        assert_eq!(
            surface.commands[0],
            DrawCommand::ClearRect {
                x: 0.0,
                y: 0.0,
                width: 320.0,
                height: 240.0
            }
        );
        assert_eq!(stats.frame, 1);
        assert_eq!(stats.strokes, field.stars.len());
        assert_eq!(surface.strokes().len(), field.stars.len());
    }

    #[test]
    fn test_resize_sizes_surface_and_keeps_count() {
        let mut field = Starfield::new(Viewport::new(800.0, 600.0, 1.0), 2);
        let count = field.stars.len();
        let mut surface = RecordingSurface::new();

        let vp = Viewport::new(1024.0, 768.0, 1.5);
        resize(&mut field, &mut surface, vp);
        resize(&mut field, &mut surface, vp);

        assert_eq!(field.stars.len(), count);
        assert_eq!(
            surface.commands,
            vec![
                DrawCommand::Resize {
                    width: 1536,
                    height: 1152,
                    scale: 1.5
                };
                2
            ]
        );
        for star in &field.stars {
            assert!((0.0..=1024.0).contains(&star.pos.x));
            assert!((0.0..=768.0).contains(&star.pos.y));
        }
    }

    #[test]
    fn test_long_run_stays_finite() {
        let mut field = Starfield::new(Viewport::new(640.0, 480.0, 1.0), 31337);
        let mut surface = RecordingSurface::new();
        field.pointer_move(0.0, 0.0, crate::sim::InputMode::Mouse);
        field.pointer_move(200.0, -80.0, crate::sim::InputMode::Mouse);

        for _ in 0..2000 {
            surface.clear();
            step(&mut field, &mut surface);
        }

        assert_eq!(field.frame, 2000);
        for star in &field.stars {
            assert!(star.pos.is_finite());
            assert!(star.z >= 0.1);
        }
    }
}
