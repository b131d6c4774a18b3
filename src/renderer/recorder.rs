//! In-memory surface that records draw commands
//!
//! Used by the headless native runner and by tests to inspect exactly what
//! a frame would have drawn.

use glam::Vec2;

use super::Surface;
use crate::sim::Viewport;

/// One recorded surface call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Resize { width: u32, height: u32, scale: f32 },
    ClearRect { x: f32, y: f32, width: f32, height: f32 },
    BeginPath,
    MoveTo(Vec2),
    LineTo(Vec2),
    Stroke,
    LineWidth(f32),
    LineCap(String),
    StrokeStyle(String),
    GlobalAlpha(f32),
}

/// A stroked segment with the state it was drawn with
#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    pub from: Vec2,
    pub to: Vec2,
    pub width: f32,
    pub cap: String,
    pub color: String,
    pub alpha: f32,
}

#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    pub commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Replay the command log into the single-segment strokes it produced
    pub fn strokes(&self) -> Vec<Stroke> {
        let mut strokes = Vec::new();
        let mut width = 1.0;
        let mut cap = String::from("butt");
        let mut color = String::from("#000000");
        let mut alpha = 1.0;
        let mut from = None;
        let mut to = None;

        for cmd in &self.commands {
            match cmd {
                DrawCommand::BeginPath => {
                    from = None;
                    to = None;
                }
                DrawCommand::MoveTo(p) => from = Some(*p),
                DrawCommand::LineTo(p) => to = Some(*p),
                DrawCommand::LineWidth(w) => width = *w,
                DrawCommand::LineCap(c) => cap = c.clone(),
                DrawCommand::StrokeStyle(c) => color = c.clone(),
                DrawCommand::GlobalAlpha(a) => alpha = *a,
                DrawCommand::Stroke => {
                    if let (Some(from), Some(to)) = (from, to) {
                        strokes.push(Stroke {
                            from,
                            to,
                            width,
                            cap: cap.clone(),
                            color: color.clone(),
                            alpha,
                        });
                    }
                }
                DrawCommand::Resize { .. } | DrawCommand::ClearRect { .. } => {}
            }
        }

        strokes
    }
}

impl Surface for RecordingSurface {
    fn resize(&mut self, viewport: &Viewport) {
        let (width, height) = viewport.device_size();
        self.commands.push(DrawCommand::Resize {
            width,
            height,
            scale: viewport.scale,
        });
    }

    fn clear_rect(&mut self, x: f32, y: f32, width: f32, height: f32) {
        self.commands.push(DrawCommand::ClearRect {
            x,
            y,
            width,
            height,
        });
    }

    fn begin_path(&mut self) {
        self.commands.push(DrawCommand::BeginPath);
    }

    fn move_to(&mut self, x: f32, y: f32) {
        self.commands.push(DrawCommand::MoveTo(Vec2::new(x, y)));
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.commands.push(DrawCommand::LineTo(Vec2::new(x, y)));
    }

    fn stroke(&mut self) {
        self.commands.push(DrawCommand::Stroke);
    }

    fn set_line_width(&mut self, width: f32) {
        self.commands.push(DrawCommand::LineWidth(width));
    }

    fn set_line_cap(&mut self, cap: &str) {
        self.commands.push(DrawCommand::LineCap(cap.to_string()));
    }

    fn set_stroke_style(&mut self, color: &str) {
        self.commands.push(DrawCommand::StrokeStyle(color.to_string()));
    }

    fn set_global_alpha(&mut self, alpha: f32) {
        self.commands.push(DrawCommand::GlobalAlpha(alpha));
    }
}
