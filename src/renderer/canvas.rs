//! Browser canvas backend (wasm32 only)

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement};

use super::Surface;
use crate::error::StarfieldError;
use crate::sim::Viewport;

/// A `<canvas>` element and its 2D context
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    /// Look up the first element matching `selector` and grab its 2D context
    pub fn from_selector(document: &Document, selector: &str) -> Result<Self, StarfieldError> {
        let element = document
            .query_selector(selector)
            .ok()
            .flatten()
            .ok_or_else(|| StarfieldError::CanvasNotFound(selector.to_string()))?;

        let canvas: HtmlCanvasElement = element
            .dyn_into()
            .map_err(|_| StarfieldError::NotACanvas(selector.to_string()))?;

        let ctx = canvas
            .get_context("2d")
            .ok()
            .flatten()
            .and_then(|ctx| ctx.dyn_into::<CanvasRenderingContext2d>().ok())
            .ok_or(StarfieldError::ContextUnavailable)?;

        Ok(Self { canvas, ctx })
    }

    /// The underlying element, for wiring event listeners
    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }
}

impl Surface for CanvasSurface {
    fn resize(&mut self, viewport: &Viewport) {
        let (width, height) = viewport.device_size();
        // Setting the backing size also resets the context transform
        self.canvas.set_width(width);
        self.canvas.set_height(height);

        let style = self.canvas.style();
        for (name, value) in viewport.css_size() {
            if let Err(e) = style.set_property(name, &value) {
                log::warn!("Failed to set canvas CSS {}: {:?}", name, e);
            }
        }

        let s = viewport.scale as f64;
        if let Err(e) = self.ctx.set_transform(s, 0.0, 0.0, s, 0.0, 0.0) {
            log::warn!("Failed to scale canvas context: {:?}", e);
        }
    }

    fn clear_rect(&mut self, x: f32, y: f32, width: f32, height: f32) {
        self.ctx
            .clear_rect(x as f64, y as f64, width as f64, height as f64);
    }

    fn begin_path(&mut self) {
        self.ctx.begin_path();
    }

    fn move_to(&mut self, x: f32, y: f32) {
        self.ctx.move_to(x as f64, y as f64);
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.ctx.line_to(x as f64, y as f64);
    }

    fn stroke(&mut self) {
        self.ctx.stroke();
    }

    fn set_line_width(&mut self, width: f32) {
        self.ctx.set_line_width(width as f64);
    }

    fn set_line_cap(&mut self, cap: &str) {
        self.ctx.set_line_cap(cap);
    }

    fn set_stroke_style(&mut self, color: &str) {
        self.ctx.set_stroke_style_str(color);
    }

    fn set_global_alpha(&mut self, alpha: f32) {
        self.ctx.set_global_alpha(alpha as f64);
    }
}
