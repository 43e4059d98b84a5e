//! Canvas 2D implementation of [`Surface`] (browser only)

use std::f64::consts::TAU;

use glam::DVec2;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::Surface;
use crate::sim::color::{Rgb, Rgba};

/// A canvas sized once at startup, drawn through its 2D context
pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
    size: DVec2,
}

impl CanvasSurface {
    /// Size the canvas to `width` x `height` and grab its 2D context
    pub fn new(canvas: &HtmlCanvasElement, width: u32, height: u32) -> Result<Self, JsValue> {
        canvas.set_width(width);
        canvas.set_height(height);

        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;

        Ok(Self {
            ctx,
            size: DVec2::new(width as f64, height as f64),
        })
    }

    fn trace_circle(&self, center: DVec2, radius: f64) -> bool {
        self.ctx.begin_path();
        match self.ctx.arc(center.x, center.y, radius, 0.0, TAU) {
            Ok(()) => true,
            Err(e) => {
                log::warn!("arc({}, r={}) failed: {:?}", center, radius, e);
                false
            }
        }
    }
}

impl Surface for CanvasSurface {
    fn size(&self) -> DVec2 {
        self.size
    }

    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: Rgba) {
        self.ctx.set_fill_style_str(&color.to_css());
        self.ctx.fill_rect(x, y, w, h);
    }

    fn fill_circle(&mut self, center: DVec2, radius: f64, color: Rgb) {
        self.ctx.set_fill_style_str(&color.to_css());
        if self.trace_circle(center, radius) {
            self.ctx.fill();
        }
    }

    fn stroke_circle(&mut self, center: DVec2, radius: f64, color: Rgb, line_width: f64) {
        self.ctx.set_stroke_style_str(&color.to_css());
        self.ctx.set_line_width(line_width);
        if self.trace_circle(center, radius) {
            self.ctx.stroke();
        }
    }
}
