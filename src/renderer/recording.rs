//! A surface that remembers what was drawn instead of drawing it

use glam::DVec2;
use serde::Serialize;

use super::Surface;
use crate::sim::color::{Rgb, Rgba};

/// One recorded primitive call
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum DrawCommand {
    FillRect {
        x: f64,
        y: f64,
        w: f64,
        h: f64,
        color: Rgba,
    },
    FillCircle {
        center: DVec2,
        radius: f64,
        color: Rgb,
    },
    StrokeCircle {
        center: DVec2,
        radius: f64,
        color: Rgb,
        line_width: f64,
    },
}

/// Headless [`Surface`]: records every call in order
#[derive(Debug, Clone)]
pub struct RecordingSurface {
    size: DVec2,
    pub commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            size: DVec2::new(width, height),
            commands: Vec::new(),
        }
    }

    /// Drop everything recorded so far (call between frames to bound memory)
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Number of filled circles recorded
    pub fn filled_circles(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::FillCircle { .. }))
            .count()
    }
}

impl Surface for RecordingSurface {
    fn size(&self) -> DVec2 {
        self.size
    }

    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: Rgba) {
        self.commands.push(DrawCommand::FillRect { x, y, w, h, color });
    }

    fn fill_circle(&mut self, center: DVec2, radius: f64, color: Rgb) {
        self.commands.push(DrawCommand::FillCircle {
            center,
            radius,
            color,
        });
    }

    fn stroke_circle(&mut self, center: DVec2, radius: f64, color: Rgb, line_width: f64) {
        self.commands.push(DrawCommand::StrokeCircle {
            center,
            radius,
            color,
            line_width,
        });
    }
}
