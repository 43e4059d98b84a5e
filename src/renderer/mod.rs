//! Drawing surface abstraction
//!
//! The simulation only ever talks to a [`Surface`]. In the browser that is a
//! 2D canvas context; headless runs and tests use [`RecordingSurface`].

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod recording;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;
pub use recording::{DrawCommand, RecordingSurface};

use glam::DVec2;

use crate::sim::color::{Rgb, Rgba};
use crate::sim::{Ball, PlayerCircle};

/// Fill and stroke primitives over a fixed-size surface
pub trait Surface {
    /// Width and height, read once at startup
    fn size(&self) -> DVec2;

    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: Rgba);

    fn fill_circle(&mut self, center: DVec2, radius: f64, color: Rgb);

    fn stroke_circle(&mut self, center: DVec2, radius: f64, color: Rgb, line_width: f64);
}

/// Translucent black over the whole surface, leaving fading trails
pub fn draw_fade(surface: &mut (impl Surface + ?Sized), bounds: DVec2, alpha: f64) {
    surface.fill_rect(0.0, 0.0, bounds.x, bounds.y, Rgb::BLACK.with_alpha(alpha));
}

/// Solid disc
pub fn draw_ball(surface: &mut (impl Surface + ?Sized), ball: &Ball) {
    surface.fill_circle(ball.pos(), ball.radius, ball.color);
}

/// Outline only, so the player reads differently from the balls
pub fn draw_player(surface: &mut (impl Surface + ?Sized), player: &PlayerCircle) {
    surface.stroke_circle(player.pos(), player.radius, player.color, player.line_width);
}
