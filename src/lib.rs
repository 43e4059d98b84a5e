//! Bouncing Balls - colored circles that bounce, swap colors, and get eaten
//!
//! Core modules:
//! - `sim`: Deterministic simulation (motion, collisions, world state)
//! - `renderer`: Drawing surface trait and its canvas/recording backends
//! - `platform`: Keyboard mapping, score display, frame driver
//! - `settings`: Startup configuration

pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::{Config, ConfigError, Mode};

/// Default tuning
pub mod consts {
    /// Balls in the roster
    pub const BALL_COUNT: usize = 25;
    /// Inclusive ball radius range (pixels)
    pub const BALL_RADIUS_RANGE: (i64, i64) = (10, 20);
    /// Inclusive per-axis velocity range (pixels per frame)
    pub const BALL_VELOCITY_RANGE: (i64, i64) = (-7, 7);
    /// Alpha of the per-frame black overlay
    pub const FADE_ALPHA: f64 = 0.25;

    /// Player circle defaults
    pub const PLAYER_RADIUS: f64 = 10.0;
    pub const PLAYER_STEP: f64 = 20.0;
    pub const PLAYER_LINE_WIDTH: f64 = 3.0;

    /// Native headless run
    pub const HEADLESS_WIDTH: f64 = 800.0;
    pub const HEADLESS_HEIGHT: f64 = 600.0;
    pub const HEADLESS_FRAMES: u64 = 600;
}
