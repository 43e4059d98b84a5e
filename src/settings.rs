//! Startup configuration
//!
//! Captured once when the world is built and never re-read. The browser
//! build takes overrides from a JSON `data-config` attribute on the canvas;
//! any field left out keeps its default.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;
use crate::sim::color::Rgb;

/// Which flavor of the animation to run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum Mode {
    /// Balls bounce and swap colors on contact; nothing else
    #[default]
    Bounce,
    /// A keyboard-driven circle eats balls and a live count is shown
    EatBalls,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Bounce => "bounce",
            Mode::EatBalls => "eatBalls",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "bounce" => Some(Mode::Bounce),
            "eatballs" | "eat-balls" | "eat_balls" => Some(Mode::EatBalls),
            _ => None,
        }
    }

    pub fn has_player(&self) -> bool {
        matches!(self, Mode::EatBalls)
    }
}

/// Player circle settings (EatBalls mode)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PlayerConfig {
    pub radius: f64,
    /// Distance moved per key press, on either axis
    pub step: f64,
    pub line_width: f64,
    pub color: Rgb,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            radius: PLAYER_RADIUS,
            step: PLAYER_STEP,
            line_width: PLAYER_LINE_WIDTH,
            color: Rgb::WHITE,
        }
    }
}

/// Everything tunable about a run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
    /// Roster size, fixed for the whole run
    pub ball_count: usize,
    /// Inclusive ball radius range (pixels)
    pub radius_range: (i64, i64),
    /// Inclusive per-axis velocity range (pixels per frame)
    pub velocity_range: (i64, i64),
    /// Alpha of the black overlay painted each frame (0 = never clears, 1 = hard clear)
    pub fade_alpha: f64,
    pub mode: Mode,
    pub player: PlayerConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ball_count: BALL_COUNT,
            radius_range: BALL_RADIUS_RANGE,
            velocity_range: BALL_VELOCITY_RANGE,
            fade_alpha: FADE_ALPHA,
            mode: Mode::Bounce,
            player: PlayerConfig::default(),
        }
    }
}

/// Why a configuration was rejected
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("{field} range is inverted: min {min} > max {max}")]
    InvalidRange {
        field: &'static str,
        min: i64,
        max: i64,
    },
    #[error("ball radius must be positive, got minimum {0}")]
    NonPositiveRadius(i64),
    #[error("fade alpha must be within [0, 1], got {0}")]
    FadeAlphaOutOfRange(f64),
    #[error("player {field} must be positive and finite, got {value}")]
    InvalidPlayer { field: &'static str, value: f64 },
}

impl Config {
    /// Start from a mode's defaults
    pub fn for_mode(mode: Mode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    /// Parse JSON overrides on top of the defaults, then validate
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject anything that would make spawning ask for an inverted range
    pub fn validate(&self) -> Result<(), ConfigError> {
        let (r_min, r_max) = self.radius_range;
        if r_min > r_max {
            return Err(ConfigError::InvalidRange {
                field: "radius",
                min: r_min,
                max: r_max,
            });
        }
        if r_min <= 0 {
            return Err(ConfigError::NonPositiveRadius(r_min));
        }

        let (v_min, v_max) = self.velocity_range;
        if v_min > v_max {
            return Err(ConfigError::InvalidRange {
                field: "velocity",
                min: v_min,
                max: v_max,
            });
        }

        if !(0.0..=1.0).contains(&self.fade_alpha) {
            return Err(ConfigError::FadeAlphaOutOfRange(self.fade_alpha));
        }

        let player = &self.player;
        for (field, value) in [
            ("radius", player.radius),
            ("step", player.step),
            ("lineWidth", player.line_width),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::InvalidPlayer { field, value });
            }
        }

        Ok(())
    }

    /// Parse overrides, falling back to the defaults (with a warning) on any error
    pub fn from_json_or_default(json: Option<&str>) -> Self {
        match json {
            None => {
                log::info!("Using default config");
                Self::default()
            }
            Some(json) => match Self::from_json(json) {
                Ok(config) => {
                    log::info!("Loaded config overrides ({} mode)", config.mode.as_str());
                    config
                }
                Err(e) => {
                    log::warn!("Ignoring config overrides: {e}");
                    Self::default()
                }
            },
        }
    }
}
