//! The world: roster, optional player, and the surface bounds
//!
//! Built once at startup and mutated in place every frame. Nothing here is
//! shared across threads: the frame callback and the key handler both run
//! on the host's single event-loop thread and take turns borrowing it.

use glam::DVec2;

use super::body::{Ball, Direction, PlayerCircle};
use super::rng::GameRng;
use crate::settings::Config;

/// Everything the animation mutates
#[derive(Debug, Clone)]
pub struct World {
    /// Surface width and height, captured once
    pub bounds: DVec2,
    /// Fixed-size roster in creation order. Balls are never removed.
    pub balls: Vec<Ball>,
    /// Present only in eat-the-balls mode
    pub player: Option<PlayerCircle>,
    pub fade_alpha: f64,
    /// Frames run so far
    pub frame: u64,
    pub rng: GameRng,
}

impl World {
    /// Spawn the roster (and player, if the mode has one) from a seed
    pub fn new(config: &Config, width: f64, height: f64, seed: u64) -> Self {
        let bounds = DVec2::new(width.max(0.0), height.max(0.0));
        let mut rng = GameRng::new(seed);

        let balls = (0..config.ball_count)
            .map(|_| spawn_ball(config, bounds, &mut rng))
            .collect::<Vec<_>>();

        let player = config.mode.has_player().then(|| {
            let p = &config.player;
            let pos = random_inset_position(p.radius, bounds, &mut rng);
            PlayerCircle::new(pos, p.step, p.radius, p.color, p.line_width)
        });

        log::info!(
            "World {}x{} with {} balls ({} mode, seed {})",
            bounds.x,
            bounds.y,
            balls.len(),
            config.mode.as_str(),
            seed
        );

        Self {
            bounds,
            balls,
            player,
            fade_alpha: config.fade_alpha,
            frame: 0,
            rng,
        }
    }

    /// Balls not yet eaten
    pub fn live_count(&self) -> usize {
        self.balls.iter().filter(|b| b.alive).count()
    }

    /// Apply one key press to the player. No-op without a player.
    pub fn steer(&mut self, direction: Direction) {
        if let Some(player) = self.player.as_mut() {
            player.step(direction);
            log::trace!("Player stepped {:?} to {}", direction, player.pos());
        }
    }
}

/// Center inset from every edge by `radius`.
///
/// On a surface narrower than the circle the upper bound collapses onto the
/// lower one, pinning the circle at the edge instead of asking for an
/// inverted range.
fn random_inset_position(radius: f64, bounds: DVec2, rng: &mut GameRng) -> DVec2 {
    let r = radius.ceil() as i64;
    let max_x = (bounds.x.floor() as i64 - r).max(r);
    let max_y = (bounds.y.floor() as i64 - r).max(r);
    DVec2::new(rng.random_int(r, max_x) as f64, rng.random_int(r, max_y) as f64)
}

fn spawn_ball(config: &Config, bounds: DVec2, rng: &mut GameRng) -> Ball {
    let (r_min, r_max) = config.radius_range;
    let (v_min, v_max) = config.velocity_range;

    let radius = rng.random_int(r_min, r_max) as f64;
    let pos = random_inset_position(radius, bounds, rng);
    let vel = DVec2::new(
        rng.random_int(v_min, v_max) as f64,
        rng.random_int(v_min, v_max) as f64,
    );
    let color = rng.random_color();

    Ball::new(pos, vel, radius, color)
}
