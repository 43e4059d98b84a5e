//! Moving circles: the shared body shape, balls, and the player circle

use glam::DVec2;
use serde::{Deserialize, Serialize};

use super::color::Rgb;

/// Position and velocity shared by every circle on the field
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct MovingBody {
    pub pos: DVec2,
    pub vel: DVec2,
}

impl MovingBody {
    pub fn new(pos: DVec2, vel: DVec2) -> Self {
        Self { pos, vel }
    }
}

/// A bouncing ball in the roster
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub body: MovingBody,
    pub radius: f64,
    pub color: Rgb,
    /// Cleared when the player eats the ball. Never set back.
    pub alive: bool,
}

impl Ball {
    pub fn new(pos: DVec2, vel: DVec2, radius: f64, color: Rgb) -> Self {
        Self {
            body: MovingBody::new(pos, vel),
            radius,
            color,
            alive: true,
        }
    }

    #[inline]
    pub fn pos(&self) -> DVec2 {
        self.body.pos
    }

    /// Flip velocity on any axis whose edge touches the bounds, then advance.
    ///
    /// Edge tests are closed (`>=` / `<=`): a ball sitting exactly on an edge
    /// flips again every frame until it moves off.
    pub fn update(&mut self, bounds: DVec2) {
        let r = self.radius;
        let MovingBody { pos, vel } = &mut self.body;

        if pos.x + r >= bounds.x {
            vel.x = -vel.x;
        }
        if pos.x - r <= 0.0 {
            vel.x = -vel.x;
        }
        if pos.y + r >= bounds.y {
            vel.y = -vel.y;
        }
        if pos.y - r <= 0.0 {
            vel.y = -vel.y;
        }

        *pos += *vel;
    }
}

/// Direction of a single player step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// Unit offset in screen coordinates (y grows downward)
    pub fn unit(self) -> DVec2 {
        match self {
            Direction::Left => DVec2::new(-1.0, 0.0),
            Direction::Right => DVec2::new(1.0, 0.0),
            Direction::Up => DVec2::new(0.0, -1.0),
            Direction::Down => DVec2::new(0.0, 1.0),
        }
    }
}

/// The keyboard-driven eater, drawn as an outline.
///
/// `body.vel` is not a continuous velocity here: it holds the per-key step
/// size on each axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerCircle {
    pub body: MovingBody,
    pub radius: f64,
    pub color: Rgb,
    pub line_width: f64,
}

impl PlayerCircle {
    pub fn new(pos: DVec2, step: f64, radius: f64, color: Rgb, line_width: f64) -> Self {
        Self {
            body: MovingBody::new(pos, DVec2::splat(step)),
            radius,
            color,
            line_width,
        }
    }

    #[inline]
    pub fn pos(&self) -> DVec2 {
        self.body.pos
    }

    /// Move one step immediately, independent of the frame loop
    pub fn step(&mut self, direction: Direction) {
        self.body.pos += direction.unit() * self.body.vel;
    }

    /// Push back one radius from any edge that was crossed, then clamp so
    /// several steps taken between frames still end up inside.
    pub fn check_bounds(&mut self, bounds: DVec2) {
        let r = self.radius;
        let pos = &mut self.body.pos;

        if pos.x + r >= bounds.x {
            pos.x -= r;
        }
        if pos.x - r <= 0.0 {
            pos.x += r;
        }
        if pos.y + r >= bounds.y {
            pos.y -= r;
        }
        if pos.y - r <= 0.0 {
            pos.y += r;
        }

        pos.x = pos.x.clamp(r, (bounds.x - r).max(r));
        pos.y = pos.y.clamp(r, (bounds.y - r).max(r));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const BOUNDS: DVec2 = DVec2::new(800.0, 600.0);

    fn ball_at(x: f64, y: f64, vx: f64, vy: f64, r: f64) -> Ball {
        Ball::new(DVec2::new(x, y), DVec2::new(vx, vy), r, Rgb::WHITE)
    }

    #[test]
    fn test_left_edge_flip() {
        let mut ball = ball_at(5.0, 50.0, -3.0, 2.0, 10.0);
        ball.update(BOUNDS);
        assert_eq!(ball.body.vel, DVec2::new(3.0, 2.0));
        assert_eq!(ball.pos(), DVec2::new(8.0, 52.0));
    }

    #[test]
    fn test_corner_flips_both_axes() {
        let mut ball = ball_at(795.0, 595.0, 4.0, 4.0, 10.0);
        ball.update(BOUNDS);
        assert_eq!(ball.body.vel, DVec2::new(-4.0, -4.0));
        assert_eq!(ball.pos(), DVec2::new(791.0, 591.0));
    }

    #[test]
    fn test_free_flight_keeps_velocity() {
        let mut ball = ball_at(400.0, 300.0, -7.0, 5.0, 20.0);
        ball.update(BOUNDS);
        assert_eq!(ball.body.vel, DVec2::new(-7.0, 5.0));
        assert_eq!(ball.pos(), DVec2::new(393.0, 305.0));
    }

    #[test]
    fn test_touching_edge_flips_every_frame() {
        // Exact contact counts as a hit, even when already moving inward
        let mut ball = ball_at(10.0, 300.0, 3.0, 0.0, 10.0);
        ball.update(BOUNDS);
        assert_eq!((ball.pos().x, ball.body.vel.x), (7.0, -3.0));
        ball.update(BOUNDS);
        assert_eq!((ball.pos().x, ball.body.vel.x), (10.0, 3.0));
        ball.update(BOUNDS);
        assert_eq!((ball.pos().x, ball.body.vel.x), (7.0, -3.0));
    }

    #[test]
    fn test_player_steps() {
        let mut player = PlayerCircle::new(DVec2::new(100.0, 100.0), 20.0, 10.0, Rgb::WHITE, 3.0);
        player.step(Direction::Left);
        assert_eq!(player.pos(), DVec2::new(80.0, 100.0));
        player.step(Direction::Down);
        player.step(Direction::Down);
        assert_eq!(player.pos(), DVec2::new(80.0, 140.0));
        player.step(Direction::Up);
        player.step(Direction::Right);
        assert_eq!(player.pos(), DVec2::new(100.0, 120.0));
    }

    #[test]
    fn test_player_pushed_back_one_radius() {
        let mut player = PlayerCircle::new(DVec2::new(795.0, 300.0), 20.0, 10.0, Rgb::WHITE, 3.0);
        player.check_bounds(BOUNDS);
        assert_eq!(player.pos(), DVec2::new(785.0, 300.0));

        let mut player = PlayerCircle::new(DVec2::new(300.0, 8.0), 20.0, 10.0, Rgb::WHITE, 3.0);
        player.check_bounds(BOUNDS);
        assert_eq!(player.pos(), DVec2::new(300.0, 18.0));
    }

    #[test]
    fn test_player_far_outside_is_clamped() {
        let mut player = PlayerCircle::new(DVec2::new(-70.0, 900.0), 20.0, 10.0, Rgb::WHITE, 3.0);
        player.check_bounds(BOUNDS);
        assert_eq!(player.pos(), DVec2::new(10.0, 590.0));
    }

    #[test]
    fn test_degenerate_surface_does_not_panic() {
        let mut ball = ball_at(0.0, 0.0, 3.0, -2.0, 10.0);
        ball.update(DVec2::ZERO);
        let mut player = PlayerCircle::new(DVec2::ZERO, 20.0, 10.0, Rgb::WHITE, 3.0);
        player.check_bounds(DVec2::ZERO);
        assert_eq!(player.pos(), DVec2::splat(10.0));
    }

    proptest! {
        #[test]
        fn ball_stays_within_one_step_of_bounds(
            x in 10.0f64..790.0,
            y in 10.0f64..590.0,
            vx in -7i32..=7,
            vy in -7i32..=7,
            frames in 1usize..400,
        ) {
            let r = 10.0;
            let mut ball = ball_at(x, y, vx as f64, vy as f64, r);
            for _ in 0..frames {
                ball.update(BOUNDS);
                let tol_x = ball.body.vel.x.abs();
                let tol_y = ball.body.vel.y.abs();
                prop_assert!(ball.pos().x >= r - tol_x && ball.pos().x <= BOUNDS.x - r + tol_x);
                prop_assert!(ball.pos().y >= r - tol_y && ball.pos().y <= BOUNDS.y - r + tol_y);
            }
        }

        #[test]
        fn outward_ball_flips_only_that_axis(y in 50.0f64..550.0, vx in 1i32..=7, vy in -7i32..=7) {
            let mut ball = ball_at(795.0, y, vx as f64, vy as f64, 10.0);
            ball.update(BOUNDS);
            prop_assert_eq!(ball.body.vel.x, -(vx as f64));
            prop_assert_eq!(ball.body.vel.y, vy as f64);
        }

        #[test]
        fn player_clamped_after_any_steps(
            x in 10.0f64..790.0,
            y in 10.0f64..590.0,
            moves in proptest::collection::vec(0u8..4, 0..20),
        ) {
            let mut player = PlayerCircle::new(DVec2::new(x, y), 20.0, 10.0, Rgb::WHITE, 3.0);
            for m in moves {
                let dir = match m {
                    0 => Direction::Left,
                    1 => Direction::Right,
                    2 => Direction::Up,
                    _ => Direction::Down,
                };
                player.step(dir);
            }
            player.check_bounds(BOUNDS);
            prop_assert!(player.pos().x >= 10.0 && player.pos().x <= BOUNDS.x - 10.0);
            prop_assert!(player.pos().y >= 10.0 && player.pos().y <= BOUNDS.y - 10.0);
        }
    }
}
