//! Circle-circle contact tests over the roster
//!
//! Brute force by construction: every scan is O(n) and a full frame is
//! O(n²). The roster is small enough that a spatial index would cost more
//! than it saves.

use glam::DVec2;

use super::body::{Ball, PlayerCircle};
use super::rng::GameRng;

/// Strict overlap: touching circles do not count
#[inline]
pub fn circles_overlap(a: DVec2, a_radius: f64, b: DVec2, b_radius: f64) -> bool {
    a.distance(b) < a_radius + b_radius
}

/// Recolor the ball at `index` and every live ball it overlaps.
///
/// Each contact draws one fresh color and gives it to both balls. The ball
/// never tests against itself. Returns the number of contacts.
pub fn recolor_overlapping(balls: &mut [Ball], index: usize, rng: &mut GameRng) -> usize {
    let Some(this) = balls.get(index) else {
        return 0;
    };
    let (pos, radius) = (this.pos(), this.radius);

    let mut contacts = 0;
    for other in 0..balls.len() {
        if other == index || !balls[other].alive {
            continue;
        }
        if circles_overlap(pos, radius, balls[other].pos(), balls[other].radius) {
            let color = rng.random_color();
            balls[index].color = color;
            balls[other].color = color;
            contacts += 1;
        }
    }
    contacts
}

/// Soft-delete every live ball the player overlaps. Returns how many were eaten.
pub fn eliminate_overlapping(player: &PlayerCircle, balls: &mut [Ball]) -> usize {
    let mut eaten = 0;
    for ball in balls.iter_mut().filter(|b| b.alive) {
        if circles_overlap(player.pos(), player.radius, ball.pos(), ball.radius) {
            ball.alive = false;
            eaten += 1;
        }
    }
    eaten
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::color::Rgb;

    fn ball(x: f64, y: f64, r: f64, color: Rgb) -> Ball {
        Ball::new(DVec2::new(x, y), DVec2::ZERO, r, color)
    }

    #[test]
    fn test_overlap_is_strict() {
        assert!(circles_overlap(DVec2::ZERO, 10.0, DVec2::new(19.9, 0.0), 10.0));
        assert!(!circles_overlap(DVec2::ZERO, 10.0, DVec2::new(20.0, 0.0), 10.0));
    }

    #[test]
    fn test_overlapping_pair_shares_color() {
        let mut balls = vec![
            ball(100.0, 100.0, 10.0, Rgb::new(1, 2, 3)),
            ball(105.0, 100.0, 10.0, Rgb::new(200, 100, 50)),
        ];
        let mut rng = GameRng::new(3);
        let contacts = recolor_overlapping(&mut balls, 0, &mut rng);
        assert_eq!(contacts, 1);
        assert_eq!(balls[0].color, balls[1].color);
    }

    #[test]
    fn test_single_ball_is_untouched() {
        let original = ball(100.0, 100.0, 10.0, Rgb::new(9, 9, 9));
        let mut balls = vec![original.clone()];
        let mut rng = GameRng::new(3);
        assert_eq!(recolor_overlapping(&mut balls, 0, &mut rng), 0);
        assert_eq!(balls[0], original);
    }

    #[test]
    fn test_distant_balls_keep_colors() {
        let mut balls = vec![
            ball(100.0, 100.0, 10.0, Rgb::new(1, 2, 3)),
            ball(300.0, 100.0, 10.0, Rgb::new(4, 5, 6)),
        ];
        let mut rng = GameRng::new(3);
        assert_eq!(recolor_overlapping(&mut balls, 0, &mut rng), 0);
        assert_eq!(balls[0].color, Rgb::new(1, 2, 3));
        assert_eq!(balls[1].color, Rgb::new(4, 5, 6));
    }

    #[test]
    fn test_dead_balls_are_skipped() {
        let mut balls = vec![
            ball(100.0, 100.0, 10.0, Rgb::new(1, 2, 3)),
            ball(105.0, 100.0, 10.0, Rgb::new(4, 5, 6)),
        ];
        balls[1].alive = false;
        let mut rng = GameRng::new(3);
        assert_eq!(recolor_overlapping(&mut balls, 0, &mut rng), 0);
        assert_eq!(balls[1].color, Rgb::new(4, 5, 6));
    }

    #[test]
    fn test_out_of_range_index_is_noop() {
        let mut balls = vec![ball(100.0, 100.0, 10.0, Rgb::WHITE)];
        let mut rng = GameRng::new(3);
        assert_eq!(recolor_overlapping(&mut balls, 5, &mut rng), 0);
    }

    #[test]
    fn test_player_eats_overlapping_ball() {
        let player = PlayerCircle::new(DVec2::new(50.0, 50.0), 20.0, 10.0, Rgb::WHITE, 3.0);
        let mut balls = vec![
            ball(55.0, 50.0, 10.0, Rgb::new(1, 2, 3)),
            ball(400.0, 400.0, 10.0, Rgb::new(4, 5, 6)),
        ];
        assert_eq!(eliminate_overlapping(&player, &mut balls), 1);
        assert!(!balls[0].alive);
        assert!(balls[1].alive);
        // Eating does not recolor
        assert_eq!(balls[0].color, Rgb::new(1, 2, 3));
    }

    #[test]
    fn test_eaten_ball_is_not_counted_twice() {
        let player = PlayerCircle::new(DVec2::new(50.0, 50.0), 20.0, 10.0, Rgb::WHITE, 3.0);
        let mut balls = vec![ball(55.0, 50.0, 10.0, Rgb::WHITE)];
        assert_eq!(eliminate_overlapping(&player, &mut balls), 1);
        assert_eq!(eliminate_overlapping(&player, &mut balls), 0);
        assert!(!balls[0].alive);
    }
}
