//! One animation frame
//!
//! Fade, then move, collide and draw every live ball in roster order, then
//! the player. Each ball is drawn before it moves, so the surface shows where
//! things were at the start of the frame.

use serde::Serialize;

use super::collision::{eliminate_overlapping, recolor_overlapping};
use super::world::World;
use crate::renderer::{Surface, draw_ball, draw_fade, draw_player};

/// What happened during one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct TickReport {
    /// Index of the frame just run (starting at 1)
    pub frame: u64,
    /// Balls still alive after the frame, eaten-this-frame excluded
    pub live: usize,
    /// Ball-ball contacts that triggered a recolor
    pub contacts: usize,
    /// Balls eaten by the player this frame
    pub eliminated: usize,
}

/// Advance the world by one frame, drawing onto `surface` as it goes
pub fn tick<S: Surface + ?Sized>(world: &mut World, surface: &mut S) -> TickReport {
    world.frame += 1;
    draw_fade(surface, world.bounds, world.fade_alpha);

    let mut contacts = 0;
    for index in 0..world.balls.len() {
        if !world.balls[index].alive {
            continue;
        }
        draw_ball(surface, &world.balls[index]);
        world.balls[index].update(world.bounds);
        contacts += recolor_overlapping(&mut world.balls, index, &mut world.rng);
    }

    let mut eliminated = 0;
    if let Some(player) = world.player.as_mut() {
        draw_player(surface, player);
        player.check_bounds(world.bounds);
        eliminated = eliminate_overlapping(player, &mut world.balls);
        if eliminated > 0 {
            log::debug!("Frame {}: ate {} ball(s)", world.frame, eliminated);
        }
    }

    let report = TickReport {
        frame: world.frame,
        live: world.live_count(),
        contacts,
        eliminated,
    };
    log::trace!("{:?}", report);
    report
}
