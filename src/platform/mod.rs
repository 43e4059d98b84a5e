//! Platform glue between the host and the simulation
//!
//! Handles:
//! - Keyboard mapping (`input`)
//! - Publishing the live ball count (`ScoreSink`)
//! - Running one frame end to end (`run_frame`)
//!
//! The host schedules frames (`requestAnimationFrame` in the browser) and
//! must never run two frames at once; key events land between frames.

pub mod input;

pub use input::direction_for_key;

use crate::renderer::Surface;
use crate::sim::{TickReport, World, tick};

/// Somewhere to show the number of balls left
pub trait ScoreSink {
    fn publish(&mut self, live: usize);
}

/// Score display for headless runs: logs changes only
#[derive(Debug, Default)]
pub struct LogScore {
    last: Option<usize>,
}

impl ScoreSink for LogScore {
    fn publish(&mut self, live: usize) {
        if self.last != Some(live) {
            log::info!("Ball count: {}", live);
            self.last = Some(live);
        }
    }
}

/// Run one frame and, in eat-the-balls mode, publish the live count
pub fn run_frame<S, K>(world: &mut World, surface: &mut S, score: &mut K) -> TickReport
where
    S: Surface + ?Sized,
    K: ScoreSink + ?Sized,
{
    let before = world.live_count();
    let report = tick(world, surface);

    if world.player.is_some() {
        score.publish(report.live);
        if report.live == 0 && before > 0 {
            log::info!("All balls eaten after {} frames", report.frame);
        }
    }
    report
}
