//! Deterministic simulation module
//!
//! All motion and collision logic lives here:
//! - Seeded RNG only
//! - Stable iteration order (roster index)
//! - Drawing only through the `Surface` trait

pub mod body;
pub mod collision;
pub mod color;
pub mod rng;
pub mod tick;
pub mod world;

pub use body::{Ball, Direction, MovingBody, PlayerCircle};
pub use collision::{circles_overlap, eliminate_overlapping, recolor_overlapping};
pub use color::{Rgb, Rgba};
pub use rng::GameRng;
pub use tick::{TickReport, tick};
pub use world::World;
