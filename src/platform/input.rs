//! Keyboard mapping

use crate::sim::Direction;

/// Map a `KeyboardEvent.key` value to a player step; anything else is ignored
pub fn direction_for_key(key: &str) -> Option<Direction> {
    match key {
        "a" | "A" | "ArrowLeft" => Some(Direction::Left),
        "d" | "D" | "ArrowRight" => Some(Direction::Right),
        "w" | "W" | "ArrowUp" => Some(Direction::Up),
        "s" | "S" | "ArrowDown" => Some(Direction::Down),
        _ => None,
    }
}
