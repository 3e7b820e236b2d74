//! Input mapping
//!
//! Keyboard keys become discrete direction changes; the world never sees
//! device-specific codes.

use crate::sim::{Direction, World};

/// A direction change request from the input collaborator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    KeyDown(Direction),
    /// Any key released stops the player
    KeyUp,
}

impl InputEvent {
    /// Map a browser `KeyboardEvent.key` name for a key press. Unknown keys give `None`.
    pub fn key_down(key: &str) -> Option<Self> {
        let direction = match key {
            "ArrowUp" => Direction::Up,
            "ArrowDown" => Direction::Down,
            "ArrowLeft" => Direction::Left,
            "ArrowRight" => Direction::Right,
            _ => return None,
        };
        Some(InputEvent::KeyDown(direction))
    }

    pub fn direction(self) -> Direction {
        match self {
            InputEvent::KeyDown(direction) => direction,
            InputEvent::KeyUp => Direction::Stop,
        }
    }
}

impl World {
    pub fn handle_input(&mut self, event: InputEvent) {
        self.set_direction(event.direction());
    }
}
