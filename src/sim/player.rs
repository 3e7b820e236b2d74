//! The player: a direction state machine that moves one cell per cadence

use glam::IVec2;
use serde::{Deserialize, Serialize};

use super::cup::pushed_from;
use super::entity::{CollisionFilter, Direction, Entity, EntityId, collides};
use super::grid::{Grid, Region};

/// Player-specific state
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub direction: Direction,
    /// Ticks since the direction last changed
    pub direction_frame: u32,
}

impl Player {
    /// Change direction. Repeating the current direction is ignored so key
    /// repeat does not restart the cadence.
    pub fn set_direction(&mut self, direction: Direction) {
        if self.direction == direction {
            return;
        }
        self.direction = direction;
        self.direction_frame = 0;
    }

    /// Whether this tick is a movement tick
    #[inline]
    pub fn on_cadence(&self, cadence: u32) -> bool {
        self.direction_frame % cadence.max(1) == 0
    }
}

/// Advance the player stored at `id` by one tick.
pub fn tick_player(
    entities: &mut [Entity],
    id: EntityId,
    grid: &Grid,
    confinement: &Region,
    cadence: u32,
) {
    let Some(player) = entities[id.0].as_player() else {
        return;
    };
    let direction = player.direction;
    let moving = player.on_cadence(cadence);

    if moving && let Some(delta) = direction.delta() {
        let target = entities[id.0].pos + delta;
        if !blocked(entities, target, direction, grid, confinement) {
            entities[id.0].pos = target;
        }
    }

    if let Some(player) = entities[id.0].as_player_mut() {
        player.direction_frame = player.direction_frame.wrapping_add(1);
    }
}

/// Cups get first say: a cup on `target` is pushed, and the player is
/// blocked only if it refuses to move. Otherwise only pots and the grid edge
/// block the player.
fn blocked(
    entities: &mut [Entity],
    target: IVec2,
    direction: Direction,
    grid: &Grid,
    confinement: &Region,
) -> bool {
    let cup = entities
        .iter()
        .position(|entity| entity.is_pushable() && entity.pos == target);
    if let Some(index) = cup {
        return !pushed_from(entities, EntityId(index), direction, grid, confinement);
    }
    collides(grid, entities, target, CollisionFilter::Stationary)
}
