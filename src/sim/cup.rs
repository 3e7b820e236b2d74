//! Tea cups: pushable, slide until blocked, confined to a sub-region

use glam::IVec2;
use serde::{Deserialize, Serialize};

use super::entity::{CollisionFilter, Color, Direction, Entity, EntityId, collides};
use super::grid::{Grid, Region};

/// Cup-specific state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cup {
    pub color: Color,
}

/// Furthest cell a cup starting at `start` reaches when pushed toward
/// `direction`. Stops before leaving `confinement` or entering any occupied cell.
pub fn slide_destination(
    entities: &[Entity],
    start: IVec2,
    direction: Direction,
    grid: &Grid,
    confinement: &Region,
) -> IVec2 {
    let Some(delta) = direction.delta() else {
        return start;
    };
    let mut cell = start;
    loop {
        let next = cell + delta;
        if !confinement.contains(next) || collides(grid, entities, next, CollisionFilter::Any) {
            return cell;
        }
        cell = next;
    }
}

/// Push the cup at `id` toward `direction`. Returns whether it moved at all.
pub fn pushed_from(
    entities: &mut [Entity],
    id: EntityId,
    direction: Direction,
    grid: &Grid,
    confinement: &Region,
) -> bool {
    if !entities[id.0].is_pushable() {
        return false;
    }
    let start = entities[id.0].pos;
    let end = slide_destination(entities, start, direction, grid, confinement);
    if end == start {
        log::trace!("Cup {} at {} blocked going {:?}", id.0, start, direction);
        return false;
    }
    log::debug!("Cup {} pushed {:?}: {} -> {}", id.0, direction, start, end);
    entities[id.0].pos = end;
    true
}

/// True if any pot sits orthogonally next to `cell`. Color is not checked.
pub fn is_next_to_pot(entities: &[Entity], cell: IVec2) -> bool {
    Direction::CARDINALS
        .iter()
        .filter_map(|direction| direction.delta())
        .map(|delta| cell + delta)
        .any(|side| {
            entities
                .iter()
                .any(|entity| entity.is_stationary_obstacle() && entity.pos == side)
        })
}
