//! World state: the owned entity collection and game phase

use serde::{Deserialize, Serialize};

use super::cup::{is_next_to_pot, pushed_from};
use super::entity::{Direction, Entity, EntityId};
use crate::level::Level;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Cups still need placing
    #[default]
    Playing,
    /// Every cup sits next to a pot. Terminal; the simulation keeps running.
    Cleared,
}

/// Complete game state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct World {
    pub(super) level: Level,
    /// Insertion order is draw/update order only; collision scans everything
    pub(super) entities: Vec<Entity>,
    pub(super) player: EntityId,
    pub(super) phase: GamePhase,
    /// Simulation tick counter
    pub(super) time_ticks: u64,
}

impl World {
    /// Build a world from level data: player first, then pots, then cups
    pub fn new(level: Level) -> Self {
        let mut world = Self {
            entities: Vec::with_capacity(1 + level.pots.len() + level.cups.len()),
            player: EntityId(0),
            phase: GamePhase::Playing,
            time_ticks: 0,
            level,
        };

        world.player = world.add_entity(Entity::player(world.level.player_start));
        for pot in world.level.pots.clone() {
            world.add_entity(Entity::pot(pot.pos, pot.color));
        }
        for cup in world.level.cups.clone() {
            world.add_entity(Entity::cup(cup.pos, cup.color));
        }
        world
    }

    /// The shipped puzzle
    pub fn reference() -> Self {
        Self::new(Level::default())
    }

    /// Append an entity. Placement is not validated beyond a warning.
    pub fn add_entity(&mut self, entity: Entity) -> EntityId {
        if self.entities.iter().any(|e| e.pos == entity.pos) {
            log::warn!("Entity added on occupied cell {}", entity.pos);
        }
        if entity.is_pushable() && !self.level.confinement.contains(entity.pos) {
            log::warn!("Cup added outside confinement at {}", entity.pos);
        }
        self.entities.push(entity);
        EntityId(self.entities.len() - 1)
    }

    pub fn level(&self) -> &Level {
        &self.level
    }

    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    pub fn entity(&self, id: EntityId) -> Option<&Entity> {
        self.entities.get(id.0)
    }

    pub fn player(&self) -> &Entity {
        &self.entities[self.player.0]
    }

    pub fn player_id(&self) -> EntityId {
        self.player
    }

    pub fn pots(&self) -> impl Iterator<Item = &Entity> {
        self.entities.iter().filter(|e| e.is_stationary_obstacle())
    }

    pub fn cups(&self) -> impl Iterator<Item = &Entity> {
        self.entities.iter().filter(|e| e.is_pushable())
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn is_cleared(&self) -> bool {
        self.phase == GamePhase::Cleared
    }

    pub fn time_ticks(&self) -> u64 {
        self.time_ticks
    }

    /// Steer the player. Same-direction repeats are ignored.
    pub fn set_direction(&mut self, direction: Direction) {
        if let Some(player) = self.entities[self.player.0].as_player_mut() {
            player.set_direction(direction);
        }
    }

    /// Push the cup at `id` as the player would. Returns whether it moved.
    pub fn push_cup(&mut self, id: EntityId, direction: Direction) -> bool {
        if id.0 >= self.entities.len() {
            return false;
        }
        pushed_from(
            &mut self.entities,
            id,
            direction,
            &self.level.grid,
            &self.level.confinement,
        )
    }

    /// Whether the cup at `id` sits next to any pot
    pub fn cup_is_set(&self, id: EntityId) -> bool {
        self.entity(id)
            .is_some_and(|e| e.is_pushable() && is_next_to_pot(&self.entities, e.pos))
    }

    /// Win condition: there is at least one cup and every cup is next to a pot
    pub fn all_cups_set(&self) -> bool {
        let mut cups = self.cups().peekable();
        cups.peek().is_some() && cups.all(|cup| is_next_to_pot(&self.entities, cup.pos))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::level::Placement;
    use crate::sim::Color;
    use glam::IVec2;

    #[test]
    fn test_reference_insertion_order() {
        let world = World::reference();
        assert_eq!(world.entities().len(), 9);
        assert_eq!(world.player_id(), EntityId(0));
        assert_eq!(world.player().pos, IVec2::ZERO);
        assert_eq!(world.pots().count(), 4);
        assert_eq!(world.cups().count(), 4);
        assert!(world.entities()[1..5].iter().all(|e| e.is_stationary_obstacle()));
        assert!(world.entities()[5..].iter().all(|e| e.is_pushable()));
        assert_eq!(world.phase(), GamePhase::Playing);
    }

    #[test]
    fn test_push_cup_by_id() {
        let mut world = World::reference();
        // Blue cup at (2, 4) slides right until it meets the green cup at (5, 4)
        let blue = EntityId(6);
        assert!(world.push_cup(blue, Direction::Right));
        assert_eq!(world.entity(blue).unwrap().pos, IVec2::new(4, 4));
        assert!(!world.push_cup(blue, Direction::Right));
        assert!(!world.push_cup(EntityId(99), Direction::Right));
    }

    #[test]
    fn test_cup_next_to_pot() {
        let mut level = Level::empty();
        level.pots.push(Placement::new(7, 4, Color::Red));
        level.cups.push(Placement::new(6, 4, Color::Red));
        let world = World::new(level);
        assert!(world.cup_is_set(EntityId(2)));
        assert!(!world.cup_is_set(EntityId(1)));
        assert!(world.all_cups_set());
    }

    #[test]
    fn test_no_cups_is_never_set() {
        let world = World::new(Level::empty());
        assert!(!world.all_cups_set());
    }

    #[test]
    fn test_win_check_ignores_cup_order() {
        let mut level = Level::empty();
        level.pots = vec![
            Placement::new(7, 4, Color::Red),
            Placement::new(5, 1, Color::Blue),
        ];
        let set = Placement::new(6, 4, Color::Red);
        let loose = Placement::new(4, 4, Color::Blue);

        level.cups = vec![set, loose];
        let forward = World::new(level.clone()).all_cups_set();
        level.cups = vec![loose, set];
        let backward = World::new(level.clone()).all_cups_set();
        assert_eq!(forward, backward);
        assert!(!forward);

        level.cups = vec![Placement::new(5, 2, Color::Blue), set];
        assert!(World::new(level).all_cups_set());
    }

    #[test]
    fn test_set_direction_reaches_player() {
        let mut world = World::reference();
        world.set_direction(Direction::Down);
        assert_eq!(
            world.player().as_player().unwrap().direction,
            Direction::Down
        );
    }
}
