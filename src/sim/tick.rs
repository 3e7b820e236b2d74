//! Frame tick
//!
//! Called once per display refresh. Each entity is updated then drawn in
//! insertion order, followed by the win check.

use super::entity::{Direction, EntityId, EntityKind};
use super::player::tick_player;
use super::state::{GamePhase, World};
use crate::renderer::{Discard, DrawCommand, Renderer};

impl World {
    /// Advance one frame, drawing into `renderer` as entities update
    pub fn tick<R: Renderer + ?Sized>(&mut self, renderer: &mut R) {
        renderer.draw(DrawCommand::background(&self.level));

        for index in 0..self.entities.len() {
            self.update_entity(EntityId(index));
            renderer.draw(DrawCommand::entity(
                &self.entities[index],
                self.level.cell_size,
            ));
        }

        self.time_ticks += 1;

        if self.phase == GamePhase::Playing && self.all_cups_set() {
            self.phase = GamePhase::Cleared;
            log::info!("Puzzle cleared after {} ticks", self.time_ticks);
        }
        if self.phase == GamePhase::Cleared {
            renderer.draw(DrawCommand::cleared_banner());
        }
    }

    /// Advance one frame without drawing
    pub fn step(&mut self) {
        self.tick(&mut Discard);
    }

    fn update_entity(&mut self, id: EntityId) {
        match self.entities[id.0].kind {
            EntityKind::Player(_) => tick_player(
                &mut self.entities,
                id,
                &self.level.grid,
                &self.level.confinement,
                self.level.move_cadence,
            ),
            EntityKind::Pot(_) | EntityKind::Cup(_) => {}
        }
    }
}

/// Hold each direction long enough to walk `cells` steps, ticking the world
pub fn replay<R: Renderer + ?Sized>(
    world: &mut World,
    moves: &[(Direction, u32)],
    renderer: &mut R,
) {
    let cadence = world.level.move_cadence.max(1);
    for &(direction, cells) in moves {
        world.set_direction(direction);
        for _ in 0..cells * cadence {
            world.tick(renderer);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::level::{Level, Placement, REFERENCE_SOLUTION};
    use crate::renderer::Frame;
    use crate::sim::Color;
    use glam::IVec2;

    fn open_field() -> World {
        World::new(Level::empty())
    }

    #[test]
    fn test_hold_right_five_ticks() {
        let mut world = open_field();
        world.set_direction(Direction::Right);
        for _ in 0..5 {
            world.step();
        }
        assert_eq!(world.player().pos, IVec2::new(1, 0));
        assert_eq!(world.time_ticks(), 5);
    }

    #[test]
    fn test_cadence_first_of_five() {
        let mut world = open_field();
        world.set_direction(Direction::Down);
        let mut positions = Vec::new();
        for _ in 0..10 {
            world.step();
            positions.push(world.player().pos.y);
        }
        assert_eq!(positions, vec![1, 1, 1, 1, 1, 2, 2, 2, 2, 2]);
    }

    #[test]
    fn test_key_repeat_does_not_restart_cadence() {
        let mut world = open_field();
        world.set_direction(Direction::Right);
        for _ in 0..3 {
            world.step();
            world.set_direction(Direction::Right);
        }
        assert_eq!(world.player().pos, IVec2::new(1, 0));
    }

    #[test]
    fn test_frame_draw_order() {
        let mut world = World::reference();
        let mut frame = Frame::new();
        world.tick(&mut frame);

        assert_eq!(frame.commands.len(), 1 + world.entities().len());
        assert!(matches!(frame.commands[0], DrawCommand::Background { .. }));
        assert!(!frame.has_banner());
    }

    #[test]
    fn test_clears_on_push_into_place() {
        let mut level = Level::empty();
        level.player_start = IVec2::new(1, 4);
        level.pots.push(Placement::new(7, 4, Color::Red));
        level.cups.push(Placement::new(2, 4, Color::Red));
        let mut world = World::new(level);

        world.set_direction(Direction::Right);
        world.step();
        assert_eq!(world.entity(EntityId(2)).unwrap().pos, IVec2::new(6, 4));
        assert!(world.is_cleared());
    }

    #[test]
    fn test_cleared_is_sticky_and_sim_keeps_running() {
        let mut level = Level::empty();
        level.player_start = IVec2::new(6, 6);
        level.pots.push(Placement::new(7, 4, Color::Red));
        level.cups.push(Placement::new(6, 4, Color::Red));
        let mut world = World::new(level);

        world.step();
        assert!(world.is_cleared());

        // Walk up into the cup and shove it away from its pot
        world.set_direction(Direction::Up);
        let mut frame = Frame::new();
        for _ in 0..20 {
            frame.clear();
            world.tick(&mut frame);
            assert!(world.is_cleared());
            assert!(frame.has_banner());
        }

        assert_eq!(world.entity(EntityId(2)).unwrap().pos, IVec2::new(6, 2));
        assert_eq!(world.player().pos, IVec2::new(6, 3));
        assert!(!world.all_cups_set());
        assert!(world.is_cleared());
    }

    #[test]
    fn test_reference_solution_clears() {
        let mut world = World::reference();
        let (last, rest) = REFERENCE_SOLUTION.split_last().unwrap();

        replay(&mut world, rest, &mut Discard);
        assert!(!world.is_cleared());

        replay(&mut world, std::slice::from_ref(last), &mut Discard);
        assert!(world.is_cleared());

        let cups: Vec<IVec2> = world.cups().map(|c| c.pos).collect();
        assert_eq!(
            cups,
            vec![
                IVec2::new(3, 6),
                IVec2::new(5, 2),
                IVec2::new(2, 2),
                IVec2::new(6, 4),
            ]
        );
        assert_eq!(world.player().pos, IVec2::new(5, 4));

        for _ in 0..30 {
            world.step();
        }
        assert!(world.is_cleared());
    }

    #[test]
    fn test_pots_never_move() {
        let mut world = World::reference();
        let before: Vec<IVec2> = world.pots().map(|p| p.pos).collect();
        replay(&mut world, REFERENCE_SOLUTION, &mut Discard);
        let after: Vec<IVec2> = world.pots().map(|p| p.pos).collect();
        assert_eq!(before, after);
    }
}
