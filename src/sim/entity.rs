//! Entity model and the shared collision predicate
//!
//! Every entity is a cell position plus a tagged kind. Collision checks query
//! capabilities (`is_stationary_obstacle`, `is_pushable`) instead of concrete types.

use glam::IVec2;
use serde::{Deserialize, Serialize};

use super::cup::Cup;
use super::grid::Grid;
use super::player::Player;
use super::pot::Pot;

/// Movement direction, as delivered by the input collaborator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
    #[default]
    Stop,
}

impl Direction {
    /// The four directions that actually move something
    pub const CARDINALS: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// One-cell step in screen coordinates (up is -y). `None` for `Stop`.
    pub fn delta(self) -> Option<IVec2> {
        match self {
            Direction::Up => Some(IVec2::NEG_Y),
            Direction::Down => Some(IVec2::Y),
            Direction::Left => Some(IVec2::NEG_X),
            Direction::Right => Some(IVec2::X),
            Direction::Stop => None,
        }
    }
}

/// Fixed palette shared by pots and cups
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    White,
    Black,
    Gray,
    Red,
    Blue,
    Yellow,
    Green,
}

impl Color {
    /// CSS color name for the canvas backend
    pub fn as_css(&self) -> &'static str {
        match self {
            Color::White => "white",
            Color::Black => "black",
            Color::Gray => "gray",
            Color::Red => "red",
            Color::Blue => "blue",
            Color::Yellow => "yellow",
            Color::Green => "green",
        }
    }
}

/// Index of an entity in the world's insertion-ordered collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntityId(pub usize);

/// What an entity is, with its kind-specific state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum EntityKind {
    Player(Player),
    Pot(Pot),
    Cup(Cup),
}

/// A positioned object on the grid
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    pub pos: IVec2,
    pub kind: EntityKind,
}

impl Entity {
    pub fn player(pos: IVec2) -> Self {
        Self {
            pos,
            kind: EntityKind::Player(Player::default()),
        }
    }

    pub fn pot(pos: IVec2, color: Color) -> Self {
        Self {
            pos,
            kind: EntityKind::Pot(Pot { color }),
        }
    }

    pub fn cup(pos: IVec2, color: Color) -> Self {
        Self {
            pos,
            kind: EntityKind::Cup(Cup { color }),
        }
    }

    /// Solid and immobile (pots)
    pub fn is_stationary_obstacle(&self) -> bool {
        matches!(self.kind, EntityKind::Pot(_))
    }

    /// Can be displaced by the player (cups)
    pub fn is_pushable(&self) -> bool {
        matches!(self.kind, EntityKind::Cup(_))
    }

    pub fn as_player(&self) -> Option<&Player> {
        match &self.kind {
            EntityKind::Player(player) => Some(player),
            _ => None,
        }
    }

    pub fn as_player_mut(&mut self) -> Option<&mut Player> {
        match &mut self.kind {
            EntityKind::Player(player) => Some(player),
            _ => None,
        }
    }

    pub fn color(&self) -> Color {
        match &self.kind {
            EntityKind::Player(_) => Color::White,
            EntityKind::Pot(pot) => pot.color,
            EntityKind::Cup(cup) => cup.color,
        }
    }
}

/// Which entities a collision check considers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CollisionFilter {
    #[default]
    Any,
    Stationary,
    Pushable,
}

impl CollisionFilter {
    #[inline]
    pub fn matches(self, entity: &Entity) -> bool {
        match self {
            CollisionFilter::Any => true,
            CollisionFilter::Stationary => entity.is_stationary_obstacle(),
            CollisionFilter::Pushable => entity.is_pushable(),
        }
    }
}

/// True if `cell` is off the grid or occupied by an entity passing `filter`.
///
/// This is the only occupancy test; movers build on it rather than scanning
/// the entity list themselves.
pub fn collides(grid: &Grid, entities: &[Entity], cell: IVec2, filter: CollisionFilter) -> bool {
    if !grid.in_bounds(cell) {
        return true;
    }
    entities
        .iter()
        .any(|entity| entity.pos == cell && filter.matches(entity))
}
