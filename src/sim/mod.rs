//! Deterministic simulation module
//!
//! All gameplay logic lives here:
//! - Discrete ticks only, no wall-clock time
//! - Stable iteration order (entity insertion order)
//! - Drawing goes through the `Renderer` trait, never a concrete backend

pub mod cup;
pub mod entity;
pub mod grid;
pub mod player;
pub mod pot;
pub mod state;
pub mod tick;

pub use cup::{Cup, is_next_to_pot, pushed_from, slide_destination};
pub use entity::{CollisionFilter, Color, Direction, Entity, EntityId, EntityKind, collides};
pub use grid::{Grid, Region};
pub use player::{Player, tick_player};
pub use pot::Pot;
pub use state::{GamePhase, World};
pub use tick::replay;
