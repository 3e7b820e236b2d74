//! Stable pots: solid, immobile drop targets

use serde::{Deserialize, Serialize};

use super::entity::Color;

/// Pot-specific state. Pots never move; the color only matters for drawing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pot {
    pub color: Color,
}
