//! Compiled-in level data
//!
//! There is no level file format; `Level::default()` is the one shipped puzzle.
//! Tests build their own layouts by editing a `Level`.

use glam::{IVec2, UVec2};
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::{Color, Direction, Grid, Region};

/// A colored entity placement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    pub pos: IVec2,
    pub color: Color,
}

impl Placement {
    pub const fn new(x: i32, y: i32, color: Color) -> Self {
        Self {
            pos: IVec2::new(x, y),
            color,
        }
    }
}

/// Everything needed to build a `World`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Level {
    pub grid: Grid,
    /// Cups never leave this rectangle
    pub confinement: Region,
    /// On-screen size of one cell (pixels)
    pub cell_size: UVec2,
    /// Ticks per player step
    pub move_cadence: u32,
    pub player_start: IVec2,
    pub pots: Vec<Placement>,
    pub cups: Vec<Placement>,
}

impl Default for Level {
    fn default() -> Self {
        Self {
            grid: Grid::new(MAP_SIZE_X, MAP_SIZE_Y),
            confinement: Region::new(
                IVec2::new(CUP_RANGE_X_MIN, CUP_RANGE_Y_MIN),
                IVec2::new(CUP_RANGE_X_MAX, CUP_RANGE_Y_MAX),
            ),
            cell_size: UVec2::new(CELL_WIDTH, CELL_HEIGHT),
            move_cadence: MOVE_CADENCE,
            player_start: IVec2::ZERO,
            pots: vec![
                Placement::new(7, 4, Color::Red),
                Placement::new(5, 1, Color::Blue),
                Placement::new(1, 2, Color::Yellow),
                Placement::new(3, 7, Color::Green),
            ],
            cups: vec![
                Placement::new(3, 2, Color::Red),
                Placement::new(2, 4, Color::Blue),
                Placement::new(6, 5, Color::Yellow),
                Placement::new(5, 4, Color::Green),
            ],
        }
    }
}

impl Level {
    /// Level with no pots or cups, for building scenarios by hand
    pub fn empty() -> Self {
        Self {
            pots: Vec::new(),
            cups: Vec::new(),
            ..Self::default()
        }
    }

    /// Canvas size in pixels
    pub fn surface_size(&self) -> UVec2 {
        UVec2::new(self.grid.width as u32, self.grid.height as u32) * self.cell_size
    }
}

/// Moves that solve the default level, as (direction, cells walked).
/// Each entry that walks into a cup pushes it on its last step.
pub const REFERENCE_SOLUTION: &[(Direction, u32)] = &[
    // red cup down onto the green pot's doorstep
    (Direction::Right, 3),
    (Direction::Down, 2),
    // yellow cup up to the top edge...
    (Direction::Right, 1),
    (Direction::Down, 4),
    (Direction::Right, 2),
    (Direction::Up, 1),
    // ...then left along the top row to the yellow pot
    (Direction::Up, 2),
    (Direction::Right, 1),
    (Direction::Up, 1),
    (Direction::Left, 1),
    // green cup right to the red pot
    (Direction::Left, 2),
    (Direction::Down, 2),
    (Direction::Right, 1),
    // blue cup right until it hits the green cup, then up to the blue pot
    (Direction::Up, 1),
    (Direction::Left, 4),
    (Direction::Down, 1),
    (Direction::Right, 1),
    (Direction::Down, 1),
    (Direction::Right, 3),
    (Direction::Up, 1),
];
