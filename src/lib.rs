//! Teacup Push - a tiny grid puzzle
//!
//! Push the four tea cups until each one rests next to a stable pot.
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, collisions, pushes, win check)
//! - `level`: Compiled-in level data
//! - `input`: Key names to direction changes
//! - `renderer`: Draw command seam plus Canvas 2D and text backends

pub mod input;
pub mod level;
pub mod renderer;
pub mod sim;

pub use level::Level;
pub use sim::{Direction, World};

/// Game configuration constants
pub mod consts {
    /// Grid dimensions in cells
    pub const MAP_SIZE_X: i32 = 9;
    pub const MAP_SIZE_Y: i32 = 9;

    /// Cup confinement rectangle (inclusive, in cells)
    pub const CUP_RANGE_X_MIN: i32 = 2;
    pub const CUP_RANGE_X_MAX: i32 = 6;
    pub const CUP_RANGE_Y_MIN: i32 = 2;
    pub const CUP_RANGE_Y_MAX: i32 = 6;

    /// Size of one cell on screen (pixels)
    pub const CELL_WIDTH: u32 = 50;
    pub const CELL_HEIGHT: u32 = 50;

    /// Player moves at most one cell every this many ticks
    pub const MOVE_CADENCE: u32 = 5;

    /// Cups are drawn see-through so the floor stays visible
    pub const CUP_OPACITY: f32 = 0.5;

    /// "Cleared!" banner placement (pixels, text baseline)
    pub const BANNER_TEXT: &str = "Cleared!";
    pub const BANNER_X: f64 = 100.0;
    pub const BANNER_Y: f64 = 100.0;
}
