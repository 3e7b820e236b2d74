//! Draw commands handed to a rendering backend each frame

use glam::{IVec2, UVec2};

use crate::consts::{BANNER_TEXT, BANNER_X, BANNER_Y, CUP_OPACITY};
use crate::level::Level;
use crate::sim::{Color, Entity, EntityKind};

/// Pixel rectangle on the drawing surface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// One drawing request
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Fill the whole surface black and highlight the cup confinement area
    Background { size: UVec2, highlight: PixelRect },
    /// Filled rectangle covering one cell
    Cell {
        cell: IVec2,
        size: UVec2,
        color: Color,
        opacity: f32,
    },
    /// Text overlay (the "Cleared!" banner)
    Banner { text: &'static str, x: f64, y: f64 },
}

impl DrawCommand {
    pub fn background(level: &Level) -> Self {
        let region = level.confinement;
        let origin = region.min.as_uvec2() * level.cell_size;
        let extent = region.size().as_uvec2() * level.cell_size;
        DrawCommand::Background {
            size: level.surface_size(),
            highlight: PixelRect {
                x: origin.x,
                y: origin.y,
                width: extent.x,
                height: extent.y,
            },
        }
    }

    pub fn entity(entity: &Entity, cell_size: UVec2) -> Self {
        let opacity = match entity.kind {
            EntityKind::Player(_) | EntityKind::Pot(_) => 1.0,
            EntityKind::Cup(_) => CUP_OPACITY,
        };
        DrawCommand::Cell {
            cell: entity.pos,
            size: cell_size,
            color: entity.color(),
            opacity,
        }
    }

    pub fn cleared_banner() -> Self {
        DrawCommand::Banner {
            text: BANNER_TEXT,
            x: BANNER_X,
            y: BANNER_Y,
        }
    }
}

/// A rendering backend. The simulation only ever talks to this trait.
pub trait Renderer {
    fn draw(&mut self, command: DrawCommand);
}

/// Records every command, mostly for tests
#[derive(Debug, Default)]
pub struct Frame {
    pub commands: Vec<DrawCommand>,
}

impl Frame {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub fn has_banner(&self) -> bool {
        self.commands
            .iter()
            .any(|c| matches!(c, DrawCommand::Banner { .. }))
    }
}

impl Renderer for Frame {
    fn draw(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }
}

/// Drops everything; used when stepping the simulation headless
#[derive(Debug, Default, Clone, Copy)]
pub struct Discard;

impl Renderer for Discard {
    fn draw(&mut self, _command: DrawCommand) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_background_highlights_confinement() {
        let cmd = DrawCommand::background(&Level::default());
        assert_eq!(
            cmd,
            DrawCommand::Background {
                size: UVec2::new(450, 450),
                highlight: PixelRect {
                    x: 100,
                    y: 100,
                    width: 250,
                    height: 250,
                },
            }
        );
    }

    #[test]
    fn test_entity_fills() {
        let size = UVec2::new(50, 50);
        let cup = DrawCommand::entity(&Entity::cup(IVec2::new(3, 2), Color::Red), size);
        let pot = DrawCommand::entity(&Entity::pot(IVec2::new(7, 4), Color::Red), size);
        let player = DrawCommand::entity(&Entity::player(IVec2::ZERO), size);

        assert!(matches!(cup, DrawCommand::Cell { opacity, color: Color::Red, .. } if opacity == 0.5));
        assert!(matches!(pot, DrawCommand::Cell { opacity, color: Color::Red, .. } if opacity == 1.0));
        assert!(matches!(player, DrawCommand::Cell { color: Color::White, cell, .. } if cell == IVec2::ZERO));
    }
}
