//! Text backend for headless runs and the native binary
//!
//! `@` player, uppercase letter pot, lowercase letter cup,
//! `:` confinement floor, `.` open floor.

use std::fmt;

use glam::UVec2;

use super::commands::{DrawCommand, Renderer};
use crate::sim::Color;

pub struct AsciiRenderer {
    cell_size: UVec2,
    columns: usize,
    rows: Vec<Vec<char>>,
    banner: Option<&'static str>,
}

impl AsciiRenderer {
    pub fn new(cell_size: UVec2) -> Self {
        Self {
            cell_size: cell_size.max(UVec2::ONE),
            columns: 0,
            rows: Vec::new(),
            banner: None,
        }
    }

    fn glyph(color: Color, opacity: f32) -> char {
        let letter = match color {
            Color::White => return '@',
            Color::Black => 'k',
            Color::Gray => 'a',
            Color::Red => 'r',
            Color::Blue => 'b',
            Color::Yellow => 'y',
            Color::Green => 'g',
        };
        if opacity < 1.0 {
            letter
        } else {
            letter.to_ascii_uppercase()
        }
    }
}

impl Renderer for AsciiRenderer {
    fn draw(&mut self, command: DrawCommand) {
        match command {
            DrawCommand::Background { size, highlight } => {
                let cells = size / self.cell_size;
                self.columns = cells.x as usize;
                self.rows = vec![vec!['.'; self.columns]; cells.y as usize];
                self.banner = None;

                let x0 = (highlight.x / self.cell_size.x) as usize;
                let y0 = (highlight.y / self.cell_size.y) as usize;
                let w = (highlight.width / self.cell_size.x) as usize;
                let h = (highlight.height / self.cell_size.y) as usize;
                for row in self.rows.iter_mut().skip(y0).take(h) {
                    for c in row.iter_mut().skip(x0).take(w) {
                        *c = ':';
                    }
                }
            }
            DrawCommand::Cell {
                cell,
                color,
                opacity,
                ..
            } => {
                if cell.x < 0 || cell.y < 0 {
                    return;
                }
                if let Some(c) = self
                    .rows
                    .get_mut(cell.y as usize)
                    .and_then(|row| row.get_mut(cell.x as usize))
                {
                    *c = Self::glyph(color, opacity);
                }
            }
            DrawCommand::Banner { text, .. } => self.banner = Some(text),
        }
    }
}

impl fmt::Display for AsciiRenderer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.rows {
            let line: String = row.iter().collect();
            writeln!(f, "{line}")?;
        }
        if let Some(banner) = self.banner {
            writeln!(f, "{banner}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::level::Level;
    use crate::sim::World;

    #[test]
    fn test_reference_board() {
        let mut world = World::new(Level::default());
        let mut board = AsciiRenderer::new(world.level().cell_size);
        world.tick(&mut board);

        let expected = "\
@........
.....B...
.Y:r:::..
..:::::..
..b::g:R.
..::::y..
..:::::..
...G.....
.........
";
        assert_eq!(board.to_string(), expected);
    }
}
