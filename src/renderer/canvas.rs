//! Canvas 2D backend (browser only)

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use super::commands::{DrawCommand, Renderer};
use crate::sim::Color;

const BANNER_FONT: &str = "bold 50px sans-serif";

pub struct CanvasRenderer {
    ctx: CanvasRenderingContext2d,
}

impl CanvasRenderer {
    pub fn new(ctx: CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }

    fn fill(&self, color: Color, x: f64, y: f64, w: f64, h: f64) {
        self.ctx.set_fill_style_str(color.as_css());
        self.ctx.fill_rect(x, y, w, h);
    }

    fn try_draw(&mut self, command: DrawCommand) -> Result<(), JsValue> {
        match command {
            DrawCommand::Background { size, highlight } => {
                self.fill(Color::Black, 0.0, 0.0, size.x as f64, size.y as f64);
                self.fill(
                    Color::Gray,
                    highlight.x as f64,
                    highlight.y as f64,
                    highlight.width as f64,
                    highlight.height as f64,
                );
            }
            DrawCommand::Cell {
                cell,
                size,
                color,
                opacity,
            } => {
                self.ctx.set_global_alpha(opacity as f64);
                self.fill(
                    color,
                    (cell.x * size.x as i32) as f64,
                    (cell.y * size.y as i32) as f64,
                    size.x as f64,
                    size.y as f64,
                );
                self.ctx.set_global_alpha(1.0);
            }
            DrawCommand::Banner { text, x, y } => {
                self.ctx.set_fill_style_str(Color::White.as_css());
                self.ctx.set_font(BANNER_FONT);
                self.ctx.fill_text(text, x, y)?;
            }
        }
        Ok(())
    }
}

impl Renderer for CanvasRenderer {
    fn draw(&mut self, command: DrawCommand) {
        if let Err(e) = self.try_draw(command) {
            log::warn!("Canvas draw failed: {:?}", e);
        }
    }
}
