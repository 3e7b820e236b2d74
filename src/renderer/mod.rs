//! Rendering collaborator
//!
//! The simulation emits `DrawCommand`s; backends decide how to paint them.

pub mod ascii;
#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod commands;

pub use ascii::AsciiRenderer;
#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasRenderer;
pub use commands::{Discard, DrawCommand, Frame, PixelRect, Renderer};
