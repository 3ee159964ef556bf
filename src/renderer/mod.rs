//! Terminal rendering module
//!
//! Projects the board through the active camera into a character canvas.

pub mod canvas;
pub mod scene;
pub mod terminal;

pub use canvas::{Canvas, Glyph};
pub use scene::draw_scene;
pub use terminal::TerminalRenderer;
