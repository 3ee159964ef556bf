//! Platform layer
//!
//! Handles the native terminal side of the game:
//! - Input events (keyboard and mouse)
//! - Frame timing

pub mod clock;
pub mod input;

pub use clock::FrameClock;
pub use input::{InputAction, InputState, map_key};
