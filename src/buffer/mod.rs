//! Buffer module: The discretized brightness grid.
//!
//! This module contains:
//! - [`Tone`]: The five brightness levels and their glyphs
//! - [`ScreenBuffer`]: A bounded grid of tones representing the terminal screen

mod screen;
mod tone;

pub use screen::ScreenBuffer;
pub use tone::Tone;
