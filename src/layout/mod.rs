//! Layout module: Fitting the clock face to the terminal.
//!
//! Layouts are computed once at startup and again on every terminal
//! resize. There is no layout work at draw time beyond a few additions.

mod face;
mod metrics;

pub use face::{ClockFace, Field, Position};
pub use metrics::{Layout, Viewport, DEFAULT_SPACING, MIN_SIZE, MIN_SPACING};
