//! # segclock
//!
//! A seven-segment terminal clock drawn in shaded block glyphs.
//!
//! The clock keeps a grid of brightness levels the size of the terminal,
//! draws `HH MM SS` into it as seven-segment digits in three shades, and
//! dumps the grid to the terminal once per second. Whenever the terminal is
//! resized the grid and the glyph metrics are rebuilt from scratch.
//!
//! ## Core Concepts
//!
//! - **Tone grid**: a bounded [`ScreenBuffer`] where out-of-range writes are
//!   clipped instead of failing
//! - **Shrinking layout**: glyphs get smaller on narrow terminals rather than
//!   overflowing
//! - **Abandon, don't patch**: a resize mid-frame throws the frame away and
//!   redraws at the new size
//!
//! ## Example
//!
//! ```rust,ignore
//! use segclock::{draw_frame, ClockTime, RenderContext, Viewport, DEFAULT_SPACING};
//!
//! let mut context = RenderContext::allocate(Viewport::new(81, 25), DEFAULT_SPACING)?;
//! draw_frame(&mut context, ClockTime::new(9, 5, 7));
//! ```

#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod actor;
pub mod buffer;
pub mod error;
pub mod layout;
pub mod segment;
pub mod terminal;
pub mod time;

// Re-exports for convenience
pub use actor::{
    draw_frame, ClockConfig, ClockLoop, ExitCause, Notification, RenderContext, ResizeController,
    SignalActor, TickOutcome,
};
pub use buffer::{ScreenBuffer, Tone};
pub use error::{ClockError, Result};
pub use layout::{ClockFace, Field, Layout, Viewport, DEFAULT_SPACING};
pub use segment::{draw_digit, draw_number, Segments};
pub use terminal::{OutputBuffer, StdTerminal, Terminal};
pub use time::{ClockTime, LocalClock, TimeSource};
