//! Actor Model: Message passing between the signal thread and the clock.
//!
//! - **Signal Actor**: Blocks on OS signals, forwards them as notifications
//! - **Resize Controller**: Records notifications, owns the render context
//! - **Clock Loop**: Draws and flushes one frame per tick
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐    Notification     ┌──────────────────┐
//! │Signal Thread │ ──────────────────▶ │ ResizeController │
//! └──────────────┘                     │  RenderContext   │
//!                                      └────────┬─────────┘
//!                                               │ checkpoints
//!                                      ┌────────▼─────────┐
//!                                      │    Clock Loop    │ ──▶ terminal
//!                                      └──────────────────┘
//! ```
//!
//! Only the clock loop's thread ever touches the render context.

mod clock;
mod controller;
mod messages;
mod signals;

pub use clock::{draw_frame, field_tone, ClockConfig, ClockLoop, TickOutcome, SEPARATOR_TONE};
pub use controller::{ControllerState, RenderContext, ResizeController, Transition};
pub use messages::{ExitCause, Notification};
pub use signals::{SignalActor, HANDLED_SIGNALS};

/// Capacity of the notification channel.
pub const NOTIFICATION_CAPACITY: usize = 16;
