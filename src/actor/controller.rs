//! Resize Controller: Owns the render context and its lifecycle.
//!
//! ```text
//!            resize                  reallocated
//! Running ───────────▶ Reinitializing ───────────▶ Running
//!    │
//!    │ termination
//!    ▼
//! ShuttingDown ──▶ (process exit)
//! ```
//!
//! Notifications are only ever recorded here. Acting on them happens at
//! well-defined points of the clock loop, so the buffer is never swapped
//! out from under a draw call: the old context is dropped before the new
//! one is allocated, and no cell write happens in between.

use super::messages::{ExitCause, Notification};
use crate::buffer::ScreenBuffer;
use crate::error::Result;
use crate::layout::{ClockFace, Layout, Viewport};
use crate::terminal::{viewport_of, Terminal};
use crossbeam_channel::{Receiver, RecvTimeoutError, TryRecvError};
use std::time::Duration;

/// Lifecycle state of the render context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerState {
    /// A context is live and frames are being drawn.
    Running,
    /// The old context is gone; a new one is being allocated.
    Reinitializing,
    /// The context is released; the process is about to exit.
    ShuttingDown,
}

/// What the clock loop must do before drawing the next frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Rebuild the context for the new terminal size.
    Reinitialize,
    /// Stop drawing and exit.
    Shutdown(ExitCause),
}

/// Everything a frame is drawn into: the buffer and the layout it was
/// sized with.
#[derive(Debug, Clone)]
pub struct RenderContext {
    buffer: ScreenBuffer,
    layout: Layout,
}

impl RenderContext {
    /// Allocate a blank buffer and compute the layout for `viewport`.
    pub fn allocate(viewport: Viewport, default_spacing: u16) -> Result<Self> {
        let buffer = ScreenBuffer::new(viewport.columns, viewport.rows)?;
        let layout = Layout::recompute(viewport, default_spacing);
        Ok(Self { buffer, layout })
    }

    /// The screen buffer.
    #[inline]
    pub const fn buffer(&self) -> &ScreenBuffer {
        &self.buffer
    }

    /// The screen buffer, for drawing.
    #[inline]
    pub fn buffer_mut(&mut self) -> &mut ScreenBuffer {
        &mut self.buffer
    }

    /// The layout.
    #[inline]
    pub const fn layout(&self) -> &Layout {
        &self.layout
    }

    /// The clock face centered for this context.
    #[inline]
    pub fn face(&self) -> ClockFace {
        ClockFace::centered(self.layout)
    }
}

/// Owner of the render context and the reinitialize/shutdown transitions.
pub struct ResizeController {
    /// Notifications from the signal actor.
    notifications: Receiver<Notification>,
    /// Spacing used when recomputing the layout.
    default_spacing: u16,
    /// Current lifecycle state.
    state: ControllerState,
    /// The live context, if any.
    context: Option<RenderContext>,
    /// Set when a resize has been observed but not yet handled.
    reinit_requested: bool,
    /// Set when a termination has been observed.
    shutdown_requested: Option<ExitCause>,
    /// Completed reinitializations.
    reinit_count: u64,
}

impl ResizeController {
    /// Create a controller with no context yet.
    pub fn new(notifications: Receiver<Notification>, default_spacing: u16) -> Self {
        Self {
            notifications,
            default_spacing,
            state: ControllerState::Running,
            context: None,
            reinit_requested: false,
            shutdown_requested: None,
            reinit_count: 0,
        }
    }

    /// Allocate the first context from `terminal`'s current size.
    ///
    /// # Errors
    ///
    /// Fails if the size query fails or reports zero, or the buffer cannot
    /// be allocated.
    pub fn start<T: Terminal + ?Sized>(&mut self, terminal: &T) -> Result<()> {
        let (columns, rows) = viewport_of(terminal)?;
        self.context = Some(RenderContext::allocate(
            Viewport::new(columns, rows),
            self.default_spacing,
        )?);
        self.state = ControllerState::Running;
        tracing::info!(columns, rows, "render context allocated");
        Ok(())
    }

    /// Current lifecycle state.
    #[inline]
    pub const fn state(&self) -> ControllerState {
        self.state
    }

    /// The live context.
    #[inline]
    pub const fn context(&self) -> Option<&RenderContext> {
        self.context.as_ref()
    }

    /// The live context, for drawing.
    #[inline]
    pub fn context_mut(&mut self) -> Option<&mut RenderContext> {
        self.context.as_mut()
    }

    /// Number of completed reinitializations.
    #[inline]
    pub const fn reinit_count(&self) -> u64 {
        self.reinit_count
    }

    /// Record a notification.
    pub fn accept(&mut self, notification: Notification) {
        match notification {
            Notification::Resize => self.reinit_requested = true,
            Notification::Terminate(cause) => {
                // The first termination cause wins.
                self.shutdown_requested.get_or_insert(cause);
            }
        }
    }

    /// Record every notification waiting on the channel.
    fn drain(&mut self) {
        loop {
            match self.notifications.try_recv() {
                Ok(notification) => self.accept(notification),
                Err(TryRecvError::Empty | TryRecvError::Disconnected) => break,
            }
        }
    }

    /// Whether a notification is pending that invalidates the frame being
    /// drawn.
    pub fn interrupted(&mut self) -> bool {
        self.drain();
        self.reinit_requested || self.shutdown_requested.is_some()
    }

    /// The transition due before the next frame, if any.
    ///
    /// Termination takes priority over a pending resize.
    pub fn poll(&mut self) -> Option<Transition> {
        self.drain();
        if let Some(cause) = self.shutdown_requested {
            return Some(Transition::Shutdown(cause));
        }
        self.reinit_requested.then_some(Transition::Reinitialize)
    }

    /// Wait up to `interval` for the next tick, recording any
    /// notification that cuts the wait short.
    pub fn idle(&mut self, interval: Duration) {
        match self.notifications.recv_timeout(interval) {
            Ok(notification) => self.accept(notification),
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => std::thread::sleep(interval),
        }
    }

    /// Replace the context with one sized for `terminal`'s current
    /// dimensions.
    ///
    /// The old context is released first.
    ///
    /// # Errors
    ///
    /// Fails if the size query fails or reports zero, or the buffer cannot
    /// be allocated. The controller is left without a context.
    pub fn reinitialize<T: Terminal + ?Sized>(&mut self, terminal: &T) -> Result<()> {
        self.state = ControllerState::Reinitializing;
        self.reinit_requested = false;
        self.context = None;

        let (columns, rows) = viewport_of(terminal)?;
        self.context = Some(RenderContext::allocate(
            Viewport::new(columns, rows),
            self.default_spacing,
        )?);

        self.state = ControllerState::Running;
        self.reinit_count += 1;
        tracing::debug!(columns, rows, "render context reinitialized");
        Ok(())
    }

    /// Release the context and enter [`ControllerState::ShuttingDown`].
    pub fn shut_down(&mut self, cause: ExitCause) -> ExitCause {
        self.state = ControllerState::ShuttingDown;
        self.context = None;
        tracing::info!(?cause, "shutting down");
        cause
    }
}
