//! Clock Loop: Main coordinator that draws one frame per tick.
//!
//! Each tick the loop handles pending transitions, reads the time, draws
//! the face in a few steps and flushes. Between steps it checks for new
//! notifications; if one arrived, the half-drawn frame is dropped without
//! being flushed and the next tick starts over from a clean buffer.
//!
//! The idle between ticks is a plain wait of [`ClockConfig::tick_interval`]
//! after the flush. Draw time is not subtracted, so the display drifts
//! against the wall clock by a few milliseconds per tick and skips a
//! second now and then.

use super::controller::{RenderContext, ResizeController, Transition};
use super::messages::{ExitCause, Notification};
use crate::buffer::Tone;
use crate::error::Result;
use crate::layout::{Field, DEFAULT_SPACING};
use crate::segment::draw_number;
use crate::terminal::{OutputBuffer, Terminal};
use crate::time::{ClockTime, TimeSource};
use crossbeam_channel::Receiver;
use std::time::Duration;

/// Configuration for the clock loop.
#[derive(Debug, Clone)]
pub struct ClockConfig {
    /// Idle time after each flushed frame.
    pub tick_interval: Duration,
    /// Preferred gap between digit glyphs.
    pub default_spacing: u16,
    /// Whether to clear the screen on startup.
    pub clear_screen: bool,
    /// Whether to hide the cursor while running.
    pub hide_cursor: bool,
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            tick_interval: Duration::from_secs(1),
            default_spacing: DEFAULT_SPACING,
            clear_screen: true,
            hide_cursor: true,
        }
    }
}

/// Tone each field is drawn with.
#[inline]
pub const fn field_tone(field: Field) -> Tone {
    match field {
        Field::Hour => Tone::Dark,
        Field::Minute => Tone::Medium,
        Field::Second => Tone::Light,
    }
}

/// Tone of the colon cells.
pub const SEPARATOR_TONE: Tone = Tone::Solid;

/// One resumable piece of drawing a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FrameStep {
    Clear,
    Group(Field),
    Separators,
}

const FRAME_STEPS: [FrameStep; 5] = [
    FrameStep::Clear,
    FrameStep::Group(Field::Hour),
    FrameStep::Group(Field::Minute),
    FrameStep::Group(Field::Second),
    FrameStep::Separators,
];

fn draw_step(context: &mut RenderContext, step: FrameStep, time: ClockTime) {
    let face = context.face();
    let layout = *context.layout();
    let buffer = context.buffer_mut();
    match step {
        FrameStep::Clear => buffer.clear(),
        FrameStep::Group(field) => {
            let origin = face.group(field);
            draw_number(
                buffer,
                &layout,
                i32::from(time.field(field)),
                origin.row,
                origin.col,
                field_tone(field),
            );
        }
        FrameStep::Separators => {
            for cell in face.separators() {
                buffer.set(SEPARATOR_TONE, cell.row, cell.col);
            }
        }
    }
}

/// Draw a complete frame for `time` into `context`, uninterrupted.
pub fn draw_frame(context: &mut RenderContext, time: ClockTime) {
    for step in FRAME_STEPS {
        draw_step(context, step, time);
    }
}

/// What a single tick did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// A full frame reached the terminal.
    Flushed,
    /// A notification arrived mid-frame; nothing was flushed.
    Abandoned,
    /// A termination was handled; the loop must stop.
    Shutdown(ExitCause),
}

/// The clock.
///
/// Owns the terminal, the time source and the [`ResizeController`] that in
/// turn owns the render context.
pub struct ClockLoop<T: Terminal, C: TimeSource> {
    /// Configuration.
    config: ClockConfig,
    /// Where frames are flushed.
    terminal: T,
    /// Where the time comes from.
    clock: C,
    /// Render context owner.
    controller: ResizeController,
    /// Pre-allocated frame bytes.
    output: OutputBuffer,
    /// Frames flushed so far.
    frame_count: u64,
}

impl<T: Terminal, C: TimeSource> ClockLoop<T, C> {
    /// Create the loop and allocate the first render context.
    ///
    /// # Errors
    ///
    /// Fails if the terminal size cannot be determined or the buffer cannot
    /// be allocated.
    pub fn new(
        config: ClockConfig,
        terminal: T,
        clock: C,
        notifications: Receiver<Notification>,
    ) -> Result<Self> {
        let mut controller = ResizeController::new(notifications, config.default_spacing);
        controller.start(&terminal)?;
        Ok(Self {
            config,
            terminal,
            clock,
            controller,
            output: OutputBuffer::new(),
            frame_count: 0,
        })
    }

    /// The resize controller.
    pub const fn controller(&self) -> &ResizeController {
        &self.controller
    }

    /// The terminal.
    pub const fn terminal(&self) -> &T {
        &self.terminal
    }

    /// The terminal, mutably.
    pub fn terminal_mut(&mut self) -> &mut T {
        &mut self.terminal
    }

    /// Frames flushed so far.
    pub const fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Run one tick: handle transitions, draw, flush.
    ///
    /// # Errors
    ///
    /// Fails if reinitialization fails or the frame cannot be written.
    pub fn tick(&mut self) -> Result<TickOutcome> {
        self.tick_observed(|_| {})
    }

    /// [`tick`](Self::tick), calling `after_step` once each frame step has
    /// been drawn.
    fn tick_observed(&mut self, after_step: impl FnMut(FrameStep)) -> Result<TickOutcome> {
        match self.controller.poll() {
            Some(Transition::Shutdown(cause)) => {
                return Ok(TickOutcome::Shutdown(self.controller.shut_down(cause)));
            }
            Some(Transition::Reinitialize) => self.controller.reinitialize(&self.terminal)?,
            None => {}
        }

        let time = self.clock.now();
        if !self.draw(time, after_step) {
            tracing::debug!(%time, "frame abandoned");
            return Ok(TickOutcome::Abandoned);
        }

        let Some(context) = self.controller.context() else {
            return Ok(TickOutcome::Abandoned);
        };
        context.buffer().flush(&mut self.output, &mut self.terminal)?;
        self.frame_count += 1;
        tracing::trace!(%time, bytes = self.output.len(), "frame flushed");
        Ok(TickOutcome::Flushed)
    }

    /// Draw `time` step by step. Returns `false` if a notification cut the
    /// frame short.
    fn draw(&mut self, time: ClockTime, mut after_step: impl FnMut(FrameStep)) -> bool {
        for step in FRAME_STEPS {
            if self.controller.interrupted() {
                return false;
            }
            let Some(context) = self.controller.context_mut() else {
                return false;
            };
            draw_step(context, step, time);
            after_step(step);
        }
        !self.controller.interrupted()
    }

    /// Tick until a termination arrives.
    ///
    /// # Errors
    ///
    /// Fails on the first fatal error; the caller decides the exit status.
    pub fn run(&mut self) -> Result<ExitCause> {
        tracing::info!(interval = ?self.config.tick_interval, "clock started");
        loop {
            match self.tick()? {
                TickOutcome::Flushed => self.controller.idle(self.config.tick_interval),
                TickOutcome::Abandoned => {}
                TickOutcome::Shutdown(cause) => return Ok(cause),
            }
        }
    }
}
