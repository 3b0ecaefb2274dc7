//! Message types for actor communication.
//!
//! These enums define the protocol between the signal actor and the
//! clock loop.

use signal_hook::consts::signal::{SIGHUP, SIGINT, SIGQUIT, SIGTERM, SIGWINCH};
use std::os::raw::c_int;

/// Why the clock is shutting down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExitCause {
    /// Interrupted from the keyboard (Ctrl+C).
    Interrupt,
    /// Asked to terminate.
    Terminate,
    /// The controlling terminal went away.
    Hangup,
    /// A fault-class notification.
    Fault,
    /// A notification the clock has no dedicated handling for.
    Other(c_int),
}

impl ExitCause {
    /// Whether this cause is fault class.
    #[inline]
    pub const fn is_fault(self) -> bool {
        matches!(self, Self::Fault)
    }

    /// Process exit status for this cause: 1 for faults, 0 otherwise.
    #[inline]
    pub const fn exit_code(self) -> u8 {
        if self.is_fault() {
            1
        } else {
            0
        }
    }
}

/// Notifications from the signal thread.
///
/// These are sent from the signal actor to the clock loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notification {
    /// Terminal dimensions changed.
    Resize,

    /// The process must shut down.
    Terminate(ExitCause),
}

impl Notification {
    /// Map a signal number to a notification.
    ///
    /// Unrecognized signals fall through to the termination path.
    pub const fn from_signal(signal: c_int) -> Self {
        match signal {
            SIGWINCH => Self::Resize,
            SIGINT => Self::Terminate(ExitCause::Interrupt),
            SIGTERM => Self::Terminate(ExitCause::Terminate),
            SIGHUP => Self::Terminate(ExitCause::Hangup),
            SIGQUIT => Self::Terminate(ExitCause::Fault),
            other => Self::Terminate(ExitCause::Other(other)),
        }
    }
}
