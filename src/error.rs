//! Error types for the clock.

use std::io;
use thiserror::Error;

/// Clock error type.
#[derive(Error, Debug)]
pub enum ClockError {
    /// I/O error while talking to the terminal.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The terminal size could not be determined.
    #[error("Failed to query terminal size: {0}")]
    TerminalSize(String),

    /// The screen buffer could not be allocated.
    #[error("Failed to allocate a {columns}x{rows} screen buffer")]
    Allocation {
        /// Requested width.
        columns: u16,
        /// Requested height.
        rows: u16,
    },

    /// Signal handlers could not be installed.
    #[error("Failed to install signal handlers: {0}")]
    Signals(String),
}

/// Result type for clock operations.
pub type Result<T> = std::result::Result<T, ClockError>;
