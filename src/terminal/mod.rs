//! Terminal module: The output stream and its size.
//!
//! - [`OutputBuffer`]: per-frame byte accumulator, flushed in one write
//! - [`Terminal`]: the seam between the clock and a real (or fake) terminal
//! - [`StdTerminal`]: stdout driven through `crossterm`

mod output;

pub use output::OutputBuffer;

use crate::error::{ClockError, Result};
use crossterm::{
    cursor, execute,
    terminal::{self, Clear, ClearType},
};
use std::io::{self, Stdout, Write};

/// A writable terminal whose dimensions can be queried.
pub trait Terminal: Write {
    /// Current terminal size as `(columns, rows)`.
    fn size(&self) -> io::Result<(u16, u16)>;
}

/// Query `terminal` and add the one-cell margin in each dimension.
///
/// A failed or zero-sized query is an error.
pub fn viewport_of<T: Terminal + ?Sized>(terminal: &T) -> Result<(u16, u16)> {
    let (columns, rows) = terminal
        .size()
        .map_err(|e| ClockError::TerminalSize(e.to_string()))?;
    if columns == 0 || rows == 0 {
        return Err(ClockError::TerminalSize(format!(
            "terminal reported {columns}x{rows}"
        )));
    }
    Ok((columns.saturating_add(1), rows.saturating_add(1)))
}

/// The process's stdout as a [`Terminal`].
///
/// Construction clears the screen and hides the cursor; dropping the
/// terminal shows the cursor again, whatever path led to shutdown.
pub struct StdTerminal {
    stdout: Stdout,
}

impl StdTerminal {
    /// Take over stdout.
    ///
    /// # Errors
    ///
    /// Returns an error if the setup sequences cannot be written.
    pub fn new(clear_screen: bool, hide_cursor: bool) -> io::Result<Self> {
        let mut stdout = io::stdout();
        if clear_screen {
            execute!(stdout, Clear(ClearType::All))?;
        }
        if hide_cursor {
            execute!(stdout, cursor::Hide)?;
        }
        Ok(Self { stdout })
    }
}

impl Write for StdTerminal {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.stdout.write(buf)
    }

    fn write_all(&mut self, buf: &[u8]) -> io::Result<()> {
        self.stdout.write_all(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.stdout.flush()
    }
}

impl Terminal for StdTerminal {
    fn size(&self) -> io::Result<(u16, u16)> {
        terminal::size()
    }
}

impl Drop for StdTerminal {
    fn drop(&mut self) {
        // Restore terminal state
        let _ = execute!(self.stdout, cursor::Show);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed(io::Result<(u16, u16)>);

    impl Write for Fixed {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl Terminal for Fixed {
        fn size(&self) -> io::Result<(u16, u16)> {
            match &self.0 {
                Ok(size) => Ok(*size),
                Err(e) => Err(io::Error::other(e.to_string())),
            }
        }
    }

    #[test]
    fn test_viewport_adds_margin() {
        assert_eq!(viewport_of(&Fixed(Ok((80, 24)))).unwrap(), (81, 25));
    }

    #[test]
    fn test_viewport_rejects_zero() {
        assert!(matches!(
            viewport_of(&Fixed(Ok((0, 24)))),
            Err(ClockError::TerminalSize(_))
        ));
        assert!(viewport_of(&Fixed(Ok((80, 0)))).is_err());
    }

    #[test]
    fn test_viewport_rejects_failed_query() {
        let failed = Fixed(Err(io::Error::other("not a tty")));
        assert!(matches!(viewport_of(&failed), Err(ClockError::TerminalSize(_))));
    }
}
