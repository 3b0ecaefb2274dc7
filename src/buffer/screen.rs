//! `ScreenBuffer`: A grid of tones representing the terminal screen.
//!
//! The buffer uses contiguous memory allocation for cache efficiency.
//! Cells are stored in row-major order, which is also display order.

use super::tone::Tone;
use crate::error::{ClockError, Result};
use crate::terminal::OutputBuffer;
use std::io::Write;

/// A grid of tones representing the terminal screen.
///
/// Access is in row-major order: `index = col + row * columns`.
/// Coordinates are signed so that drawing code may compute positions left
/// of or above the screen; such writes are clipped, never errors.
#[derive(Clone, PartialEq, Eq)]
pub struct ScreenBuffer {
    /// Contiguous tone storage (row-major order).
    cells: Vec<Tone>,
    /// Width in columns.
    columns: u16,
    /// Height in rows.
    rows: u16,
}

impl ScreenBuffer {
    /// Allocate a blank buffer with the given dimensions.
    ///
    /// Fails if either dimension is zero or the allocation is refused.
    pub fn new(columns: u16, rows: u16) -> Result<Self> {
        if columns == 0 || rows == 0 {
            return Err(ClockError::Allocation { columns, rows });
        }
        let size = usize::from(columns) * usize::from(rows);
        let mut cells = Vec::new();
        cells
            .try_reserve_exact(size)
            .map_err(|_| ClockError::Allocation { columns, rows })?;
        cells.resize(size, Tone::Blank);
        Ok(Self {
            cells,
            columns,
            rows,
        })
    }

    /// Get the buffer width.
    #[inline]
    pub const fn columns(&self) -> u16 {
        self.columns
    }

    /// Get the buffer height.
    #[inline]
    pub const fn row_count(&self) -> u16 {
        self.rows
    }

    /// Get the total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Check if the buffer is empty (never true after construction).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Get a reference to the underlying tone slice.
    #[inline]
    pub fn cells(&self) -> &[Tone] {
        &self.cells
    }

    /// Convert (row, col) coordinates to a linear index.
    ///
    /// This is the only place the row-major layout is spelled out.
    /// Returns `None` if coordinates are out of bounds.
    #[inline]
    pub fn index_of(&self, row: i32, col: i32) -> Option<usize> {
        let row = u16::try_from(row).ok().filter(|&r| r < self.rows)?;
        let col = u16::try_from(col).ok().filter(|&c| c < self.columns)?;
        Some(usize::from(col) + usize::from(row) * usize::from(self.columns))
    }

    /// Get the tone at (row, col).
    ///
    /// Returns `None` if coordinates are out of bounds.
    #[inline]
    pub fn get(&self, row: i32, col: i32) -> Option<Tone> {
        self.index_of(row, col).map(|i| self.cells[i])
    }

    /// Set the tone at (row, col).
    ///
    /// Out-of-range writes are clipped: the buffer is left untouched and
    /// `false` is returned.
    #[inline]
    pub fn set(&mut self, tone: Tone, row: i32, col: i32) -> bool {
        if let Some(idx) = self.index_of(row, col) {
            self.cells[idx] = tone;
            true
        } else {
            false
        }
    }

    /// Clear the entire buffer to [`Tone::Blank`].
    pub fn clear(&mut self) {
        self.cells.fill(Tone::Blank);
    }

    /// Get an iterator over rows.
    pub fn rows(&self) -> impl Iterator<Item = &[Tone]> {
        self.cells.chunks(usize::from(self.columns))
    }

    /// Count the cells currently holding `tone`.
    pub fn count(&self, tone: Tone) -> usize {
        self.cells.iter().filter(|&&t| t == tone).count()
    }

    /// Append the whole frame to `out`: for every cell, in row-major order,
    /// a cursor move to the cell's screen coordinate followed by its glyph.
    pub fn render_into(&self, out: &mut OutputBuffer) {
        for (row, line) in (0u16..).zip(self.rows()) {
            for (col, tone) in (0u16..).zip(line) {
                out.cursor_move(row, col);
                out.write_str(tone.glyph());
            }
        }
    }

    /// Render the frame into `out` and deliver it to `writer` in one write,
    /// followed by an explicit flush.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying writer fails.
    pub fn flush<W: Write + ?Sized>(
        &self,
        out: &mut OutputBuffer,
        writer: &mut W,
    ) -> std::io::Result<()> {
        out.clear();
        self.render_into(out);
        out.flush_to(writer)
    }
}

impl std::fmt::Debug for ScreenBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScreenBuffer")
            .field("columns", &self.columns)
            .field("rows", &self.rows)
            .field("lit", &(self.len() - self.count(Tone::Blank)))
            .finish()
    }
}
