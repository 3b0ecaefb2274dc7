//! Segment renderer: Seven-segment digits drawn as runs of cells.
//!
//! ```text
//!   (0,0) ─────── TOP ─────── (size,0)
//!     │                          │
//!  UPPER_LEFT               UPPER_RIGHT
//!     │                          │
//!   (0,size/2) ── MIDDLE ─────── ┤
//!     │                          │
//!  LOWER_LEFT               LOWER_RIGHT
//!     │                          │
//!   (0,size) ──── BOTTOM ─────── ┘
//! ```
//!
//! Horizontal strokes cover offsets `0..=size` and vertical strokes
//! `0..=size/2`, so strokes share their corner cells and a glyph fills a
//! `(size + 1)` square box.

use crate::buffer::{ScreenBuffer, Tone};
use crate::layout::Layout;
use bitflags::bitflags;

bitflags! {
    /// The strokes lit by a digit. Bit `i` is segment `i`.
    #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
    pub struct Segments: u8 {
        /// Top horizontal bar.
        const TOP = 1 << 0;
        /// Middle horizontal bar.
        const MIDDLE = 1 << 1;
        /// Bottom horizontal bar.
        const BOTTOM = 1 << 2;
        /// Left vertical, top half.
        const UPPER_LEFT = 1 << 3;
        /// Left vertical, bottom half.
        const LOWER_LEFT = 1 << 4;
        /// Right vertical, top half.
        const UPPER_RIGHT = 1 << 5;
        /// Right vertical, bottom half.
        const LOWER_RIGHT = 1 << 6;
    }
}

/// Raw stroke masks for the digits 0 through 9.
///
/// `8` is stored as `0xff`; only the low seven bits name strokes.
pub const DIGIT_MASKS: [u8; 10] = [0x7d, 0x18, 0x37, 0x67, 0x6a, 0x4f, 0x5f, 0x61, 0xff, 0x6b];

/// Where along the glyph edge a stroke starts.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Offset {
    Zero,
    Half,
    Full,
}

impl Offset {
    #[inline]
    const fn resolve(self, size: i32) -> i32 {
        match self {
            Self::Zero => 0,
            Self::Half => size / 2,
            Self::Full => size,
        }
    }
}

/// Stroke direction.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Axis {
    Horizontal,
    Vertical,
}

/// Fixed coordinate template of one segment, relative to the glyph origin.
#[derive(Clone, Copy, Debug)]
struct Stroke {
    segment: Segments,
    x: Offset,
    y: Offset,
    axis: Axis,
}

impl Stroke {
    const fn new(segment: Segments, x: Offset, y: Offset, axis: Axis) -> Self {
        Self { segment, x, y, axis }
    }
}

const STROKES: [Stroke; 7] = [
    Stroke::new(Segments::TOP, Offset::Zero, Offset::Zero, Axis::Horizontal),
    Stroke::new(Segments::MIDDLE, Offset::Zero, Offset::Half, Axis::Horizontal),
    Stroke::new(Segments::BOTTOM, Offset::Zero, Offset::Full, Axis::Horizontal),
    Stroke::new(Segments::UPPER_LEFT, Offset::Zero, Offset::Zero, Axis::Vertical),
    Stroke::new(Segments::LOWER_LEFT, Offset::Zero, Offset::Half, Axis::Vertical),
    Stroke::new(Segments::UPPER_RIGHT, Offset::Full, Offset::Zero, Axis::Vertical),
    Stroke::new(Segments::LOWER_RIGHT, Offset::Full, Offset::Half, Axis::Vertical),
];

impl Segments {
    /// Strokes lit by `value`, clamped to `0..=9`.
    pub fn for_digit(value: i32) -> Self {
        let index = usize::try_from(value.clamp(0, 9)).unwrap_or_default();
        Self::from_bits_truncate(DIGIT_MASKS[index])
    }
}

/// Draw a single digit with its top-left corner at (`row`, `col`).
///
/// `value` is clamped to `0..=9`. Cells falling outside the buffer are
/// clipped.
pub fn draw_digit(
    buffer: &mut ScreenBuffer,
    value: i32,
    row: i32,
    col: i32,
    size: i32,
    tone: Tone,
) {
    let segments = Segments::for_digit(value);
    if segments.is_empty() {
        return;
    }

    for stroke in STROKES.iter().filter(|s| segments.contains(s.segment)) {
        let x = col + stroke.x.resolve(size);
        let y = row + stroke.y.resolve(size);
        match stroke.axis {
            Axis::Horizontal => {
                for j in 0..=size {
                    buffer.set(tone, y, x + j);
                }
            }
            Axis::Vertical => {
                for j in 0..=size / 2 {
                    buffer.set(tone, y + j, x);
                }
            }
        }
    }
}

/// Draw a two-digit group: tens at (`row`, `col`), ones one stride right.
///
/// `value` is clamped to `0..=99`.
pub fn draw_number(
    buffer: &mut ScreenBuffer,
    layout: &Layout,
    value: i32,
    row: i32,
    col: i32,
    tone: Tone,
) {
    let value = value.clamp(0, 99);
    let size = layout.size();
    draw_digit(buffer, value / 10, row, col, size, tone);
    draw_digit(buffer, value % 10, row, col + layout.stride(), size, tone);
}

/// Read back which strokes of the glyph at (`row`, `col`) are fully lit
/// with `tone`.
///
/// A stroke counts only if every one of its cells holds `tone`. Used to
/// verify rendered frames.
pub fn read_segments(
    buffer: &ScreenBuffer,
    row: i32,
    col: i32,
    size: i32,
    tone: Tone,
) -> Segments {
    let mut lit = Segments::empty();
    for stroke in &STROKES {
        let x = col + stroke.x.resolve(size);
        let y = row + stroke.y.resolve(size);
        let on = match stroke.axis {
            Axis::Horizontal => (0..=size).all(|j| buffer.get(y, x + j) == Some(tone)),
            Axis::Vertical => (0..=size / 2).all(|j| buffer.get(y + j, x) == Some(tone)),
        };
        if on {
            lit |= stroke.segment;
        }
    }
    lit
}

/// Recognize the digit drawn at (`row`, `col`), if the lit strokes match
/// one exactly.
pub fn read_digit(
    buffer: &ScreenBuffer,
    row: i32,
    col: i32,
    size: i32,
    tone: Tone,
) -> Option<u8> {
    let lit = read_segments(buffer, row, col, size, tone);
    (0u8..10).find(|&d| Segments::for_digit(i32::from(d)) == lit)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{Viewport, DEFAULT_SPACING};
    use std::collections::BTreeSet;

    fn lit_cells(buffer: &ScreenBuffer) -> BTreeSet<(i32, i32)> {
        let mut cells = BTreeSet::new();
        for row in 0..i32::from(buffer.row_count()) {
            for col in 0..i32::from(buffer.columns()) {
                if buffer.get(row, col) != Some(Tone::Blank) {
                    cells.insert((row, col));
                }
            }
        }
        cells
    }

    fn stroke_cells(segment: Segments, size: i32) -> BTreeSet<(i32, i32)> {
        let stroke = STROKES.iter().find(|s| s.segment == segment).unwrap();
        let x = stroke.x.resolve(size);
        let y = stroke.y.resolve(size);
        match stroke.axis {
            Axis::Horizontal => (0..=size).map(|j| (y, x + j)).collect(),
            Axis::Vertical => (0..=size / 2).map(|j| (y + j, x)).collect(),
        }
    }

    #[test]
    fn test_digit_masks_are_distinct() {
        let masks: BTreeSet<u8> = (0..10).map(|d| Segments::for_digit(d).bits()).collect();
        assert_eq!(masks.len(), 10);
    }

    #[test]
    fn test_eight_is_truncated_to_all_strokes() {
        assert_eq!(Segments::for_digit(8), Segments::all());
    }

    #[test]
    fn test_for_digit_clamps() {
        assert_eq!(Segments::for_digit(-3), Segments::for_digit(0));
        assert_eq!(Segments::for_digit(42), Segments::for_digit(9));
    }

    #[test]
    fn test_zero_cells_exactly() {
        let mut buffer = ScreenBuffer::new(10, 10).unwrap();
        draw_digit(&mut buffer, 0, 0, 0, 4, Tone::Solid);

        let expected: BTreeSet<_> = (Segments::all() - Segments::MIDDLE)
            .iter()
            .flat_map(|s| stroke_cells(s, 4))
            .collect();
        assert_eq!(lit_cells(&buffer), expected);
        // The middle bar's interior is never lit.
        for col in 1..4 {
            assert_eq!(buffer.get(2, col), Some(Tone::Blank));
        }
        assert_eq!(buffer.get(0, 0), Some(Tone::Solid));
    }

    #[test]
    fn test_eight_lights_every_stroke() {
        let mut buffer = ScreenBuffer::new(10, 10).unwrap();
        draw_digit(&mut buffer, 8, 0, 0, 4, Tone::Solid);

        let expected: BTreeSet<_> =
            Segments::all().iter().flat_map(|s| stroke_cells(s, 4)).collect();
        assert_eq!(lit_cells(&buffer), expected);
        assert_eq!(read_segments(&buffer, 0, 0, 4, Tone::Solid), Segments::all());
    }

    #[test]
    fn test_one_is_left_verticals() {
        let mut buffer = ScreenBuffer::new(10, 10).unwrap();
        draw_digit(&mut buffer, 1, 0, 0, 4, Tone::Dark);
        let expected: BTreeSet<_> = (0..=4).map(|r| (r, 0)).collect();
        assert_eq!(lit_cells(&buffer), expected);
    }

    #[test]
    fn test_every_digit_reads_back() {
        for size in [4, 6, 8, 12] {
            for digit in 0..10u8 {
                let mut buffer = ScreenBuffer::new(20, 20).unwrap();
                draw_digit(&mut buffer, i32::from(digit), 2, 3, size, Tone::Medium);
                assert_eq!(read_digit(&buffer, 2, 3, size, Tone::Medium), Some(digit));
            }
        }
    }

    #[test]
    fn test_digit_is_clipped_at_edges() {
        let mut buffer = ScreenBuffer::new(5, 5).unwrap();
        draw_digit(&mut buffer, 8, -2, -2, 4, Tone::Solid);
        // Only the bottom-right part survives.
        assert_eq!(buffer.get(2, 2), Some(Tone::Solid));
        assert_eq!(buffer.get(0, 2), Some(Tone::Solid));
        assert_eq!(buffer.get(4, 4), Some(Tone::Blank));
    }

    #[test]
    fn test_draw_number_places_both_digits() {
        let layout = Layout::recompute(Viewport::new(81, 25), DEFAULT_SPACING);
        let mut buffer = ScreenBuffer::new(81, 25).unwrap();
        draw_number(&mut buffer, &layout, 23, 0, 0, Tone::Medium);

        let size = layout.size();
        assert_eq!(read_digit(&buffer, 0, 0, size, Tone::Medium), Some(2));
        let ones = size + layout.spacing();
        assert_eq!(read_digit(&buffer, 0, ones, size, Tone::Medium), Some(3));
        // Nothing between the two glyphs.
        for col in size + 1..size + layout.spacing() {
            for row in 0..=size {
                assert_eq!(buffer.get(row, col), Some(Tone::Blank));
            }
        }
    }

    #[test]
    fn test_draw_number_single_digit_has_leading_zero() {
        let layout = Layout::recompute(Viewport::new(81, 25), DEFAULT_SPACING);
        let mut buffer = ScreenBuffer::new(81, 25).unwrap();
        draw_number(&mut buffer, &layout, 7, 1, 1, Tone::Light);
        assert_eq!(read_digit(&buffer, 1, 1, layout.size(), Tone::Light), Some(0));
        let ones = 1 + layout.stride();
        assert_eq!(read_digit(&buffer, 1, ones, layout.size(), Tone::Light), Some(7));
    }
}
