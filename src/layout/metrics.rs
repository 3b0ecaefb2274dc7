//! Glyph metrics: how big a digit can be drawn on the current terminal.

/// Gap between adjacent digit glyphs when the terminal is wide enough.
pub const DEFAULT_SPACING: u16 = 4;

/// Smallest digit edge ever produced.
pub const MIN_SIZE: i32 = 4;

/// Smallest gap ever produced.
pub const MIN_SPACING: i32 = 2;

/// The drawable area, margin included.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct Viewport {
    /// Width in columns.
    pub columns: u16,
    /// Height in rows.
    pub rows: u16,
}

impl Viewport {
    /// Create a new viewport.
    #[inline]
    pub const fn new(columns: u16, rows: u16) -> Self {
        Self { columns, rows }
    }
}

/// Digit size and spacing derived from a viewport.
///
/// Six digit slots (two per field, three fields) plus five gaps and a
/// two-cell margin must fit the width. When they do not, glyphs shrink
/// instead of failing, down to [`MIN_SIZE`] and [`MIN_SPACING`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Layout {
    viewport: Viewport,
    size: i32,
    spacing: i32,
}

impl Layout {
    /// Derive the layout for `viewport`.
    pub fn recompute(viewport: Viewport, default_spacing: u16) -> Self {
        let columns = i32::from(viewport.columns);
        let default_spacing = i32::from(default_spacing);

        let size = round_down_even((columns - default_spacing * 5 - 2) / 6).max(MIN_SIZE);
        let spacing = round_down_even(default_spacing.min((columns - size * 6 - 2) / 5))
            .max(MIN_SPACING);

        Self {
            viewport,
            size,
            spacing,
        }
    }

    /// The viewport this layout was computed for.
    #[inline]
    pub const fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Edge length of one digit glyph, in cells.
    #[inline]
    pub const fn size(&self) -> i32 {
        self.size
    }

    /// Gap between adjacent digit glyphs, in cells.
    #[inline]
    pub const fn spacing(&self) -> i32 {
        self.spacing
    }

    /// Distance from one glyph origin to the next.
    #[inline]
    pub const fn stride(&self) -> i32 {
        self.size + self.spacing
    }

    /// Width of the whole face: six glyph slots and five gaps.
    #[inline]
    pub const fn total_width(&self) -> i32 {
        self.stride() * 5 + self.size
    }
}

/// Truncate toward the even number closer to zero.
#[inline]
const fn round_down_even(value: i32) -> i32 {
    value - value % 2
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout(columns: u16) -> Layout {
        Layout::recompute(Viewport::new(columns, 24), DEFAULT_SPACING)
    }

    #[test]
    fn test_layout_standard_terminal() {
        let l = layout(80);
        assert_eq!(l.size(), 8);
        assert_eq!(l.spacing(), 4);
        assert!(l.total_width() <= 80);
    }

    #[test]
    fn test_layout_margin_included_terminal() {
        // 80x24 terminal plus the one-cell margin.
        let l = layout(81);
        assert_eq!((l.size(), l.spacing()), (8, 4));
        assert_eq!(l.total_width(), 68);
    }

    #[test]
    fn test_layout_invariants_across_widths() {
        for columns in 1..=400 {
            let l = layout(columns);
            assert!(l.size() >= MIN_SIZE, "columns={columns}");
            assert_eq!(l.size() % 2, 0, "columns={columns}");
            assert!(l.spacing() >= MIN_SPACING, "columns={columns}");
            assert_eq!(l.spacing() % 2, 0, "columns={columns}");
            assert!(l.spacing() <= i32::from(DEFAULT_SPACING));
        }
    }

    #[test]
    fn test_layout_fits_whenever_minimum_fits() {
        // The minimum face is 4*6 + 2*5 = 34 cells wide.
        for columns in 34..=400 {
            let l = layout(columns);
            assert!(l.total_width() <= i32::from(columns), "columns={columns}");
        }
    }

    #[test]
    fn test_layout_narrow_terminal_shrinks_spacing() {
        let l = layout(40);
        assert_eq!(l.size(), 4);
        assert_eq!(l.spacing(), 2);
    }

    #[test]
    fn test_layout_tiny_terminal_floors() {
        let l = layout(3);
        assert_eq!((l.size(), l.spacing()), (MIN_SIZE, MIN_SPACING));
    }

    #[test]
    fn test_layout_wide_terminal_grows_size() {
        let l = layout(200);
        assert_eq!(l.size(), 28);
        assert_eq!(l.spacing(), 4);
    }

    #[test]
    fn test_layout_carries_viewport() {
        let l = Layout::recompute(Viewport::new(120, 40), DEFAULT_SPACING);
        assert_eq!(l.viewport(), Viewport::new(120, 40));
    }

    #[test]
    fn test_round_down_even() {
        assert_eq!(round_down_even(7), 6);
        assert_eq!(round_down_even(8), 8);
        assert_eq!(round_down_even(-3), -2);
        assert_eq!(round_down_even(0), 0);
    }
}
