//! Clock face placement: where the three groups and the colons go.

use super::metrics::Layout;

/// The three two-digit fields of the clock, left to right.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Field {
    /// Hours (0-23).
    Hour,
    /// Minutes (0-59).
    Minute,
    /// Seconds (0-59).
    Second,
}

impl Field {
    /// All fields in display order.
    pub const ALL: [Self; 3] = [Self::Hour, Self::Minute, Self::Second];

    /// Position of the field's group, counted in group slots.
    #[inline]
    const fn slot(self) -> i32 {
        match self {
            Self::Hour => 0,
            Self::Minute => 1,
            Self::Second => 2,
        }
    }
}

/// A cell position on the screen buffer. May lie outside it.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Position {
    /// Row.
    pub row: i32,
    /// Column.
    pub col: i32,
}

impl Position {
    /// Create a new position.
    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }
}

/// The clock face centered in a layout's viewport.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct ClockFace {
    layout: Layout,
    origin: Position,
}

impl ClockFace {
    /// Center the face in `layout`'s viewport.
    ///
    /// The origin goes negative when the face is larger than the viewport;
    /// the overflowing cells are clipped when drawn.
    pub fn centered(layout: Layout) -> Self {
        let viewport = layout.viewport();
        let origin = Position::new(
            (i32::from(viewport.rows) - layout.size()) / 2,
            (i32::from(viewport.columns) - layout.total_width()) / 2,
        );
        Self { layout, origin }
    }

    /// The layout the face was placed with.
    #[inline]
    pub const fn layout(&self) -> Layout {
        self.layout
    }

    /// Top-left corner of the hour group.
    #[inline]
    pub const fn origin(&self) -> Position {
        self.origin
    }

    /// Top-left corner of `field`'s group.
    #[inline]
    pub const fn group(&self, field: Field) -> Position {
        Position::new(
            self.origin.row,
            self.origin.col + 2 * field.slot() * self.layout.stride(),
        )
    }

    /// The two colon cells separating `field` from the field before it.
    ///
    /// Returns `None` for [`Field::Hour`], which has no field before it.
    pub const fn separator(&self, field: Field) -> Option<[Position; 2]> {
        if field.slot() == 0 {
            return None;
        }
        let col = self.group(field).col - self.layout.spacing() / 2;
        Some([
            Position::new(self.origin.row + 3, col),
            Position::new(self.origin.row + self.layout.size() - 3, col),
        ])
    }

    /// All four colon cells, left colon first.
    pub fn separators(&self) -> impl Iterator<Item = Position> + '_ {
        Field::ALL
            .into_iter()
            .filter_map(|field| self.separator(field))
            .flatten()
    }
}
