//! Tone: The atomic unit of the clock display.
//!
//! A tone is one of five discrete brightness levels. Each level is drawn
//! with a fixed Unicode shading block:
//!
//! ```text
//! ┌───────┬───────┬────────┬──────┬───────┐
//! │ Blank │ Light │ Medium │ Dark │ Solid │
//! ├───────┼───────┼────────┼──────┼───────┤
//! │  ' '  │  '░'  │  '▒'   │ '▓'  │  '█'  │
//! └───────┴───────┴────────┴──────┴───────┘
//! ```
//!
//! The ordering is purely visual; nothing in the renderer compares tones.

/// Glyph per tone, indexed by the tone's discriminant.
const GLYPHS: [&str; Tone::COUNT] = [" ", "░", "▒", "▓", "█"];

/// A discrete brightness level.
#[repr(u8)]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub enum Tone {
    /// Empty cell.
    #[default]
    Blank = 0,
    /// Light shade.
    Light,
    /// Medium shade.
    Medium,
    /// Dark shade.
    Dark,
    /// Full block.
    Solid,
}

impl Tone {
    /// Number of tone levels.
    pub const COUNT: usize = 5;

    /// All tones, lightest first.
    pub const ALL: [Self; Self::COUNT] =
        [Self::Blank, Self::Light, Self::Medium, Self::Dark, Self::Solid];

    /// The glyph used to display this tone.
    #[inline]
    pub const fn glyph(self) -> &'static str {
        GLYPHS[self as usize]
    }

    /// Look up the tone drawn with `glyph`, if any.
    pub fn from_glyph(glyph: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tone| tone.glyph() == glyph)
    }
}
