//! The circle of fifths.

use crate::mode::Mode;

/// Key roots arranged by ascending fifths.
///
/// The outer ring holds major keys and the inner ring minor keys; the same
/// index on both rings is a relative major/minor pair.
#[derive(Debug, Clone, Copy)]
pub struct CircleOfFifths;

impl CircleOfFifths {
    pub const OUTER: [&'static str; 12] = [
        "C", "G", "D", "A", "E", "B", "Gb", "Db", "Ab", "Eb", "Bb", "F",
    ];

    pub const INNER: [&'static str; 12] = [
        "A", "E", "B", "F#", "C#", "G#", "Eb", "Bb", "F", "C", "G", "D",
    ];

    /// The ring of roots for `mode`.
    #[must_use]
    pub fn notes(mode: Mode) -> &'static [&'static str; 12] {
        match mode {
            Mode::Major => &Self::OUTER,
            Mode::Minor => &Self::INNER,
        }
    }
}
