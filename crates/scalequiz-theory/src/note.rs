//! Spelled notes and pitches.
//!
//! A [`Note`] keeps its letter and accidental so that scales come out spelled
//! the way a musician writes them (Gb major contains Cb, not B). Comparisons
//! that should ignore spelling go through [`Note::pitch_class`].

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Octave used when a scale is built without an explicit one.
pub const DEFAULT_OCTAVE: i32 = 4;

/// Accidentals beyond a double sharp/flat are not accepted when parsing.
const MAX_ACCIDENTALS: usize = 2;

/// A note letter without accidentals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Letter {
    C,
    D,
    E,
    F,
    G,
    A,
    B,
}

impl Letter {
    const ALL: [Letter; 7] = [
        Letter::C,
        Letter::D,
        Letter::E,
        Letter::F,
        Letter::G,
        Letter::A,
        Letter::B,
    ];

    /// Construct a `Letter` from its uppercase character.
    pub fn from_char(input: char) -> Option<Self> {
        match input {
            'C' => Some(Self::C),
            'D' => Some(Self::D),
            'E' => Some(Self::E),
            'F' => Some(Self::F),
            'G' => Some(Self::G),
            'A' => Some(Self::A),
            'B' => Some(Self::B),
            _ => None,
        }
    }

    /// Position of the letter within an octave starting at C.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::C => 0,
            Self::D => 1,
            Self::E => 2,
            Self::F => 3,
            Self::G => 4,
            Self::A => 5,
            Self::B => 6,
        }
    }

    /// Semitones above C of the natural note.
    #[must_use]
    pub const fn semitone(self) -> i32 {
        match self {
            Self::C => 0,
            Self::D => 2,
            Self::E => 4,
            Self::F => 5,
            Self::G => 7,
            Self::A => 9,
            Self::B => 11,
        }
    }

    /// The letter `steps` positions above this one, wrapping at B.
    #[must_use]
    pub fn step(self, steps: usize) -> Self {
        Self::ALL[(self.index() + steps) % Self::ALL.len()]
    }

    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Self::C => 'C',
            Self::D => 'D',
            Self::E => 'E',
            Self::F => 'F',
            Self::G => 'G',
            Self::A => 'A',
            Self::B => 'B',
        }
    }
}

/// A note name: letter plus a signed accidental (+1 sharp, -1 flat).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Note {
    pub letter: Letter,
    pub accidental: i32,
}

impl Note {
    #[must_use]
    pub const fn new(letter: Letter, accidental: i32) -> Self {
        Self { letter, accidental }
    }

    #[must_use]
    pub const fn natural(letter: Letter) -> Self {
        Self::new(letter, 0)
    }

    /// Pitch class in `0..12`; enharmonic spellings share a class.
    #[must_use]
    pub fn pitch_class(self) -> u8 {
        let class = (self.letter.semitone() + self.accidental).rem_euclid(12);
        u8::try_from(class).unwrap_or_default()
    }

    #[must_use]
    pub fn is_enharmonic(self, other: Self) -> bool {
        self.pitch_class() == other.pitch_class()
    }

    #[must_use]
    pub const fn at_octave(self, octave: i32) -> Pitch {
        Pitch::new(self, octave)
    }
}

/// Parses `C`, `F#`, `Bb`, `F##`, `Ebb`.
///
/// Octave digits are rejected (`"C4"` is not a note name here); scales pick
/// their octave separately.
impl FromStr for Note {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || Error::InvalidNote(s.to_string());

        let mut chars = s.chars();
        let letter = chars.next().and_then(Letter::from_char).ok_or_else(invalid)?;

        let rest = chars.as_str();
        if rest.len() > MAX_ACCIDENTALS {
            return Err(invalid());
        }
        let count = i32::try_from(rest.len()).map_err(|_| invalid())?;
        let accidental = match rest.chars().next() {
            None => 0,
            Some('#') if rest.chars().all(|c| c == '#') => count,
            Some('b') if rest.chars().all(|c| c == 'b') => -count,
            _ => return Err(invalid()),
        };

        Ok(Self::new(letter, accidental))
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter.as_char())?;
        let mark = if self.accidental > 0 { "#" } else { "b" };
        for _ in 0..self.accidental.unsigned_abs() {
            f.write_str(mark)?;
        }
        Ok(())
    }
}

/// A note in a specific octave (scientific pitch notation, C4 = middle C).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pitch {
    pub note: Note,
    pub octave: i32,
}

impl Pitch {
    #[must_use]
    pub const fn new(note: Note, octave: i32) -> Self {
        Self { note, octave }
    }

    /// Absolute semitone number, counting from C0.
    #[must_use]
    pub const fn semitone(self) -> i32 {
        self.octave * 12 + self.note.letter.semitone() + self.note.accidental
    }
}

impl fmt::Display for Pitch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.note, self.octave)
    }
}
