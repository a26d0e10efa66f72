//! Diatonic major and natural-minor scales.

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::chord::Chord;
use crate::error::{Error, Result};
use crate::mode::Mode;
use crate::note::{Note, Pitch, DEFAULT_OCTAVE};

/// Number of degrees in a diatonic scale.
pub const DEGREES: usize = 7;

/// A seven-note scale identified by its root and mode.
///
/// Two scales compare equal when their roots share a pitch class and their
/// modes match. Octave and enharmonic spelling do not take part, so the
/// scale typed as "C#" is the same answer as "Db".
#[derive(Debug, Clone, Copy)]
pub struct Scale {
    root: Pitch,
    mode: Mode,
}

impl Scale {
    /// Build a scale from a note name such as `"C"`, `"F#"` or `"Bb"`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidNote`] when `note` is not a recognized note name.
    pub fn new(note: &str, mode: Mode) -> Result<Self> {
        let note: Note = note.parse()?;
        Ok(Self::from_note(note, mode))
    }

    #[must_use]
    pub const fn from_note(note: Note, mode: Mode) -> Self {
        Self {
            root: note.at_octave(DEFAULT_OCTAVE),
            mode,
        }
    }

    #[must_use]
    pub fn with_octave(mut self, octave: i32) -> Self {
        self.root.octave = octave;
        self
    }

    #[must_use]
    pub const fn root(&self) -> Note {
        self.root.note
    }

    #[must_use]
    pub const fn mode(&self) -> Mode {
        self.mode
    }

    /// The spelled pitch `step` scale steps above the root.
    ///
    /// Steps past the seventh degree continue into the next octaves, which is
    /// what stacking thirds on the upper degrees needs.
    #[must_use]
    pub fn pitch(&self, step: usize) -> Pitch {
        let intervals = self.mode.intervals();
        let octaves_up = i32::try_from(step / DEGREES).unwrap_or(0);
        let target = self.root.semitone() + intervals[step % DEGREES] + 12 * octaves_up;

        let root_letter = self.root.note.letter;
        let letter = root_letter.step(step);
        let letter_octave = self.root.octave
            + i32::try_from((root_letter.index() + step) / DEGREES).unwrap_or(0);
        let natural = Note::natural(letter).at_octave(letter_octave);

        Note::new(letter, target - natural.semitone()).at_octave(letter_octave)
    }

    /// All seven notes of the scale, starting at the root.
    #[must_use]
    pub fn notes(&self) -> Vec<Note> {
        (0..DEGREES).map(|step| self.pitch(step).note).collect()
    }

    /// The triad built on `degree` (0 = tonic) from the scale's own notes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DegreeOutOfRange`] for degrees 7 and above.
    pub fn chord(&self, degree: usize) -> Result<Chord> {
        if degree >= DEGREES {
            return Err(Error::DegreeOutOfRange(degree));
        }
        Ok(Chord::new(vec![
            self.pitch(degree),
            self.pitch(degree + 2),
            self.pitch(degree + 4),
        ]))
    }

    /// The relative minor of a major scale, or the relative major of a minor one.
    #[must_use]
    pub fn relative_key(&self) -> Self {
        let step = match self.mode {
            Mode::Major => 5,
            Mode::Minor => 2,
        };
        let root = self.pitch(step);
        Self {
            root,
            mode: self.mode.relative(),
        }
    }

    /// Human-readable name, e.g. `"C major scale"` or `"C4 major scale"`.
    #[must_use]
    pub fn get_scale_name(&self, with_octave: bool) -> String {
        if with_octave {
            format!("{} {} scale", self.root, self.mode)
        } else {
            format!("{} {} scale", self.root.note, self.mode)
        }
    }
}

impl PartialEq for Scale {
    fn eq(&self, other: &Self) -> bool {
        self.mode == other.mode && self.root.note.is_enharmonic(other.root.note)
    }
}

impl Eq for Scale {}

impl Hash for Scale {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.mode.hash(state);
        self.root.note.pitch_class().hash(state);
    }
}

impl fmt::Display for Scale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.root.note, self.mode)
    }
}
