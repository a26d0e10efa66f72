//! Triads and chord detection.

use std::fmt;

use crate::mode::Mode;
use crate::note::{Note, Pitch};

/// A set of concrete pitches sounding together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chord {
    pitches: Vec<Pitch>,
}

impl Chord {
    #[must_use]
    pub fn new(pitches: Vec<Pitch>) -> Self {
        Self { pitches }
    }

    #[must_use]
    pub fn pitches(&self) -> &[Pitch] {
        &self.pitches
    }
}

impl fmt::Display for Chord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<String> = self.pitches.iter().map(ToString::to_string).collect();
        write!(f, "[{}]", names.join(", "))
    }
}

/// The triad qualities detection knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChordQuality {
    Major,
    Minor,
    Diminished,
    Augmented,
}

impl ChordQuality {
    const ALL: [ChordQuality; 4] = [
        ChordQuality::Major,
        ChordQuality::Minor,
        ChordQuality::Diminished,
        ChordQuality::Augmented,
    ];

    /// Pitch-class offsets above the root, sorted.
    const fn shape(self) -> [u8; 3] {
        match self {
            Self::Major => [0, 4, 7],
            Self::Minor => [0, 3, 7],
            Self::Diminished => [0, 3, 6],
            Self::Augmented => [0, 4, 8],
        }
    }

    /// Literal appended to the root in a raw chord name.
    ///
    /// Major and minor share their literal with [`Mode::as_str`].
    #[must_use]
    pub const fn suffix(self) -> &'static str {
        match self {
            Self::Major => Mode::Major.as_str(),
            Self::Minor => Mode::Minor.as_str(),
            Self::Diminished => "dim",
            Self::Augmented => "aug",
        }
    }
}

/// Result of [`detect_chord`]: a root and a quality.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DetectedChord {
    pub root: Note,
    pub quality: ChordQuality,
}

/// Renders the raw name, e.g. `Cmajor`, `F#minor`, `Bdim`.
impl fmt::Display for DetectedChord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.root, self.quality.suffix())
    }
}

/// Name the triad formed by `chord`, in any inversion.
///
/// Each pitch is tried as the root; the first whose intervals to the other
/// pitches match a known triad shape wins. Returns `None` for anything that
/// is not a three-note triad.
pub fn detect_chord(chord: &Chord) -> Option<DetectedChord> {
    let pitches = chord.pitches();
    if pitches.len() != 3 {
        return None;
    }

    for candidate in pitches {
        let root_class = candidate.note.pitch_class();
        let mut offsets: Vec<u8> = pitches
            .iter()
            .map(|p| (p.note.pitch_class() + 12 - root_class) % 12)
            .collect();
        offsets.sort_unstable();

        if let Some(quality) = ChordQuality::ALL
            .into_iter()
            .find(|quality| quality.shape()[..] == offsets[..])
        {
            let detected = DetectedChord {
                root: candidate.note,
                quality,
            };
            log::debug!("detected {detected} from {chord}");
            return Some(detected);
        }
    }

    log::debug!("no triad matches {chord}");
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::note::Letter;
    use crate::scale::Scale;

    fn pitch(name: &str, octave: i32) -> Pitch {
        name.parse::<Note>().unwrap().at_octave(octave)
    }

    #[test]
    fn test_detect_root_position_triads() {
        let c_major = Chord::new(vec![pitch("C", 4), pitch("E", 4), pitch("G", 4)]);
        assert_eq!(detect_chord(&c_major).unwrap().to_string(), "Cmajor");

        let a_minor = Chord::new(vec![pitch("A", 4), pitch("C", 5), pitch("E", 5)]);
        assert_eq!(detect_chord(&a_minor).unwrap().to_string(), "Aminor");

        let b_dim = Chord::new(vec![pitch("B", 4), pitch("D", 5), pitch("F", 5)]);
        assert_eq!(detect_chord(&b_dim).unwrap().to_string(), "Bdim");

        let c_aug = Chord::new(vec![pitch("C", 4), pitch("E", 4), pitch("G#", 4)]);
        let detected = detect_chord(&c_aug).unwrap();
        assert_eq!(detected.quality, ChordQuality::Augmented);
    }

    #[test]
    fn test_detect_inversion() {
        let first_inversion = Chord::new(vec![pitch("E", 4), pitch("G", 4), pitch("C", 5)]);
        let detected = detect_chord(&first_inversion).unwrap();
        assert_eq!(detected.root, Note::natural(Letter::C));
        assert_eq!(detected.quality, ChordQuality::Major);
    }

    #[test]
    fn test_detect_rejects_non_triads() {
        let dyad = Chord::new(vec![pitch("C", 4), pitch("G", 4)]);
        assert!(detect_chord(&dyad).is_none());

        let cluster = Chord::new(vec![pitch("C", 4), pitch("C#", 4), pitch("D", 4)]);
        assert!(detect_chord(&cluster).is_none());
    }

    #[test]
    fn test_diatonic_triads_of_c_major() {
        let scale = Scale::new("C", crate::Mode::Major).unwrap();
        let names: Vec<String> = (0..7)
            .map(|degree| detect_chord(&scale.chord(degree).unwrap()).unwrap().to_string())
            .collect();
        assert_eq!(
            names,
            ["Cmajor", "Dminor", "Eminor", "Fmajor", "Gmajor", "Aminor", "Bdim"]
        );
    }

    #[test]
    fn test_spelling_follows_the_scale() {
        let scale = Scale::new("Gb", crate::Mode::Major).unwrap();
        let subdominant = detect_chord(&scale.chord(3).unwrap()).unwrap();
        assert_eq!(subdominant.to_string(), "Cbmajor");
    }

    #[test]
    fn test_quality_suffix_matches_mode() {
        assert_eq!(ChordQuality::Major.suffix(), Mode::Major.as_str());
        assert_eq!(ChordQuality::Minor.suffix(), Mode::Minor.as_str());
    }
}
