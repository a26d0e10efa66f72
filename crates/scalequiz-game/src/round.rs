//! A single round: one hidden key, its accepted answers and the clue chords.

use rand::Rng;
use scalequiz_theory::{CircleOfFifths, Mode, Scale};

use crate::chords::generate_chords;
use crate::error::QuizResult;
use crate::format::scale_name;

/// Chords shown per round unless configured otherwise.
pub const DEFAULT_CHORD_COUNT: usize = 4;

/// Choose a mode, then a root from that mode's ring of the circle of fifths.
///
/// # Errors
///
/// Fails only if a circle-of-fifths entry is not a valid note name.
pub fn pick_scale<R: Rng + ?Sized>(rng: &mut R) -> scalequiz_theory::Result<Scale> {
    let mode = Mode::ALL[rng.gen_range(0..Mode::ALL.len())];
    let notes = CircleOfFifths::notes(mode);
    let note = notes[rng.gen_range(0..notes.len())];
    Scale::new(note, mode)
}

#[derive(Debug, Clone)]
pub struct Round {
    scale: Scale,
    correct_answers: [Scale; 2],
    chords: Vec<String>,
}

impl Round {
    /// Start a round on a randomly picked key.
    pub fn new<R: Rng + ?Sized>(rng: &mut R, chord_count: usize) -> QuizResult<Self> {
        let scale = pick_scale(rng)?;
        Self::from_scale(scale, chord_count, rng)
    }

    /// Start a round on a fixed key; only the chords are drawn at random.
    pub fn from_scale<R: Rng + ?Sized>(
        scale: Scale,
        chord_count: usize,
        rng: &mut R,
    ) -> QuizResult<Self> {
        let correct_answers = [scale, scale.relative_key()];
        let chords = generate_chords(&scale, chord_count, rng)?;
        Ok(Self {
            scale,
            correct_answers,
            chords,
        })
    }

    #[must_use]
    pub const fn scale(&self) -> &Scale {
        &self.scale
    }

    #[must_use]
    pub const fn correct_answers(&self) -> &[Scale; 2] {
        &self.correct_answers
    }

    #[must_use]
    pub fn chords(&self) -> &[String] {
        &self.chords
    }

    /// The question line, e.g. `What scale is this: C, Am, F, G`.
    #[must_use]
    pub fn prompt(&self) -> String {
        format!("What scale is this: {}", self.chords.join(", "))
    }

    /// Whether `guess` names the key or its relative.
    #[must_use]
    pub fn is_correct(&self, guess: &Scale) -> bool {
        self.correct_answers.contains(guess)
    }

    /// Both accepted answers by name, e.g. `C major, A minor`.
    #[must_use]
    pub fn answers_text(&self) -> String {
        self.correct_answers
            .iter()
            .map(scale_name)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn c_major_round() -> Round {
        let scale = Scale::new("C", Mode::Major).unwrap();
        Round::from_scale(scale, DEFAULT_CHORD_COUNT, &mut StdRng::seed_from_u64(3)).unwrap()
    }

    #[test]
    fn test_pick_scale_uses_circle_of_fifths() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..100 {
            let scale = pick_scale(&mut rng).unwrap();
            let ring = CircleOfFifths::notes(scale.mode());
            assert!(ring.contains(&scale.root().to_string().as_str()));
        }
    }

    #[test]
    fn test_pick_scale_reaches_both_modes() {
        let mut rng = StdRng::seed_from_u64(5);
        let modes: Vec<Mode> = (0..100)
            .map(|_| pick_scale(&mut rng).unwrap().mode())
            .collect();
        assert!(modes.contains(&Mode::Major));
        assert!(modes.contains(&Mode::Minor));
    }

    #[test]
    fn test_correct_answers_include_relative() {
        let round = c_major_round();
        assert!(round.is_correct(&Scale::new("C", Mode::Major).unwrap()));
        assert!(round.is_correct(&Scale::new("A", Mode::Minor).unwrap()));
        assert!(!round.is_correct(&Scale::new("C", Mode::Minor).unwrap()));
        assert!(!round.is_correct(&Scale::new("G", Mode::Major).unwrap()));
    }

    #[test]
    fn test_answers_text() {
        assert_eq!(c_major_round().answers_text(), "C major, A minor");
    }

    #[test]
    fn test_prompt_lists_chords() {
        let round = c_major_round();
        assert_eq!(round.chords().len(), DEFAULT_CHORD_COUNT);
        assert_eq!(
            round.prompt(),
            format!("What scale is this: {}", round.chords().join(", "))
        );
    }

    #[test]
    fn test_new_round_answers_start_with_target() {
        let round = Round::new(&mut StdRng::seed_from_u64(8), 3).unwrap();
        assert_eq!(round.correct_answers()[0], *round.scale());
        assert_eq!(round.correct_answers()[1], round.scale().relative_key());
        assert_eq!(round.chords().len(), 3);
    }
}
