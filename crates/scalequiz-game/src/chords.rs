//! Drawing random diatonic chords from a scale.

use rand::seq::index;
use rand::Rng;
use scalequiz_theory::scale::DEGREES;
use scalequiz_theory::{detect_chord, Error as TheoryError, Scale};

use crate::error::{QuizError, QuizResult};
use crate::format::format_chord;

/// Pick `amount` distinct degrees at random and name the triad on each.
///
/// The chords come back in the order the degrees were drawn, not sorted.
///
/// # Errors
///
/// Returns [`QuizError::TooManyChords`] when `amount` exceeds the number of
/// scale degrees.
pub fn generate_chords<R: Rng + ?Sized>(
    scale: &Scale,
    amount: usize,
    rng: &mut R,
) -> QuizResult<Vec<String>> {
    if amount > DEGREES {
        return Err(QuizError::TooManyChords {
            requested: amount,
            available: DEGREES,
        });
    }

    let degrees = index::sample(rng, DEGREES, amount).into_vec();
    log::debug!("{scale}: drew degrees {degrees:?}");

    degrees
        .into_iter()
        .map(|degree| -> QuizResult<String> {
            let chord = scale.chord(degree)?;
            let detected = detect_chord(&chord)
                .ok_or_else(|| TheoryError::UndetectedChord(chord.to_string()))?;
            Ok(format_chord(&detected.to_string()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use scalequiz_theory::Mode;

    const C_MAJOR_CHORDS: [&str; 7] = ["C", "Dm", "Em", "F", "G", "Am", "Bdim"];

    #[test]
    fn test_generates_requested_amount() {
        let scale = Scale::new("C", Mode::Major).unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        for amount in 0..=DEGREES {
            let chords = generate_chords(&scale, amount, &mut rng).unwrap();
            assert_eq!(chords.len(), amount);
        }
    }

    #[test]
    fn test_chords_come_from_distinct_degrees() {
        let scale = Scale::new("C", Mode::Major).unwrap();
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..50 {
            let chords = generate_chords(&scale, 4, &mut rng).unwrap();
            let mut unique = chords.clone();
            unique.sort();
            unique.dedup();
            assert_eq!(unique.len(), 4, "repeated chord in {chords:?}");
            assert!(chords.iter().all(|c| C_MAJOR_CHORDS.contains(&c.as_str())));
        }
    }

    #[test]
    fn test_all_seven_covers_the_scale() {
        let scale = Scale::new("C", Mode::Major).unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        let mut chords = generate_chords(&scale, DEGREES, &mut rng).unwrap();
        chords.sort();
        let mut expected = C_MAJOR_CHORDS.map(String::from).to_vec();
        expected.sort();
        assert_eq!(chords, expected);
    }

    #[test]
    fn test_same_seed_same_chords() {
        let scale = Scale::new("Eb", Mode::Minor).unwrap();
        let first = generate_chords(&scale, 4, &mut StdRng::seed_from_u64(9)).unwrap();
        let second = generate_chords(&scale, 4, &mut StdRng::seed_from_u64(9)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_too_many_chords() {
        let scale = Scale::new("C", Mode::Major).unwrap();
        let mut rng = StdRng::seed_from_u64(0);
        let result = generate_chords(&scale, 8, &mut rng);
        assert!(matches!(
            result,
            Err(QuizError::TooManyChords {
                requested: 8,
                available: 7
            })
        ));
    }
}
