//! The interactive quiz loop.
//!
//! [`Quiz`] owns its random number generator, so a seeded generator replays
//! the same sequence of rounds. Input and output are any `BufRead`/`Write`
//! pair; the binary wires them to stdin and stdout.

use std::io::{BufRead, Write};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::QuizResult;
use crate::parse::parse_scale;
use crate::round::{Round, DEFAULT_CHORD_COUNT};

/// Printed when a guess does not name a valid key.
pub const FORMAT_HINT: &str = "Your guess must be in the format C/Cm.";

/// Printed before every re-read of a guess.
pub const RETRY_PROMPT: &str = "Try again...";

/// Printed once a round is solved.
pub const CORRECT: &str = "Correct!";

/// How a round ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundOutcome {
    /// The player named the key or its relative after `attempts` guesses.
    Solved { attempts: u32 },
    /// Input ran out before the round was solved.
    InputClosed,
}

#[derive(Debug)]
pub struct Quiz<R> {
    rng: R,
    chord_count: usize,
}

impl Quiz<StdRng> {
    /// A quiz seeded from `seed`, or from OS entropy when `None`.
    #[must_use]
    pub fn from_seed(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::new(rng)
    }
}

impl<R: Rng> Quiz<R> {
    #[must_use]
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            chord_count: DEFAULT_CHORD_COUNT,
        }
    }

    #[must_use]
    pub fn with_chord_count(mut self, chord_count: usize) -> Self {
        self.chord_count = chord_count;
        self
    }

    #[must_use]
    pub const fn chord_count(&self) -> usize {
        self.chord_count
    }

    /// Play rounds until input is exhausted; returns the number solved.
    ///
    /// There is no quit command: the session ends when the input closes
    /// (end of file) or the process is interrupted.
    ///
    /// # Errors
    ///
    /// Returns an error if reading or writing fails, or if a round cannot be
    /// set up.
    pub fn play<I: BufRead, O: Write>(&mut self, input: &mut I, output: &mut O) -> QuizResult<u32> {
        let mut solved = 0;
        loop {
            match self.play_round(input, output)? {
                RoundOutcome::Solved { .. } => solved += 1,
                RoundOutcome::InputClosed => {
                    log::info!("input closed after {solved} solved rounds");
                    return Ok(solved);
                }
            }
        }
    }

    /// Set up one round, then read guesses until one is correct.
    ///
    /// # Errors
    ///
    /// Returns an error if reading or writing fails, or if the round cannot
    /// be set up.
    pub fn play_round<I: BufRead, O: Write>(
        &mut self,
        input: &mut I,
        output: &mut O,
    ) -> QuizResult<RoundOutcome> {
        let round = Round::new(&mut self.rng, self.chord_count)?;
        log::debug!(
            "new round: {} (accepting {})",
            round.scale(),
            round.answers_text()
        );

        writeln!(output, "{}", round.prompt())?;
        output.flush()?;

        let mut attempts = 0;
        loop {
            let Some(guess) = read_guess(input)? else {
                return Ok(RoundOutcome::InputClosed);
            };
            attempts += 1;

            match parse_scale(&guess) {
                Some(scale) if round.is_correct(&scale) => break,
                Some(scale) => log::debug!("wrong guess: {scale}"),
                None => writeln!(output, "{FORMAT_HINT}")?,
            }
            writeln!(output, "{RETRY_PROMPT}")?;
            output.flush()?;
        }

        writeln!(output, "{CORRECT}")?;
        writeln!(output, "Correct answers: {}", round.answers_text())?;
        output.flush()?;

        log::info!("solved {} after {attempts} guesses", round.scale());
        Ok(RoundOutcome::Solved { attempts })
    }
}

/// Read one line, without its line ending; `None` at end of input.
fn read_guess<I: BufRead>(input: &mut I) -> QuizResult<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    let trimmed = line.trim_end_matches(['\n', '\r']).len();
    line.truncate(trimmed);
    Ok(Some(line))
}
