//! Game logic for scalequiz.
//!
//! Picks a random key, shows four of its diatonic chords and keeps asking
//! until the player names the key or its relative major/minor.

#![deny(unsafe_code)]
#![warn(missing_debug_implementations)]

pub mod chords;
pub mod config;
pub mod error;
pub mod format;
pub mod parse;
pub mod quiz;
pub mod round;

pub use chords::generate_chords;
pub use config::Config;
pub use error::{QuizError, QuizResult};
pub use format::{format_as_guess, format_chord, scale_name};
pub use parse::parse_scale;
pub use quiz::{Quiz, RoundOutcome};
pub use round::{pick_scale, Round, DEFAULT_CHORD_COUNT};
