//! Music theory primitives for scalequiz.
//!
//! This crate spells notes and diatonic scales, builds triads on scale
//! degrees, names them through chord detection, and exposes the circle of
//! fifths used to pick quiz keys.

#![deny(unsafe_code)]
#![warn(missing_debug_implementations)]

pub mod chord;
pub mod circle;
pub mod error;
pub mod mode;
pub mod note;
pub mod scale;

pub use chord::{detect_chord, Chord, ChordQuality, DetectedChord};
pub use circle::CircleOfFifths;
pub use error::{Error, Result};
pub use mode::Mode;
pub use note::{Letter, Note, Pitch, DEFAULT_OCTAVE};
pub use scale::Scale;
