//! Error types for the quiz.

use thiserror::Error;

/// Errors that end a quiz session.
#[derive(Debug, Error)]
pub enum QuizError {
    /// Reading a guess or writing a prompt failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The theory layer could not build or name something.
    #[error("theory error: {0}")]
    Theory(#[from] scalequiz_theory::Error),

    /// More chords were requested than a scale has degrees.
    #[error("cannot draw {requested} chords from a {available}-note scale")]
    TooManyChords { requested: usize, available: usize },
}

/// Convenience alias for quiz results.
pub type QuizResult<T> = std::result::Result<T, QuizError>;
