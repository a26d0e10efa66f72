use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid note name: {0:?}")]
    InvalidNote(String),

    #[error("scale degree out of range: {0} (expected 0-6)")]
    DegreeOutOfRange(usize),

    #[error("could not detect a chord from notes: {0}")]
    UndetectedChord(String),
}

pub type Result<T> = std::result::Result<T, Error>;
