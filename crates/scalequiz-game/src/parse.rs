//! Turning a typed guess into a [`Scale`].

use std::sync::LazyLock;

use regex::Regex;
use scalequiz_theory::{Mode, Scale};

/// Everything up to an optional trailing `m` is the note; the `m` marks minor.
#[allow(clippy::expect_used)]
static GUESS_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<note>.*?)(?P<minor>m)?$").expect("guess pattern is a valid regex")
});

/// Parse a guess such as `"C"`, `"F#m"` or `"Bb"`.
///
/// The grammar is permissive: any text is split into a note part and an
/// optional trailing `m`, and only the note part is validated. Returns `None`
/// when the note is not a recognized note name. A trailing line ending is
/// ignored.
pub fn parse_scale(guess: &str) -> Option<Scale> {
    let guess = guess.trim_end_matches(['\n', '\r']);
    let captures = GUESS_PATTERN.captures(guess)?;

    let note = captures.name("note").map_or("", |m| m.as_str());
    let mode = if captures.name("minor").is_some() {
        Mode::Minor
    } else {
        Mode::Major
    };

    match Scale::new(note, mode) {
        Ok(scale) => Some(scale),
        Err(e) => {
            log::debug!("rejected guess {guess:?}: {e}");
            None
        }
    }
}
