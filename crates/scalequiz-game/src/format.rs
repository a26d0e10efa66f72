//! Rendering chord names, scale names and guesses.

use scalequiz_theory::{Mode, Scale};

/// Compact chord notation: `"Cmajor"` becomes `"C"`, `"Aminor"` becomes `"Am"`.
///
/// Names that end in neither mode literal (such as `"Bdim"`) are returned
/// unchanged.
pub fn format_chord(chord: &str) -> String {
    if let Some(stem) = chord.strip_suffix(Mode::Minor.as_str()) {
        return format!("{stem}m");
    }
    if let Some(stem) = chord.strip_suffix(Mode::Major.as_str()) {
        return stem.to_string();
    }
    chord.to_string()
}

/// Display name without octave or the trailing word "scale".
pub fn scale_name(scale: &Scale) -> String {
    let name = scale.get_scale_name(false);
    match name.strip_suffix(" scale") {
        Some(stripped) => stripped.to_string(),
        None => name,
    }
}

/// The text a player would type to name `scale`: `"C"` or `"Cm"`.
pub fn format_as_guess(scale: &Scale) -> String {
    if scale.mode().is_minor() {
        format!("{}m", scale.root())
    } else {
        scale.root().to_string()
    }
}
