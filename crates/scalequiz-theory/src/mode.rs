use std::fmt;

/// The two diatonic modes the quiz draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    Major,
    Minor,
}

impl Mode {
    /// Both modes, in a fixed order.
    pub const ALL: [Mode; 2] = [Mode::Major, Mode::Minor];

    /// Canonical lowercase name, also the suffix of raw chord names.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Major => "major",
            Self::Minor => "minor",
        }
    }

    /// Semitone offsets of the seven degrees above the root.
    #[must_use]
    pub const fn intervals(self) -> [i32; 7] {
        match self {
            Self::Major => [0, 2, 4, 5, 7, 9, 11],
            Self::Minor => [0, 2, 3, 5, 7, 8, 10],
        }
    }

    /// The mode of the relative key.
    #[must_use]
    pub const fn relative(self) -> Self {
        match self {
            Self::Major => Self::Minor,
            Self::Minor => Self::Major,
        }
    }

    #[must_use]
    pub const fn is_minor(self) -> bool {
        matches!(self, Self::Minor)
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_names() {
        assert_eq!(Mode::Major.as_str(), "major");
        assert_eq!(Mode::Minor.to_string(), "minor");
    }

    #[test]
    fn test_mode_relative() {
        assert_eq!(Mode::Major.relative(), Mode::Minor);
        assert_eq!(Mode::Minor.relative(), Mode::Major);
    }

    #[test]
    fn test_intervals_span_an_octave() {
        for mode in Mode::ALL {
            let intervals = mode.intervals();
            assert_eq!(intervals[0], 0);
            assert!(intervals.windows(2).all(|w| w[0] < w[1]));
            assert!(intervals[6] < 12);
        }
    }
}
