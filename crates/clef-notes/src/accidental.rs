//! Accidental preference for decoding pitch classes to note names.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::NoteError;

/// Which accidental to prefer when a pitch class has no natural spelling.
///
/// Decoding an integer pitch class to text needs a spelling policy: pitch
/// class 3 is `D#` under a sharp preference and `Eb` under a flat one.
/// Naturals spell the same either way. `Sharp` is the default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Accidentals {
    /// Spell non-naturals with a trailing '#' (pitch class 3 -> "D#").
    #[default]
    Sharp,
    /// Spell non-naturals with a trailing 'b' (pitch class 3 -> "Eb").
    Flat,
}

impl Accidentals {
    /// Returns the accidental token character, `'#'` or `'b'`.
    pub fn token(&self) -> char {
        match self {
            Accidentals::Sharp => '#',
            Accidentals::Flat => 'b',
        }
    }
}

impl std::fmt::Display for Accidentals {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.token())
    }
}

impl FromStr for Accidentals {
    type Err = NoteError;

    /// Parses the accidental token itself: exactly `"#"` or `"b"`.
    ///
    /// # Examples
    /// ```
    /// use clef_notes::Accidentals;
    ///
    /// assert_eq!("#".parse::<Accidentals>(), Ok(Accidentals::Sharp));
    /// assert_eq!("b".parse::<Accidentals>(), Ok(Accidentals::Flat));
    /// assert!("x".parse::<Accidentals>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "#" => Ok(Accidentals::Sharp),
            "b" => Ok(Accidentals::Flat),
            _ => Err(NoteError::InvalidAccidentalPreference(s.to_string())),
        }
    }
}
