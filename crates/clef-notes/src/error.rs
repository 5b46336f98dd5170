//! Error types for note parsing and conversion.

use thiserror::Error;

/// Top-level error type for note codec operations.
///
/// The three variants are distinct failure contracts and are never folded
/// into one another: a malformed spelling is not a range problem, and an
/// unrecognized preference token is not a malformed spelling.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NoteError {
    /// The string does not parse as a note spelling.
    #[error("unknown note format '{0}'")]
    InvalidNoteFormat(String),

    /// A pitch class integer outside the 0-11 range.
    #[error("int not in range 0-11: {0}")]
    OutOfRange(i32),

    /// An accidental preference token other than "#" or "b".
    #[error("'{0}' not valid as accidental preference")]
    InvalidAccidentalPreference(String),
}
