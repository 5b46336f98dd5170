//! Clef Note Codec Library
//!
//! This crate is the foundation of the clef music-theory toolkit. It converts
//! between textual note spellings and integer pitch classes, and normalizes
//! accidental runs, so the higher layers (scales, chords, intervals) can do
//! simple modular arithmetic instead of string handling.
//!
//! # Overview
//!
//! Two representations, one codec:
//!
//! - **Note spelling**: a capital letter A-G followed by any number of `'#'`
//!   (sharp, +1 semitone) and `'b'` (flat, -1 semitone) tokens.
//! - **Pitch class**: an integer 0-11 with C = 0, one per equal-tempered
//!   semitone class. Enharmonic spellings (`"C##"`, `"D"`) share one pitch
//!   class; decoding back to text therefore takes an [`Accidentals`]
//!   preference.
//!
//! Every operation is a pure function; malformed input is reported through
//! [`NoteError`], never patched up.
//!
//! # Example
//!
//! ```
//! use clef_notes::{note_to_int, int_to_note, reduce_accidentals, Accidentals};
//!
//! assert_eq!(note_to_int("C####"), Ok(4));
//! assert_eq!(int_to_note(3, Accidentals::Flat), Ok("Eb"));
//! assert_eq!(reduce_accidentals("G##").as_deref(), Ok("A"));
//! ```
//!
//! # Modules
//!
//! - [`accidental`]: the sharp/flat decode preference
//! - [`error`]: the codec's error type
//! - [`note`]: conversion, normalization and enharmonic comparison

pub mod accidental;
pub mod error;
pub mod note;

// Re-export the whole codec surface at the crate root
pub use accidental::Accidentals;
pub use error::NoteError;
pub use note::{
    augment, diminish, int_to_note, is_enharmonic, is_valid_note, note_to_int,
    reduce_accidentals, remove_redundant_accidentals, FIFTHS,
};
