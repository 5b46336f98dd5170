//! Note name and pitch class conversion.
//!
//! This module is the foundation of the toolkit. It handles conversions
//! between note spellings (`"C"`, `"C#"`, `"Gbb"`) and integer pitch classes
//! (0-11, C = 0), and the accidental algebra built on top of them: augment,
//! diminish, reduction of excess accidentals, and enharmonic comparison.
//!
//! A spelling is a capital letter A-G followed by any number of `'#'` and
//! `'b'` tokens. The spelling is never length-limited: `"B#####bbbb##"` is
//! syntactically fine and simply denotes B plus a net offset.

use crate::accidental::Accidentals;
use crate::error::NoteError;

/// Base pitch class for each natural letter (C=0, D=2, E=4, F=5, G=7, A=9, B=11).
const NATURAL_BASES: [(char, i32); 7] = [
    ('C', 0),
    ('D', 2),
    ('E', 4),
    ('F', 5),
    ('G', 7),
    ('A', 9),
    ('B', 11),
];

/// Natural letters in circle-of-fifths order.
///
/// Reference order for the spelling heuristics of the higher toolkit layers
/// (keys, scales). Nothing in this crate consumes it.
pub const FIFTHS: [char; 7] = ['F', 'C', 'G', 'D', 'A', 'E', 'B'];

/// Canonical sharp-biased spellings for pitch classes 0-11.
const NOTES_SHARP: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

/// Canonical flat-biased spellings for pitch classes 0-11.
const NOTES_FLAT: [&str; 12] = [
    "C", "Db", "D", "Eb", "E", "F", "Gb", "G", "Ab", "A", "Bb", "B",
];

/// A validated spelling, split into its natural letter and accidental run.
struct Spelling {
    letter: char,
    /// Base pitch class of the letter, 0-11.
    base: i32,
    /// Net signed accidental offset, '#' = +1 and 'b' = -1, unreduced.
    offset: i32,
}

/// Parse a spelling into letter, base value and net offset.
///
/// Returns `None` when the string violates the grammar: empty, first
/// character not a capital A-G, or anything but '#'/'b' after it.
fn parse_spelling(note: &str) -> Option<Spelling> {
    let mut chars = note.chars();
    let letter = chars.next()?;
    let base = NATURAL_BASES
        .iter()
        .find(|(c, _)| *c == letter)
        .map(|(_, v)| *v)?;

    let mut offset = 0;
    for c in chars {
        match c {
            '#' => offset += 1,
            'b' => offset -= 1,
            _ => return None,
        }
    }
    Some(Spelling {
        letter,
        base,
        offset,
    })
}

fn validated(note: &str) -> Result<Spelling, NoteError> {
    parse_spelling(note).ok_or_else(|| NoteError::InvalidNoteFormat(note.to_string()))
}

/// Return `true` if `note` is in a recognised format.
///
/// Valid means: non-empty, a capital letter A-G first, then only `'#'` and
/// `'b'` tokens. Case matters; `"c"` is not a note.
///
/// # Examples
/// ```
/// use clef_notes::is_valid_note;
///
/// assert!(is_valid_note("C"));
/// assert!(is_valid_note("Gbb"));
/// assert!(is_valid_note("B#####bbbb##"));
/// assert!(!is_valid_note("c"));
/// assert!(!is_valid_note("E*"));
/// ```
pub fn is_valid_note(note: &str) -> bool {
    parse_spelling(note).is_some()
}

/// Convert a note spelling to a pitch class integer in the range 0-11.
///
/// Accidentals are summed left to right on top of the letter's base value
/// and the result is reduced with a true mathematical modulo, so deeply
/// flattened spellings still land in 0-11.
///
/// # Errors
/// [`NoteError::InvalidNoteFormat`] if the spelling violates the grammar.
///
/// # Examples
/// ```
/// use clef_notes::note_to_int;
///
/// assert_eq!(note_to_int("C"), Ok(0));
/// assert_eq!(note_to_int("C####"), Ok(4));
/// assert_eq!(note_to_int("Cb"), Ok(11));
/// ```
pub fn note_to_int(note: &str) -> Result<i32, NoteError> {
    let s = validated(note)?;
    Ok((s.base + s.offset).rem_euclid(12))
}

/// Convert a pitch class integer in the range 0-11 to a note spelling.
///
/// Every pitch class has exactly one canonical spelling per preference:
/// naturals spell as themselves in both tables, the other five classes get
/// a single sharp or a single flat.
///
/// # Errors
/// [`NoteError::OutOfRange`] if `note_int` is not in 0-11.
///
/// # Examples
/// ```
/// use clef_notes::{int_to_note, Accidentals};
///
/// assert_eq!(int_to_note(0, Accidentals::Sharp), Ok("C"));
/// assert_eq!(int_to_note(3, Accidentals::Sharp), Ok("D#"));
/// assert_eq!(int_to_note(3, Accidentals::Flat), Ok("Eb"));
/// ```
pub fn int_to_note(note_int: i32, accidentals: Accidentals) -> Result<&'static str, NoteError> {
    if !(0..12).contains(&note_int) {
        return Err(NoteError::OutOfRange(note_int));
    }
    let table = match accidentals {
        Accidentals::Sharp => &NOTES_SHARP,
        Accidentals::Flat => &NOTES_FLAT,
    };
    Ok(table[note_int as usize])
}

/// Test whether two spellings are enharmonic, i.e. they sound the same.
///
/// # Errors
/// [`NoteError::InvalidNoteFormat`] if either spelling is malformed.
///
/// # Examples
/// ```
/// use clef_notes::is_enharmonic;
///
/// assert_eq!(is_enharmonic("B#", "C"), Ok(true));
/// assert_eq!(is_enharmonic("Ab", "G#"), Ok(true));
/// assert_eq!(is_enharmonic("C", "D"), Ok(false));
/// ```
pub fn is_enharmonic(note1: &str, note2: &str) -> Result<bool, NoteError> {
    Ok(note_to_int(note1)? == note_to_int(note2)?)
}

/// Reduce any excess accidentals to a canonical spelling.
///
/// The result is always a table spelling: a bare letter or a letter with a
/// single accidental, enharmonic with the input. Which table is used depends
/// on the net direction of the run: if the accidentals moved the value up
/// from the letter's base (or left it there), the sharp table is used;
/// if they moved it down, the flat table. The comparison happens before the
/// modulo so the direction survives octave wraparound; ties go to sharps.
///
/// # Errors
/// [`NoteError::InvalidNoteFormat`] if the spelling violates the grammar.
///
/// # Examples
/// ```
/// use clef_notes::reduce_accidentals;
///
/// assert_eq!(reduce_accidentals("C####").as_deref(), Ok("E"));
/// assert_eq!(reduce_accidentals("Abb").as_deref(), Ok("G"));
/// ```
pub fn reduce_accidentals(note: &str) -> Result<String, NoteError> {
    let s = validated(note)?;
    let val = s.base + s.offset;
    let bias = if val >= s.base {
        Accidentals::Sharp
    } else {
        Accidentals::Flat
    };
    Ok(int_to_note(val.rem_euclid(12), bias)?.to_string())
}

/// Remove redundant sharps and flats without renaming the letter.
///
/// Sharps cancel against flats; the surviving net offset is re-applied to
/// the bare letter as a minimal single-direction run. Unlike
/// [`reduce_accidentals`] this never crosses to a different letter, so
/// `"C##"` stays `"C##"` rather than becoming `"D"`.
///
/// # Errors
/// [`NoteError::InvalidNoteFormat`] if the spelling violates the grammar.
///
/// # Examples
/// ```
/// use clef_notes::remove_redundant_accidentals;
///
/// assert_eq!(remove_redundant_accidentals("C##b").as_deref(), Ok("C#"));
/// assert_eq!(remove_redundant_accidentals("Eb##b").as_deref(), Ok("E"));
/// ```
pub fn remove_redundant_accidentals(note: &str) -> Result<String, NoteError> {
    let s = validated(note)?;
    let mut result = s.letter.to_string();
    for _ in 0..s.offset.abs() {
        result = if s.offset > 0 {
            augment_spelling(&result)
        } else {
            diminish_spelling(&result)
        };
    }
    Ok(result)
}

/// Augment a spelling: raise it by one semitone in text form.
///
/// A trailing flat is stripped, otherwise a sharp is appended. Only the
/// final character is inspected.
///
/// # Errors
/// [`NoteError::InvalidNoteFormat`] if the spelling violates the grammar.
///
/// # Examples
/// ```
/// use clef_notes::augment;
///
/// assert_eq!(augment("C").as_deref(), Ok("C#"));
/// assert_eq!(augment("Cb").as_deref(), Ok("C"));
/// ```
pub fn augment(note: &str) -> Result<String, NoteError> {
    validated(note)?;
    Ok(augment_spelling(note))
}

/// Diminish a spelling: lower it by one semitone in text form.
///
/// Exact inverse of [`augment`]: a trailing sharp is stripped, otherwise a
/// flat is appended.
///
/// # Errors
/// [`NoteError::InvalidNoteFormat`] if the spelling violates the grammar.
///
/// # Examples
/// ```
/// use clef_notes::diminish;
///
/// assert_eq!(diminish("C#").as_deref(), Ok("C"));
/// assert_eq!(diminish("C").as_deref(), Ok("Cb"));
/// ```
pub fn diminish(note: &str) -> Result<String, NoteError> {
    validated(note)?;
    Ok(diminish_spelling(note))
}

/// Augment an already-validated spelling. Skips format checking.
fn augment_spelling(note: &str) -> String {
    match note.strip_suffix('b') {
        Some(stripped) => stripped.to_string(),
        None => format!("{note}#"),
    }
}

/// Diminish an already-validated spelling. Skips format checking.
fn diminish_spelling(note: &str) -> String {
    match note.strip_suffix('#') {
        Some(stripped) => stripped.to_string(),
        None => format!("{note}b"),
    }
}
