//! Validation and decomposition of raw NMEA 0183 log lines.
//!
//! [`validate`](fn.validate.html) is a total function: every malformed
//! shape, short line, or checksum mismatch yields `None` instead of a
//! panic or error. It returns the boundaries it located as a
//! [`ValidSentence`](struct.ValidSentence.html), which is the only way to
//! drive [`decompose`](fn.decompose.html), so decomposition never re-scans
//! the line and cannot mis-slice.

use checksum;
use layout;

/// Talker marker every recognized sentence starts with.
const TALKER_PREFIX: &'static str = "$GP";
/// Byte range of the 3-character sentence identifier, e.g. `GLL`.
const ID_START: usize = 3;
const ID_END: usize = 6;
/// Offset of the first field, one past the comma after the type tag.
const FIELDS_START: usize = 7;

/// Proof that a line passed validation.
///
/// Carries the slices located during the checks: the 5-character type tag
/// and the field body between the fixed header and the `*` delimiter.
#[derive(Debug, Clone, Copy)]
pub struct ValidSentence<'a> {
    sentence_type: &'a str,
    field_body: &'a str,
}

impl<'a> ValidSentence<'a> {
    /// The 5-character sentence type tag, e.g. `"GPGLL"`.
    pub fn sentence_type(&self) -> &'a str {
        self.sentence_type
    }
}

/// A sentence decomposed into its type tag and ordered fields.
///
/// `fields` is never empty, preserves empty fields, and includes the final
/// field even though no comma follows it. The checksum suffix is excluded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecomposedSentence<'a> {
    pub sentence_type: &'a str,
    pub fields: Vec<&'a str>,
}

/// Validates one raw log line, returning its located boundaries.
///
/// The checks, in order: a `*` delimiter exists; the line starts with
/// `$GP`; the identifier is in the recognized set; the field body fits
/// between the header and the delimiter; the XOR reduction of everything
/// between `$` and `*` matches the declared checksum in either hex case.
///
/// The declared checksum is read from `*` to the end of the line, not just
/// two digits, so trailing text after a correct checksum fails the match.
pub fn validate(line: &str) -> Option<ValidSentence> {
    let star = line.find('*')?;

    if line.get(..ID_START)? != TALKER_PREFIX {
        return None;
    }
    if !layout::recognized_identifier(line.get(ID_START..ID_END)?) {
        return None;
    }

    // `get` rejects star < FIELDS_START along with any non-boundary index.
    let field_body = line.get(FIELDS_START..star)?;

    let body = line.get(1..star)?;
    let declared = line.get(star + 1..)?;
    if !checksum::matches_declared(checksum::xor_reduce(body), declared) {
        return None;
    }

    Some(ValidSentence {
        sentence_type: &line[1..ID_END],
        field_body,
    })
}

/// True when `line` is a structurally sound, checksummed, recognized
/// sentence. Never panics.
pub fn is_valid(line: &str) -> bool {
    validate(line).is_some()
}

/// Splits a validated sentence into its type tag and ordered fields.
///
/// Infallible: the boundaries were already located by `validate`.
pub fn decompose(valid: ValidSentence) -> DecomposedSentence {
    DecomposedSentence {
        sentence_type: valid.sentence_type,
        fields: valid.field_body.split(',').collect(),
    }
}
