//! # Identifier grammar
//!
//! Composition of path segments and name tokens into an [`FsId`], plus the canonical
//! string forms of the numeric coordinates that need more than `Display`.
//!
//! ## Overview
//!
//! Every factory in [`crate::factories`] ends in a call to [`compose`]:
//!
//! ```text
//! compose(["cal", "pixels", "SocCal", "lct", "2", "1"], ["50", "60"])
//!     => /cal/pixels/SocCal/lct/2/1/50:60
//! ```
//!
//! Each segment is checked on its way in: it must be non-empty and must not contain a
//! reserved separator (`/` or `:`). Factories only ever pass token strings and decimal
//! numbers, so a segment failure here means a free-form argument (a DV label, a report
//! module name, ...) carried a separator.
//!
//! Enumerated segments are declared with [`token::fsid_token!`], which keeps the wire
//! vocabulary in one table shared by the encoders and the [`parser`](crate::parser).
//!
//! ## See also
//! ------------
//! * [`FsId`] – The composed identifier.
//! * [`token::FsIdToken`] – Trait implemented by every enumerated segment.

pub mod token;

use itertools::Itertools;

use crate::{
    constants::{NAME_SEPARATOR, PATH_SEPARATOR},
    fs_id::FsId,
    fsid_errors::FsIdError,
};

/// Compose an identifier from ordered path segments and name tokens.
///
/// Arguments
/// -----------------
/// * `path_segments`: Namespace segments, without separators (e.g. `["pa", "metrics", "Brightness"]`).
/// * `name_tokens`: Discriminator tokens, without separators (e.g. `["2", "1"]`).
///
/// Return
/// ----------
/// * The identifier `/seg0/seg1/.../tok0:tok1:...`, or [`FsIdError::InvalidSegment`]
///   if a segment is empty, contains a separator, or if either list is empty.
pub fn compose<P, N>(path_segments: P, name_tokens: N) -> Result<FsId, FsIdError>
where
    P: IntoIterator,
    P::Item: AsRef<str>,
    N: IntoIterator,
    N::Item: AsRef<str>,
{
    let path_segments: Vec<String> = path_segments
        .into_iter()
        .map(|segment| segment.as_ref().to_owned())
        .collect();
    let name_tokens: Vec<String> = name_tokens
        .into_iter()
        .map(|token| token.as_ref().to_owned())
        .collect();

    if path_segments.is_empty() {
        return Err(FsIdError::InvalidSegment {
            segment: String::new(),
            reason: "an identifier needs at least one path segment",
        });
    }
    if name_tokens.is_empty() {
        return Err(FsIdError::InvalidSegment {
            segment: String::new(),
            reason: "an identifier needs at least one name token",
        });
    }

    for segment in path_segments.iter().chain(name_tokens.iter()) {
        check_segment(segment)?;
    }

    let path = format!(
        "{PATH_SEPARATOR}{}",
        path_segments.iter().join(&PATH_SEPARATOR.to_string())
    );
    let name = name_tokens.iter().join(&NAME_SEPARATOR.to_string());

    FsId::new(&path, &name)
}

/// Check a single path segment or name token.
pub fn check_segment(segment: &str) -> Result<(), FsIdError> {
    let reason = if segment.is_empty() {
        "empty segment"
    } else if segment.contains(NAME_SEPARATOR) {
        "segment contains the reserved ':'"
    } else if segment.contains(PATH_SEPARATOR) {
        "segment contains '/'"
    } else {
        return Ok(());
    };
    Err(FsIdError::InvalidSegment {
        segment: segment.to_string(),
        reason,
    })
}

/// Reject an empty free-form argument as missing.
///
/// Free-form strings (DV flux labels, report module names, parameter names) have no
/// token table; an empty one is the absent required argument.
pub(crate) fn required<'a>(field: &'static str, value: &'a str) -> Result<&'a str, FsIdError> {
    if value.is_empty() {
        Err(FsIdError::NullRequiredArgument(field))
    } else {
        Ok(value)
    }
}

/// Plain decimal form of a finite `f32`: the shortest digits that read back as the same
/// value, never in exponent form, always with a fractional part.
pub(crate) fn plain_decimal(value: f32) -> String {
    // -0.0 would render with a sign
    let value = if value == 0.0 { 0.0 } else { value };
    // Display never switches to exponent form but drops ".0" on whole numbers
    let text = value.to_string();
    if text.contains('.') {
        text
    } else {
        text + ".0"
    }
}

/// Canonical string of a trial transit pulse duration, in hours.
///
/// The shortest plain decimal that reads back as the same `f32`, always with a fractional
/// part: `3.0`, `1.5`, `12.25`, `0.0000001`.
///
/// Return
/// ----------
/// * The string form, or [`FsIdError::InvalidCoordinate`] for a negative or non-finite pulse.
pub fn format_pulse_duration(hours: f32) -> Result<String, FsIdError> {
    if !hours.is_finite() || hours < 0.0 {
        return Err(FsIdError::invalid_coordinate("pulse_duration", hours));
    }
    Ok(plain_decimal(hours))
}
