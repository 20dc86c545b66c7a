// GNU Affero General Public License v3.0 or later (see LICENSE or https://www.gnu.org/licenses/agpl.txt)
//! Scanner for the `major.minor.patch[-suffix]` grammar
//!
//! Accepted strings are three runs of ASCII digits joined by literal dots,
//! optionally followed by `-` and one or more characters out of
//! `[A-Za-z0-9-]`. After the shape check the string is split on `.` and `-`
//! and must yield three or four segments, so hyphens inside the suffix are
//! rejected with [`ParseError::InvalidSegmentCount`].
//!
//! The parser and the extraction functions both go through [`split`], which
//! keeps their notion of a valid version identical.

use crate::error::ParseError;

/// Borrowed view of the four segments of a validated version string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Segments<'a> {
    pub major: &'a str,
    pub minor: &'a str,
    pub patch: &'a str,
    /// Empty when the version has no suffix
    pub suffix: &'a str,
}

/// Validate `raw` and split it into its segments without allocating
///
/// # Errors
/// [`ParseError::InvalidFormat`] when the shape is wrong,
/// [`ParseError::InvalidSegmentCount`] when the suffix region holds extra `-`
pub(crate) fn split(raw: &str) -> Result<Segments<'_>, ParseError> {
    let invalid = || ParseError::InvalidFormat(raw.to_string());

    let (major, rest) = take_digits(raw).ok_or_else(invalid)?;
    let rest = rest.strip_prefix('.').ok_or_else(invalid)?;
    let (minor, rest) = take_digits(rest).ok_or_else(invalid)?;
    let rest = rest.strip_prefix('.').ok_or_else(invalid)?;
    let (patch, rest) = take_digits(rest).ok_or_else(invalid)?;

    if rest.is_empty() {
        return Ok(Segments {
            major,
            minor,
            patch,
            suffix: "",
        });
    }

    let tail = rest.strip_prefix('-').ok_or_else(invalid)?;
    if tail.is_empty() || !tail.bytes().all(is_suffix_byte) {
        return Err(invalid());
    }

    // Three numeric segments plus one per '-'-separated piece of the tail
    let count = 3 + tail.split('-').count();
    if count != 4 {
        return Err(ParseError::InvalidSegmentCount {
            version: raw.to_string(),
            count,
        });
    }

    Ok(Segments {
        major,
        minor,
        patch,
        suffix: tail,
    })
}

/// Split off the leading run of ASCII digits, `None` if there is none
fn take_digits(s: &str) -> Option<(&str, &str)> {
    let end = s
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(s.len());
    (end > 0).then(|| s.split_at(end))
}

fn is_suffix_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'-'
}
