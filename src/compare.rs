// GNU Affero General Public License v3.0 or later (see LICENSE or https://www.gnu.org/licenses/agpl.txt)
//! Ordering and equality of parsed versions
//!
//! Segments are compared left to right: major, minor, patch, then suffix.
//!
//! Numeric segments are ordered by the magnitude of their digit string
//! without converting them to integers: leading zeros are ignored, a longer
//! remaining run is larger, equal lengths compare digit by digit. So
//! `2022.10.1` is newer than `2022.9.1` and `2022.01.24` equals `2022.1.24`.
//!
//! When the numbers tie, a version without suffix is newer than one with a
//! suffix. Two suffixes compare ASCII case-insensitively, character by
//! character, so `RC2` beats `rc1` but `RC10` sorts below `RC2`.
//!
//! The `Ord`, `PartialOrd`, `PartialEq`, `Eq` and `Hash` impls of
//! [`ParsedVersion`] only delegate to [`compare`].

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use crate::error::ParseError;
use crate::version::ParsedVersion;

/// Order two versions
///
/// # Examples
/// ```
/// use std::cmp::Ordering;
/// use vercheck::{compare, parse};
///
/// let release = parse("2022.01.24").unwrap();
/// let candidate = parse("2022.01.24-RC2").unwrap();
/// assert_eq!(compare(&release, &candidate), Ordering::Greater);
/// ```
#[must_use]
pub fn compare(a: &ParsedVersion, b: &ParsedVersion) -> Ordering {
    compare_numeric(a.major(), b.major())
        .then_with(|| compare_numeric(a.minor(), b.minor()))
        .then_with(|| compare_numeric(a.patch(), b.patch()))
        .then_with(|| compare_suffix(a.suffix(), b.suffix()))
}

/// Whether two versions denote the same release
///
/// Same as `compare(a, b) == Ordering::Equal`.
#[must_use]
pub fn equals(a: &ParsedVersion, b: &ParsedVersion) -> bool {
    compare(a, b) == Ordering::Equal
}

/// Whether `version` is newer than `compare_against`
///
/// An empty string stands for "no version": any concrete version is newer
/// than none, none is never newer than a concrete version, and two empty
/// strings yield `false`. Non-empty inputs must both parse.
///
/// # Errors
/// The [`ParseError`] of the first non-empty input that fails to parse
///
/// # Examples
/// ```
/// use vercheck::is_newer;
///
/// assert_eq!(is_newer("2022.01.24", "2022.01.21"), Ok(true));
/// assert_eq!(is_newer("2022.01.24-RC1", "2022.01.24"), Ok(false));
/// assert_eq!(is_newer("2022.01.24", ""), Ok(true));
/// assert_eq!(is_newer("", "2022.01.24"), Ok(false));
/// assert!(is_newer("latest", "2022.01.24").is_err());
/// ```
pub fn is_newer(version: &str, compare_against: &str) -> Result<bool, ParseError> {
    match (version.is_empty(), compare_against.is_empty()) {
        (false, true) => Ok(true),
        (true, _) => Ok(false),
        (false, false) => {
            let version = ParsedVersion::parse(version)?;
            let compare_against = ParsedVersion::parse(compare_against)?;
            Ok(is_newer_parsed(&version, &compare_against))
        }
    }
}

/// Whether `version` is newer than `compare_against`, for already parsed values
#[must_use]
pub fn is_newer_parsed(version: &ParsedVersion, compare_against: &ParsedVersion) -> bool {
    compare(version, compare_against) == Ordering::Greater
}

/// Newest version of a collection, `None` if it is empty
///
/// Of several equal versions the last one is returned.
///
/// # Examples
/// ```
/// use vercheck::{newest, parse};
///
/// let versions: Vec<_> = ["1.9.0", "1.10.0-rc1", "1.10.0"]
///     .into_iter()
///     .map(|v| parse(v).unwrap())
///     .collect();
/// assert_eq!(newest(&versions).unwrap().to_string(), "1.10.0");
/// ```
pub fn newest<'a, I>(versions: I) -> Option<&'a ParsedVersion>
where
    I: IntoIterator<Item = &'a ParsedVersion>,
{
    versions.into_iter().max_by(|a, b| compare(a, b))
}

impl ParsedVersion {
    /// Method form of [`is_newer_parsed`]
    #[must_use]
    pub fn is_newer_than(&self, other: &Self) -> bool {
        is_newer_parsed(self, other)
    }
}

impl Ord for ParsedVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        compare(self, other)
    }
}

impl PartialOrd for ParsedVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for ParsedVersion {
    fn eq(&self, other: &Self) -> bool {
        equals(self, other)
    }
}

impl Eq for ParsedVersion {}

impl Hash for ParsedVersion {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Must feed the same view compare() looks at
        significant_digits(self.major()).hash(state);
        significant_digits(self.minor()).hash(state);
        significant_digits(self.patch()).hash(state);
        for b in self.suffix().bytes() {
            state.write_u8(b.to_ascii_uppercase());
        }
        state.write_usize(self.suffix().len());
    }
}

/// Compare two digit strings by the number they spell
fn compare_numeric(a: &str, b: &str) -> Ordering {
    let (a, b) = (significant_digits(a), significant_digits(b));
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

fn significant_digits(digits: &str) -> &str {
    digits.trim_start_matches('0')
}

fn compare_suffix(a: &str, b: &str) -> Ordering {
    match (a.is_empty(), b.is_empty()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => a
            .bytes()
            .map(|c| c.to_ascii_uppercase())
            .cmp(b.bytes().map(|c| c.to_ascii_uppercase())),
    }
}
