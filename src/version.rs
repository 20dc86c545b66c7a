// GNU Affero General Public License v3.0 or later (see LICENSE or https://www.gnu.org/licenses/agpl.txt)
//! Parsed `major.minor.patch[-suffix]` versions
//!
//! [`ParsedVersion`] keeps every segment as the string it was written as,
//! so arbitrarily long digit runs never overflow and rendering the value
//! gives back the exact input. Ordering lives in [`crate::compare`].

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseError;
use crate::grammar::{self, Segments};

/// A validated version string split into its four segments
///
/// Construct with [`ParsedVersion::parse`], `str::parse` or `TryFrom`.
/// Serializes as the plain version string.
///
/// # Examples
/// ```
/// use vercheck::ParsedVersion;
///
/// let version: ParsedVersion = "2022.01.24-RC2".parse().unwrap();
/// assert_eq!(version.major(), "2022");
/// assert_eq!(version.minor(), "01");
/// assert_eq!(version.patch(), "24");
/// assert_eq!(version.suffix(), "RC2");
/// assert_eq!(version.to_string(), "2022.01.24-RC2");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ParsedVersion {
    major: String,
    minor: String,
    patch: String,
    suffix: String,
}

impl ParsedVersion {
    /// Parse a version string
    ///
    /// # Errors
    /// [`ParseError::InvalidFormat`] if `raw` does not match the grammar,
    /// [`ParseError::InvalidSegmentCount`] if it does not split into 3 or 4
    /// segments
    pub fn parse(raw: &str) -> Result<Self, ParseError> {
        grammar::split(raw).map(Self::from_segments)
    }

    #[must_use]
    pub fn major(&self) -> &str {
        &self.major
    }

    #[must_use]
    pub fn minor(&self) -> &str {
        &self.minor
    }

    #[must_use]
    pub fn patch(&self) -> &str {
        &self.patch
    }

    /// Suffix as written, empty when there is none
    #[must_use]
    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    fn from_segments(segments: Segments<'_>) -> Self {
        Self {
            major: segments.major.to_owned(),
            minor: segments.minor.to_owned(),
            patch: segments.patch.to_owned(),
            suffix: segments.suffix.to_owned(),
        }
    }

    /// Whether the version carries a suffix (a pre-release or candidate build)
    ///
    /// An unsuffixed release always orders above suffixed builds of the same
    /// `major.minor.patch`.
    #[must_use]
    pub fn is_prerelease(&self) -> bool {
        !self.suffix.is_empty()
    }
}

impl Display for ParsedVersion {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if self.is_prerelease() {
            write!(f, "-{}", self.suffix)?;
        }
        Ok(())
    }
}

impl FromStr for ParsedVersion {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for ParsedVersion {
    type Error = ParseError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl TryFrom<String> for ParsedVersion {
    type Error = ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<ParsedVersion> for String {
    fn from(version: ParsedVersion) -> Self {
        version.to_string()
    }
}

/// Parse a version string
///
/// Free-function form of [`ParsedVersion::parse`].
///
/// # Errors
/// See [`ParsedVersion::parse`]
///
/// # Examples
/// ```
/// use vercheck::{ParseError, parse};
///
/// assert!(parse("2022.01.24").is_ok());
/// assert_eq!(
///     parse("1.2"),
///     Err(ParseError::InvalidFormat("1.2".to_string()))
/// );
/// ```
pub fn parse(raw: &str) -> Result<ParsedVersion, ParseError> {
    ParsedVersion::parse(raw)
}
