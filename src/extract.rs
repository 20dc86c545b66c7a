// GNU Affero General Public License v3.0 or later (see LICENSE or https://www.gnu.org/licenses/agpl.txt)
//! Single-segment accessors on raw version strings
//!
//! Each function validates the whole string exactly like
//! [`ParsedVersion::parse`](crate::ParsedVersion::parse) and returns one
//! segment as a slice of the input, without building a parsed value.

use crate::error::ParseError;
use crate::grammar;

/// Major segment of a version string
///
/// # Errors
/// Same as [`crate::parse`]
///
/// # Examples
/// ```
/// use vercheck::extract_major;
/// assert_eq!(extract_major("2022.01.24"), Ok("2022"));
/// assert!(extract_major("2022.01").is_err());
/// ```
pub fn extract_major(version: &str) -> Result<&str, ParseError> {
    grammar::split(version).map(|segments| segments.major)
}

/// Minor segment of a version string
///
/// # Errors
/// Same as [`crate::parse`]
///
/// # Examples
/// ```
/// use vercheck::extract_minor;
/// assert_eq!(extract_minor("2022.01.24"), Ok("01"));
/// ```
pub fn extract_minor(version: &str) -> Result<&str, ParseError> {
    grammar::split(version).map(|segments| segments.minor)
}

/// Patch segment of a version string
///
/// # Errors
/// Same as [`crate::parse`]
///
/// # Examples
/// ```
/// use vercheck::extract_patch;
/// assert_eq!(extract_patch("2022.01.24-alpha"), Ok("24"));
/// ```
pub fn extract_patch(version: &str) -> Result<&str, ParseError> {
    grammar::split(version).map(|segments| segments.patch)
}

/// Suffix of a version string, empty if it has none
///
/// # Errors
/// Same as [`crate::parse`]
///
/// # Examples
/// ```
/// use vercheck::extract_suffix;
/// assert_eq!(extract_suffix("2022.01.24-alpha"), Ok("alpha"));
/// assert_eq!(extract_suffix("2022.01.24"), Ok(""));
/// ```
pub fn extract_suffix(version: &str) -> Result<&str, ParseError> {
    grammar::split(version).map(|segments| segments.suffix)
}
