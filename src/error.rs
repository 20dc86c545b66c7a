// GNU Affero General Public License v3.0 or later (see LICENSE or https://www.gnu.org/licenses/agpl.txt)
//! Errors reported when a string is not a `major.minor.patch[-suffix]` version

use thiserror::Error as ThisError;

/// Reason a version string was rejected
///
/// Both variants carry the rejected input so callers can report it as-is.
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum ParseError {
    /// The string does not match `DIGITS.DIGITS.DIGITS[-SUFFIX]`
    #[error("version {0} is not a valid version number")]
    InvalidFormat(String),
    /// The string matched the grammar but did not split into 3 or 4 segments
    #[error("got {count} segments for {version} (should be 3 or 4)")]
    InvalidSegmentCount { version: String, count: usize },
}

impl ParseError {
    /// The rejected input
    #[must_use]
    pub fn version(&self) -> &str {
        match self {
            Self::InvalidFormat(version) | Self::InvalidSegmentCount { version, .. } => version,
        }
    }
}
