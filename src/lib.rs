// GNU Affero General Public License v3.0 or later (see LICENSE or https://www.gnu.org/licenses/agpl.txt)
//! Release Version Checking Library
//!
//! This library parses version identifiers of the form
//! `major.minor.patch[-suffix]`, orders them, and answers whether a
//! candidate release is newer than an installed one. Single segments can be
//! pulled out of a raw string without building the full parsed value.

pub mod compare;
pub mod error;
pub mod extract;
mod grammar;
pub mod version;

// Re-export commonly used items at the crate root for convenience
pub use compare::{compare, equals, is_newer, is_newer_parsed, newest};
pub use error::ParseError;
pub use extract::{extract_major, extract_minor, extract_patch, extract_suffix};
pub use version::{ParsedVersion, parse};
