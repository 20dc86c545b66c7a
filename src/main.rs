// GNU Affero General Public License v3.0 or later (see LICENSE or https://www.gnu.org/licenses/agpl.txt)
//! Release Version Checker (vercheck) - Main Application
//!
//! Command-line front end over the vercheck library, meant for scripts and
//! release tooling that need to decide whether one version is newer than
//! another.
//!
//! The application supports:
//! - Printing the segments of a version, as text or JSON
//! - Comparing two versions
//! - Answering "is this newer than what is installed"
//! - Extracting a single segment
//! - Sorting versions and picking the newest one

mod cli;
mod logging;

use std::cmp::Ordering;
use std::error::Error;
use std::process::exit;

use clap::Parser;
use serde_json::json;
use tracing::debug;

use cli::{Cli, Command, Segment};
use vercheck::{
    ParsedVersion, extract_major, extract_minor, extract_patch, extract_suffix, is_newer, newest,
};

/// Main application entry point
///
/// Parses command line arguments and dispatches to the matching command.
fn main() {
    let cli = Cli::parse();

    if let Err(e) = logging::setup(cli.verbose) {
        eprintln!("{e}");
        exit(1);
    }

    let result = match cli.command {
        Command::Parse { input, json } => cmd_parse(&input, json),
        Command::Compare { left, right } => cmd_compare(&left, &right),
        Command::Newer { candidate, against } => {
            cmd_newer(&candidate, against.as_deref().unwrap_or_default())
        }
        Command::Extract { segment, input } => cmd_extract(segment, &input),
        Command::Sort { reverse, inputs } => cmd_sort(&inputs, reverse),
        Command::Latest { inputs } => cmd_latest(&inputs),
    };

    // Handle errors by printing to stderr and exiting with non-zero status
    if let Err(e) = result {
        eprintln!("vercheck: {e}");
        exit(1);
    }
}

// =============================================================================
// Command Implementation Functions
// =============================================================================

/// Print the segments of a single version
///
/// # Arguments
/// * `input` - Version string to parse
/// * `json` - Print a JSON object instead of `name: value` lines
fn cmd_parse(input: &str, json: bool) -> Result<(), Box<dyn Error>> {
    let version = ParsedVersion::parse(input)?;
    debug!(%version, prerelease = version.is_prerelease(), "Parsed version");

    if json {
        let object = json!({
            "version": version,
            "major": version.major(),
            "minor": version.minor(),
            "patch": version.patch(),
            "suffix": version.suffix(),
            "prerelease": version.is_prerelease(),
        });
        println!("{}", serde_json::to_string_pretty(&object)?);
    } else {
        println!("major: {}", version.major());
        println!("minor: {}", version.minor());
        println!("patch: {}", version.patch());
        println!("suffix: {}", version.suffix());
    }
    Ok(())
}

/// Print `greater`, `less` or `equal` for `left` relative to `right`
fn cmd_compare(left: &str, right: &str) -> Result<(), Box<dyn Error>> {
    let left = ParsedVersion::parse(left)?;
    let right = ParsedVersion::parse(right)?;

    let word = match left.cmp(&right) {
        Ordering::Greater => "greater",
        Ordering::Less => "less",
        Ordering::Equal => "equal",
    };
    debug!(%left, %right, result = word, "Compared versions");
    println!("{word}");
    Ok(())
}

/// Print whether `candidate` is newer than `against`
///
/// An empty `against` means nothing is installed yet.
fn cmd_newer(candidate: &str, against: &str) -> Result<(), Box<dyn Error>> {
    if against.is_empty() {
        debug!("No installed version given, any concrete version is newer");
    }

    let newer = is_newer(candidate, against)?;
    debug!(candidate, against, newer, "Checked for newer version");
    println!("{newer}");
    Ok(())
}

/// Print one segment of `input`
fn cmd_extract(segment: Segment, input: &str) -> Result<(), Box<dyn Error>> {
    let value = match segment {
        Segment::Major => extract_major(input)?,
        Segment::Minor => extract_minor(input)?,
        Segment::Patch => extract_patch(input)?,
        Segment::Suffix => extract_suffix(input)?,
    };
    println!("{value}");
    Ok(())
}

/// Print all versions in ascending order, or descending with `reverse`
///
/// Versions that compare equal keep their input order.
fn cmd_sort(inputs: &[String], reverse: bool) -> Result<(), Box<dyn Error>> {
    let mut versions = parse_all(inputs)?;
    versions.sort();
    if reverse {
        versions.reverse();
    }

    for version in versions {
        println!("{version}");
    }
    Ok(())
}

/// Print the newest of the given versions
fn cmd_latest(inputs: &[String]) -> Result<(), Box<dyn Error>> {
    let versions = parse_all(inputs)?;
    let latest = newest(&versions).ok_or("No versions given")?;
    println!("{latest}");
    Ok(())
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Parse every input, failing on the first invalid one
fn parse_all(inputs: &[String]) -> Result<Vec<ParsedVersion>, Box<dyn Error>> {
    debug!(count = inputs.len(), "Parsing versions");
    Ok(inputs
        .iter()
        .map(|input| ParsedVersion::parse(input))
        .collect::<Result<_, _>>()?)
}
