// GNU Affero General Public License v3.0 or later (see LICENSE or https://www.gnu.org/licenses/agpl.txt)
//! Diagnostic output setup for the vercheck binary
//!
//! Diagnostics go to stderr through `tracing` so stdout only carries
//! command results. The level is WARN unless `--verbose` is given or
//! `VERCHECK_DEBUG` is set to a truthy value; `VERCHECK_LOG_JSON` switches
//! to machine-readable JSON lines.

use std::env::{self, VarError};
use std::error::Error;
use std::io::{self, IsTerminal};

use tracing::level_filters::LevelFilter;

/// Environment variable forcing debug diagnostics
pub const DEBUG_VAR: &str = "VERCHECK_DEBUG";

/// Environment variable selecting JSON formatted diagnostics
pub const JSON_VAR: &str = "VERCHECK_LOG_JSON";

const TRUTHY: [&str; 5] = ["1", "y", "Y", "yes", "true"];

/// Install the global tracing subscriber
///
/// # Errors
/// Returns error if an environment variable is not valid unicode or a
/// subscriber was already installed
pub fn setup(verbose: bool) -> Result<(), Box<dyn Error>> {
    let max_level = if verbose || flag_from_env(DEBUG_VAR)? {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    };

    let builder = tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_max_level(max_level)
        .with_level(true)
        .with_target(false)
        .with_file(false)
        .with_line_number(false);

    let initialized = if flag_from_env(JSON_VAR)? {
        builder.json().try_init()
    } else {
        builder.compact().try_init()
    };

    initialized.map_err(|error| format!("Failed to initialize logging! Cause: {error}").into())
}

fn flag_from_env(name: &str) -> Result<bool, Box<dyn Error>> {
    match env::var(name) {
        Ok(value) => Ok(TRUTHY.contains(&value.as_str())),
        Err(VarError::NotPresent) => Ok(false),
        Err(error) => Err(format!("Failed to read {name}! Cause: {error}").into()),
    }
}
