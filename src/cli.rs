// GNU Affero General Public License v3.0 or later (see LICENSE or https://www.gnu.org/licenses/agpl.txt)
// CLI argument definitions for vercheck
//
// Separated from main.rs so that build.rs can include this file
// to generate the man page via clap_mangen.

use clap::{Parser, Subcommand, ValueEnum};

/// CLI argument parser
#[derive(Parser)]
#[command(
    name = "vercheck",
    version,
    about = "Parse and compare major.minor.patch[-suffix] versions",
    disable_version_flag = true
)]
#[command(arg(clap::Arg::new("version").long("version").action(clap::ArgAction::Version).help("Print version")))]
pub struct Cli {
    /// Make the operation more talkative
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print the segments of a version
    Parse {
        #[arg(value_name = "VERSION")]
        input: String,

        /// Print the segments as a JSON object
        #[arg(long)]
        json: bool,
    },

    /// Compare two versions and print greater, less or equal
    Compare {
        #[arg(value_name = "A")]
        left: String,

        #[arg(value_name = "B")]
        right: String,
    },

    /// Print whether VERSION is newer than AGAINST (missing or empty AGAINST means none installed)
    Newer {
        #[arg(value_name = "VERSION")]
        candidate: String,

        #[arg(value_name = "AGAINST")]
        against: Option<String>,
    },

    /// Print a single segment of a version
    Extract {
        #[arg(value_enum, value_name = "SEGMENT")]
        segment: Segment,

        #[arg(value_name = "VERSION")]
        input: String,
    },

    /// Print versions from oldest to newest
    Sort {
        /// Print from newest to oldest
        #[arg(short, long)]
        reverse: bool,

        #[arg(value_name = "VERSION", required = true)]
        inputs: Vec<String>,
    },

    /// Print the newest of the given versions
    Latest {
        #[arg(value_name = "VERSION", required = true)]
        inputs: Vec<String>,
    },
}

/// Version segment selectable with `extract`
#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Segment {
    Major,
    Minor,
    Patch,
    Suffix,
}
