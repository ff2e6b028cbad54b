//! Command-line argument parsing and validation

use clap::{Parser, Subcommand, ValueEnum};
use std::fmt;
use std::path::PathBuf;

/// Game Packager - assembles release builds and uploads them through SteamPipe
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(name = "packager")]
pub struct Args {
    /// Enable debug output
    #[arg(long, global = true)]
    pub debug: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Increment the build number in a version header file
    Increment {
        /// Path to the version header to patch
        file: PathBuf,
    },

    /// Assemble a release folder and upload it through SteamPipe
    Package {
        /// The type of build to do
        #[arg(value_enum)]
        build_type: BuildType,

        /// Dry run: assemble and patch but skip the upload step
        #[arg(short = 't', long)]
        test: bool,

        /// The username to use when logging in to Steam
        #[arg(short = 'u', long)]
        username: Option<String>,
    },
}

/// The kind of build being packaged
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildType {
    /// Internal build with developer files included
    Developer,
    /// Public release build
    Release,
    /// Demo build with the demo binaries and no shared depot
    Demo,
}

impl BuildType {
    /// Lowercase name, used for the output folder suffix
    pub fn name(self) -> &'static str {
        match self {
            Self::Developer => "developer",
            Self::Release => "release",
            Self::Demo => "demo",
        }
    }

    /// Capitalized name, used in the build description
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Developer => "Developer",
            Self::Release => "Release",
            Self::Demo => "Demo",
        }
    }
}

impl fmt::Display for BuildType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Parse command line arguments
pub fn parse_args() -> Args {
    Args::parse()
}
