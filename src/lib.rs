//! # Game Packager
//!
//! Release automation for a game project: increments the build-number
//! counter in the version header and assembles platform release folders
//! for upload through SteamPipe.
//!
//! ## Features
//!
//! - Version header parsing and build-number incrementing
//! - Include/exclude file selection when assembling the release payload
//! - In-place regex patching of the Steam build script
//! - Optional steamcmd upload with interactive credential prompts
//!
//! ## Example
//!
//! ```no_run
//! use game_packager::core::version::VersionParser;
//!
//! let parser = VersionParser::new()?;
//! let version = parser.parse("#define GAME_VERSION_MAJOR 1\n#define GAME_VERSION_MINOR 2\n#define GAME_VERSION_BUILD 3\n")?;
//! println!("Packaging version {}", version);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod utils;

use anyhow::Result;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize logging with appropriate verbosity
pub fn setup_logging(debug: bool) -> Result<()> {
    let filter = if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_level(true)
                .compact(),
        )
        .with(filter)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}
