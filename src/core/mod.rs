//! Core functionality for release packaging
//!
//! Contains the main logic for version parsing, file selection, the
//! filtered tree copy, and build-script patching.

pub mod copier;
pub mod matcher;
pub mod patch;
pub mod script;
pub mod upload;
pub mod version;

pub use copier::{CopyStats, TreeCopier};
pub use script::{BuildScriptFields, BuildScriptPatcher};
pub use upload::SteamUploader;
pub use version::{Version, VersionParser};
