//! Utility modules for common functionality
//!
//! Provides reusable utilities for file operations, process execution,
//! credential prompts, and size formatting.

pub mod format;
pub mod fs;
pub mod process;
pub mod prompt;

pub use format::format_size;
pub use fs::FileSystemUtils;
pub use process::{CommandRunner, ProcessRunner};
pub use prompt::{CredentialProvider, TerminalPrompt};
