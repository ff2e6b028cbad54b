//! Process execution utilities
//!
//! The `CommandRunner` trait is the seam the upload step goes through, so
//! tests never spawn steamcmd. `ProcessRunner` is the real implementation.

use crate::error::{PackagerError, Result};
use std::process::{Command, Stdio};
use tracing::{debug, info};

/// Runs external commands on behalf of the packager
pub trait CommandRunner {
    /// Run a command to completion, failing on a nonzero exit status
    fn run(&self, command: &str, args: &[&str]) -> Result<()>;
}

/// Command runner that spawns real processes with inherited stdio
#[derive(Debug)]
pub struct ProcessRunner {
    debug: bool,
}

impl ProcessRunner {
    /// Create a new process runner
    #[must_use]
    pub const fn new(debug: bool) -> Self {
        Self { debug }
    }

    /// Check if a command exists in PATH
    pub fn command_exists(&self, command: &str) -> bool {
        let result = Command::new("which")
            .arg(command)
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status();

        match result {
            Ok(status) => status.success(),
            Err(e) => {
                debug!("Failed to check if command '{}' exists: {}", command, e);
                false
            }
        }
    }
}

impl CommandRunner for ProcessRunner {
    fn run(&self, command: &str, args: &[&str]) -> Result<()> {
        // Only the program name goes into logs and errors; the argument list
        // can carry the Steam password
        let cmd_str = command.to_string();

        if self.debug {
            debug!("Running command: {} ({} args)", cmd_str, args.len());
        } else {
            info!("+ {}", cmd_str);
        }

        let status = Command::new(command)
            .args(args)
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|e| {
                PackagerError::Process {
                    command: cmd_str.clone(),
                    exit_code: None,
                    source: Some(Box::new(e)),
                }
            })?;

        if !status.success() {
            return Err(PackagerError::process(cmd_str, status.code()));
        }

        debug!("Command completed successfully");
        Ok(())
    }
}

impl Default for ProcessRunner {
    fn default() -> Self {
        Self::new(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_simple_command() {
        let runner = ProcessRunner::new(false);
        assert!(runner.run("true", &[]).is_ok());
    }

    #[test]
    fn test_failing_command_reports_exit_code() {
        let runner = ProcessRunner::new(false);
        let result = runner.run("false", &[]);

        match result {
            Err(PackagerError::Process { exit_code, .. }) => {
                assert_eq!(exit_code, Some(1));
            }
            other => panic!("Expected Process error, got {:?}", other),
        }
    }

    #[test]
    fn test_command_exists() {
        let runner = ProcessRunner::new(false);
        assert!(runner.command_exists("echo"));
        assert!(!runner.command_exists("nonexistent_command_12345"));
    }
}
