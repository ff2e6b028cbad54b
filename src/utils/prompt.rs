//! Interactive credential prompts
//!
//! The `CredentialProvider` trait keeps the packaging pipeline free of
//! terminal interaction; the terminal implementation asks on stderr and
//! reads one line from stdin. Passwords are never taken from flags and
//! never stored.

use crate::error::{PackagerError, Result};
use std::io::{BufRead, Write};

/// Supplies the Steam login credentials
pub trait CredentialProvider {
    /// The account name to log in with
    fn username(&self) -> Result<String>;
    /// The account password, always prompted
    fn password(&self) -> Result<String>;
}

/// Credential provider that prompts on the controlling terminal
#[derive(Debug, Default)]
pub struct TerminalPrompt;

impl TerminalPrompt {
    /// Create a new terminal prompt
    pub fn new() -> Self {
        Self
    }

    fn ask(&self, prompt: &str) -> Result<String> {
        let mut stderr = std::io::stderr();
        write!(stderr, "{}", prompt).map_err(|e| PackagerError::Credential {
            message: "Failed to write prompt".to_string(),
            source: Some(Box::new(e)),
        })?;
        stderr.flush().map_err(|e| PackagerError::Credential {
            message: "Failed to write prompt".to_string(),
            source: Some(Box::new(e)),
        })?;

        let mut line = String::new();
        std::io::stdin()
            .lock()
            .read_line(&mut line)
            .map_err(|e| PackagerError::Credential {
                message: "Failed to read input".to_string(),
                source: Some(Box::new(e)),
            })?;

        let value = line.trim_end_matches(['\r', '\n']).to_string();
        if value.is_empty() {
            return Err(PackagerError::credential("No input provided"));
        }
        Ok(value)
    }
}

impl CredentialProvider for TerminalPrompt {
    fn username(&self) -> Result<String> {
        self.ask("Steam Username: ")
    }

    fn password(&self) -> Result<String> {
        self.ask("Steam Password: ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Provider used in tests, returning canned values
    pub struct FixedCredentials {
        pub username: String,
        pub password: String,
    }

    impl CredentialProvider for FixedCredentials {
        fn username(&self) -> Result<String> {
            Ok(self.username.clone())
        }

        fn password(&self) -> Result<String> {
            Ok(self.password.clone())
        }
    }

    #[test]
    fn test_fixed_provider_round_trips() {
        let provider = FixedCredentials {
            username: "dev".to_string(),
            password: "hunter2".to_string(),
        };
        assert_eq!(provider.username().unwrap(), "dev");
        assert_eq!(provider.password().unwrap(), "hunter2");
    }
}
