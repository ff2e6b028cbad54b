//! Version header parsing and build-number incrementing
//!
//! Extracts MAJOR/MINOR/BUILD integers from `#define` declarations without
//! touching anything else in the header.

use crate::{
    core::patch,
    error::{PackagerError, Result},
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use tracing::debug;

/// Version triple extracted from the version header
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Version {
    /// Major version number
    pub major: u32,
    /// Minor version number
    pub minor: u32,
    /// Build counter, bumped on every packaged build
    pub build: u32,
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}({})", self.major, self.minor, self.build)
    }
}

/// Parser holding the compiled declaration patterns
pub struct VersionParser {
    re_major: Regex,
    re_minor: Regex,
    re_build: Regex,
}

impl VersionParser {
    /// Create a new version parser
    pub fn new() -> Result<Self> {
        Ok(Self {
            re_major: Self::compile(r"\#define\s*[A-Z_]*VERSION_MAJOR\s*([0-9]+)[^\n]*")?,
            re_minor: Self::compile(r"\#define\s*[A-Z_]*VERSION_MINOR\s*([0-9]+)[^\n]*")?,
            re_build: Self::compile(r"\#define\s*[A-Z0-9_]*VERSION_BUILD\s*([0-9]+)[^\n]*")?,
        })
    }

    fn compile(pattern: &str) -> Result<Regex> {
        Regex::new(pattern)
            .map_err(|e| PackagerError::config(format!("Failed to compile regex: {}", e)))
    }

    /// Parse the full version triple out of header content
    ///
    /// `path` is only used for diagnostics.
    pub fn parse_with_path(&self, content: &str, path: &Path) -> Result<Version> {
        let major = self.extract_field(content, &self.re_major, "major", path)?;
        let minor = self.extract_field(content, &self.re_minor, "minor", path)?;
        let build = self.extract_field(content, &self.re_build, "build", path)?;

        debug!("Parsed version: major={}, minor={}, build={}", major, minor, build);
        Ok(Version { major, minor, build })
    }

    /// Parse header content without an associated file
    pub fn parse(&self, content: &str) -> Result<Version> {
        self.parse_with_path(content, Path::new("<memory>"))
    }

    /// Increment the BUILD declaration, preserving everything around it
    ///
    /// Returns the patched content and the new build number.
    pub fn increment_build(&self, content: &str, path: &Path) -> Result<(String, u32)> {
        let build = self.extract_field(content, &self.re_build, "build", path)?;
        let new_build = build + 1;

        let patched = patch::replace_capture(content, &self.re_build, &new_build.to_string())
            .ok_or_else(|| {
                PackagerError::version_parse("Could not find version line in version file", path)
            })?;

        Ok((patched, new_build))
    }

    fn extract_field(
        &self,
        content: &str,
        re: &Regex,
        name: &str,
        path: &Path,
    ) -> Result<u32> {
        let text = patch::extract_capture(content, re).ok_or_else(|| {
            PackagerError::version_parse(
                format!("Couldn't find the {} version number in version file", name),
                path,
            )
        })?;

        text.parse().map_err(|e| {
            PackagerError::version_parse(
                format!("Unparsable {} version number '{}': {}", name, text, e),
                path,
            )
        })
    }
}
