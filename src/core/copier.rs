//! Recursive filtered tree copy
//!
//! Walks the data folder depth-first, runs every regular file through the
//! inclusion matcher, and copies the matches to the same relative location
//! under the output root while accumulating size statistics.

use crate::{
    core::matcher,
    error::{PackagerError, Result},
    utils::fs::FileSystemUtils,
};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, instrument};

/// Statistics accumulated over one copy run
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CopyStats {
    /// Number of files actually copied
    pub files_copied: usize,
    /// Total bytes copied
    pub total_bytes: u64,
    /// Number of files under a Resources path
    pub resource_files: usize,
    /// Bytes of files under a Resources path
    pub resource_bytes: u64,
    /// Bytes of the application binaries
    pub app_bytes: u64,
}

/// Copies the matching subset of a source tree into the output root
pub struct TreeCopier<'a> {
    include: &'a [String],
    exclude: &'a [String],
    app_binaries: &'a [String],
    fs_utils: FileSystemUtils,
}

impl<'a> TreeCopier<'a> {
    /// Create a new tree copier over the given pattern lists
    pub fn new(include: &'a [String], exclude: &'a [String], app_binaries: &'a [String]) -> Self {
        Self {
            include,
            exclude,
            app_binaries,
            fs_utils: FileSystemUtils::new(),
        }
    }

    /// Copy all matching files from `src_root` into `dest_root`
    ///
    /// The caller is responsible for `dest_root` starting out empty; this
    /// never deletes anything. Any filesystem error aborts the whole run.
    #[instrument(skip(self, src_root, dest_root))]
    pub fn copy_tree(&self, src_root: &Path, dest_root: &Path) -> Result<CopyStats> {
        let mut stats = CopyStats::default();
        self.copy_dir(src_root, "", dest_root, &mut stats)?;
        Ok(stats)
    }

    fn copy_dir(
        &self,
        src_dir: &Path,
        rel_prefix: &str,
        dest_root: &Path,
        stats: &mut CopyStats,
    ) -> Result<()> {
        let entries = std::fs::read_dir(src_dir)
            .map_err(|e| PackagerError::file_system("read_dir", src_dir, e))?;

        for entry in entries {
            let entry =
                entry.map_err(|e| PackagerError::file_system("read_dir", src_dir, e))?;
            let file_name = entry.file_name();
            let Some(name) = file_name.to_str() else {
                return Err(PackagerError::validation(format!(
                    "Non-UTF-8 file name under {}",
                    src_dir.display()
                )));
            };

            let src_path = entry.path();
            if src_path.is_dir() {
                // Skips .git and other similar hidden folders
                if name.starts_with('.') {
                    debug!("Skipping hidden folder {}", src_path.display());
                    continue;
                }
                let child_prefix = format!("{}{}/", rel_prefix, name);
                self.copy_dir(&src_path, &child_prefix, dest_root, stats)?;
            } else if src_path.is_file() {
                let rel_path = format!("{}{}", rel_prefix, name);
                if matcher::should_include(&rel_path, self.include, self.exclude) {
                    self.copy_file(&src_path, &rel_path, dest_root, stats)?;
                } else {
                    debug!("Not copying {} to output", rel_path);
                }
            }
        }

        Ok(())
    }

    fn copy_file(
        &self,
        src_path: &Path,
        rel_path: &str,
        dest_root: &Path,
        stats: &mut CopyStats,
    ) -> Result<()> {
        debug!("Copying {} to output", rel_path);
        let dest_path = dest_root.join(rel_path);

        let file_size = self
            .fs_utils
            .copy_file(src_path, &dest_path)
            .map_err(|e| PackagerError::file_system("copy", src_path, e))?;

        stats.files_copied += 1;
        stats.total_bytes += file_size;

        if rel_path.to_ascii_lowercase().contains("resources/") {
            stats.resource_files += 1;
            stats.resource_bytes += file_size;
        }
        if self
            .app_binaries
            .iter()
            .any(|binary| rel_path.eq_ignore_ascii_case(binary))
        {
            stats.app_bytes += file_size;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn list(patterns: &[&str]) -> Vec<String> {
        patterns.iter().map(|s| s.to_string()).collect()
    }

    fn write(root: &Path, rel: &str, bytes: usize) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, vec![b'x'; bytes]).unwrap();
    }

    #[test]
    fn test_copies_only_included_files_and_counts_resources() {
        let src = TempDir::new().unwrap();
        let dest = TempDir::new().unwrap();
        write(src.path(), "Resources/icon.ico", 500);
        write(src.path(), "Resources/Raw/source.psd", 9999);
        write(src.path(), "notes.txt", 10);

        let include = list(&["Resources/icon.ico"]);
        let exclude = list(&["Resources/Raw/"]);
        let binaries = list(&[]);
        let copier = TreeCopier::new(&include, &exclude, &binaries);

        let stats = copier.copy_tree(src.path(), dest.path()).unwrap();
        assert_eq!(stats.files_copied, 1);
        assert_eq!(stats.total_bytes, 500);
        assert_eq!(stats.resource_files, 1);
        assert_eq!(stats.resource_bytes, 500);
        assert_eq!(stats.app_bytes, 0);

        assert!(dest.path().join("Resources/icon.ico").is_file());
        assert!(!dest.path().join("Resources/Raw/source.psd").exists());
        assert!(!dest.path().join("notes.txt").exists());
    }

    #[test]
    fn test_hidden_folders_are_not_recursed_into() {
        let src = TempDir::new().unwrap();
        let dest = TempDir::new().unwrap();
        write(src.path(), ".git/objects/blob.png", 100);
        write(src.path(), "Resources/Sprites/player.png", 40);

        let include = list(&[".png"]);
        let exclude = list(&[]);
        let binaries = list(&[]);
        let copier = TreeCopier::new(&include, &exclude, &binaries);

        let stats = copier.copy_tree(src.path(), dest.path()).unwrap();
        assert_eq!(stats.files_copied, 1);
        assert!(dest.path().join("Resources/Sprites/player.png").is_file());
        assert!(!dest.path().join(".git").exists());
    }

    #[test]
    fn test_application_binary_bytes_are_tracked() {
        let src = TempDir::new().unwrap();
        let dest = TempDir::new().unwrap();
        write(src.path(), "Game.exe", 2048);
        write(src.path(), "Game.dll", 1024);
        write(src.path(), "steam_api64.dll", 64);

        let include = list(&["Game.exe", "Game.dll", "steam_api64.dll"]);
        let exclude = list(&[]);
        let binaries = list(&["Game.exe", "Game.dll"]);
        let copier = TreeCopier::new(&include, &exclude, &binaries);

        let stats = copier.copy_tree(src.path(), dest.path()).unwrap();
        assert_eq!(stats.files_copied, 3);
        assert_eq!(stats.total_bytes, 2048 + 1024 + 64);
        assert_eq!(stats.app_bytes, 2048 + 1024);
    }

    #[test]
    fn test_missing_source_root_is_an_error() {
        let dest = TempDir::new().unwrap();
        let include = list(&[".png"]);
        let exclude = list(&[]);
        let binaries = list(&[]);
        let copier = TreeCopier::new(&include, &exclude, &binaries);

        let result = copier.copy_tree(Path::new("definitely/not/here"), dest.path());
        assert!(matches!(result, Err(PackagerError::FileSystem { .. })));
    }
}
