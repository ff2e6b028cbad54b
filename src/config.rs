//! Configuration management for the packager
//!
//! Centralizes the project layout, Steam identifiers, and file-selection
//! pattern lists, and provides validation.

use crate::{
    cli::{Args, BuildType},
    error::PackagerError,
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Enable debug logging
    pub debug: bool,
    /// Project directory layout
    pub project: ProjectConfig,
    /// Steam upload configuration
    pub steam: SteamConfig,
    /// File selection pattern lists
    pub selection: SelectionConfig,
}

/// Project directory layout and binary names
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectConfig {
    /// Folder holding the files that ship with the game
    pub data_dir: PathBuf,
    /// Resources subfolder inside the data folder
    pub resources_dir: PathBuf,
    /// Root folder for assembled release payloads
    pub release_dir: PathBuf,
    /// Header file holding the MAJOR/MINOR/BUILD declarations
    pub version_file: PathBuf,
    /// Application binary names for normal builds
    pub app_binaries: Vec<String>,
    /// Application binary names for demo builds
    pub demo_binaries: Vec<String>,
}

/// Steam identifiers and build-script locations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SteamConfig {
    /// Path to the steamcmd executable
    pub steamcmd: PathBuf,
    /// App id for normal builds
    pub app_id: u32,
    /// Main content depot id
    pub main_depot_id: u32,
    /// Shared content depot id
    pub shared_depot_id: u32,
    /// App id for the demo (0 until a demo app exists)
    pub demo_app_id: u32,
    /// Main depot id for the demo (0 until a demo app exists)
    pub demo_depot_id: u32,
    /// App build script, the document that gets patched
    pub app_script: PathBuf,
    /// Main depot build script name, referenced from the app script
    pub main_depot_script: String,
    /// Shared depot build script name, referenced from the app script
    pub shared_depot_script: String,
}

/// Base include/exclude pattern lists for the release payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectionConfig {
    /// Patterns always included
    pub include: Vec<String>,
    /// Patterns always excluded
    pub exclude: Vec<String>,
    /// Files only shipped in developer builds
    pub developer_only: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            debug: false,
            project: ProjectConfig::default(),
            steam: SteamConfig::default(),
            selection: SelectionConfig::default(),
        }
    }
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            resources_dir: PathBuf::from("data/Resources"),
            release_dir: PathBuf::from("release"),
            version_file: PathBuf::from("game/game_version.h"),
            app_binaries: vec!["Game.exe".to_string(), "Game.dll".to_string()],
            demo_binaries: vec!["GameDemo.exe".to_string(), "GameDemo.dll".to_string()],
        }
    }
}

impl Default for SteamConfig {
    fn default() -> Self {
        Self {
            steamcmd: PathBuf::from("steamcmd"),
            app_id: 2_185_480,
            main_depot_id: 2_185_481,
            shared_depot_id: 2_185_482,
            demo_app_id: 0,
            demo_depot_id: 0,
            app_script: PathBuf::from("build_steam_app.vdf"),
            main_depot_script: "build_steam_main.vdf".to_string(),
            shared_depot_script: "build_steam_shared.vdf".to_string(),
        }
    }
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            include: vec![
                "steam_api64.dll".to_string(),
                "Resources/icon.ico".to_string(),
                "Resources/icon16.png".to_string(),
                "Resources/icon24.png".to_string(),
                "Resources/icon32.png".to_string(),
                "Resources/icon64.png".to_string(),
                "Resources/icon128.png".to_string(),
                "Resources/Fonts/".to_string(),
                "Resources/Models/".to_string(),
                "Resources/Models/Textures/".to_string(),
                "Resources/Music/".to_string(),
                "Resources/Shaders/".to_string(),
                "Resources/Sheets/".to_string(),
                "Resources/Sounds/".to_string(),
                "Resources/Sprites/".to_string(),
                "Resources/Text/".to_string(),
                "Resources/Textures/".to_string(),
                "Resources/Vector/".to_string(),
            ],
            exclude: vec![
                "steam_appid.txt".to_string(),
                "Resources/Raw/".to_string(),
            ],
            developer_only: vec![
                "DEVELOPER_README.txt".to_string(),
                "debug_bindings.txt".to_string(),
            ],
        }
    }
}

impl Config {
    /// Create configuration from command line arguments
    pub fn from_args(args: &Args) -> Result<Self, PackagerError> {
        let config = Self {
            debug: args.debug,
            ..Self::default()
        };
        Ok(config)
    }

    /// Validate the layout the package command depends on
    pub fn validate_package_layout(&self) -> Result<(), PackagerError> {
        if !self.project.data_dir.exists() {
            return Err(PackagerError::validation(format!(
                "Couldn't find data folder: {}",
                self.project.data_dir.display()
            )));
        }

        if !self.project.resources_dir.exists() {
            return Err(PackagerError::validation(format!(
                "Couldn't find Resources folder: {}",
                self.project.resources_dir.display()
            )));
        }

        if !self.project.version_file.exists() {
            return Err(PackagerError::validation(format!(
                "Expected to find the app version file at {}",
                self.project.version_file.display()
            )));
        }

        if !self.steam.app_script.exists() {
            return Err(PackagerError::validation(format!(
                "Expected to find the app build script at {}",
                self.steam.app_script.display()
            )));
        }

        Ok(())
    }

    /// Output folder for a given build type, erased and recreated each run
    pub fn output_dir(&self, build_type: BuildType) -> PathBuf {
        self.project
            .release_dir
            .join(format!("win_{}", build_type.name()))
    }

    /// App id to publish under for a given build type
    pub fn app_id(&self, build_type: BuildType) -> u32 {
        match build_type {
            BuildType::Demo => self.steam.demo_app_id,
            _ => self.steam.app_id,
        }
    }

    /// Main depot id for a given build type
    pub fn main_depot_id(&self, build_type: BuildType) -> u32 {
        match build_type {
            BuildType::Demo => self.steam.demo_depot_id,
            _ => self.steam.main_depot_id,
        }
    }

    /// Whether the shared depot line stays active for a given build type
    pub fn upload_shared_depot(&self, build_type: BuildType) -> bool {
        build_type != BuildType::Demo
    }

    /// Application binary names counted toward the application size
    pub fn app_binaries(&self, build_type: BuildType) -> &[String] {
        match build_type {
            BuildType::Demo => &self.project.demo_binaries,
            _ => &self.project.app_binaries,
        }
    }

    /// Full include list for a given build type
    pub fn include_patterns(&self, build_type: BuildType) -> Vec<String> {
        let mut patterns = self.selection.include.clone();
        patterns.extend(self.app_binaries(build_type).iter().cloned());
        patterns
    }

    /// Full exclude list for a given build type
    pub fn exclude_patterns(&self, build_type: BuildType) -> Vec<String> {
        let mut patterns = self.selection.exclude.clone();
        if build_type != BuildType::Developer {
            patterns.extend(self.selection.developer_only.iter().cloned());
        }
        patterns
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_dir_per_build_type() {
        let config = Config::default();
        assert_eq!(
            config.output_dir(BuildType::Developer),
            PathBuf::from("release/win_developer")
        );
        assert_eq!(
            config.output_dir(BuildType::Demo),
            PathBuf::from("release/win_demo")
        );
    }

    #[test]
    fn test_demo_ids_and_binaries() {
        let config = Config::default();
        assert_eq!(config.app_id(BuildType::Release), config.steam.app_id);
        assert_eq!(config.app_id(BuildType::Demo), config.steam.demo_app_id);
        assert_eq!(config.app_binaries(BuildType::Demo), &config.project.demo_binaries[..]);
        assert!(config.upload_shared_depot(BuildType::Release));
        assert!(!config.upload_shared_depot(BuildType::Demo));
    }

    #[test]
    fn test_include_list_adds_binaries() {
        let config = Config::default();
        let patterns = config.include_patterns(BuildType::Release);
        assert!(patterns.contains(&"Game.exe".to_string()));
        assert!(!patterns.contains(&"GameDemo.exe".to_string()));

        let demo_patterns = config.include_patterns(BuildType::Demo);
        assert!(demo_patterns.contains(&"GameDemo.exe".to_string()));
    }

    #[test]
    fn test_exclude_list_keeps_developer_files_for_developer() {
        let config = Config::default();
        let dev = config.exclude_patterns(BuildType::Developer);
        assert!(!dev.contains(&"DEVELOPER_README.txt".to_string()));

        let release = config.exclude_patterns(BuildType::Release);
        assert!(release.contains(&"DEVELOPER_README.txt".to_string()));
        assert!(release.contains(&"Resources/Raw/".to_string()));
    }
}
