//! Command implementations for the CLI

use crate::{
    cli::{BuildType, Command},
    config::Config,
    core::{BuildScriptFields, BuildScriptPatcher, SteamUploader, TreeCopier, VersionParser},
    utils::{
        format::format_size,
        fs::FileSystemUtils,
        process::ProcessRunner,
        prompt::{CredentialProvider, TerminalPrompt},
    },
};
use anyhow::Context;
use std::path::Path;
use tracing::{info, instrument, warn};

/// Execute the appropriate command based on CLI arguments
#[instrument(skip(config))]
pub fn execute_command(config: &Config, command: &Command) -> anyhow::Result<()> {
    match command {
        Command::Increment { file } => execute_increment_command(file),
        Command::Package {
            build_type,
            test,
            username,
        } => execute_package_command(config, *build_type, *test, username.as_deref()),
    }
}

/// Execute the increment command
#[instrument]
fn execute_increment_command(file: &Path) -> anyhow::Result<()> {
    let fs_utils = FileSystemUtils::new();

    let content = fs_utils
        .read_file_to_string(file)
        .with_context(|| format!("Failed to read version file {}", file.display()))?;

    let parser = VersionParser::new()?;
    let (patched, new_build) = parser
        .increment_build(&content, file)
        .context("Failed to increment the build number")?;

    fs_utils
        .write_file(file, patched)
        .with_context(|| format!("Failed to rewrite version file {}", file.display()))?;

    let file_name = file
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| file.display().to_string());
    info!("[{}: Build {}]", file_name, new_build);
    Ok(())
}

/// Execute the package command
#[instrument(skip(config, username))]
fn execute_package_command(
    config: &Config,
    build_type: BuildType,
    test: bool,
    username: Option<&str>,
) -> anyhow::Result<()> {
    let fs_utils = FileSystemUtils::new();

    config
        .validate_package_layout()
        .context("Project layout check failed")?;

    // Find the version number
    let version_content = fs_utils
        .read_file_to_string(&config.project.version_file)
        .with_context(|| {
            format!(
                "Failed to read version file {}",
                config.project.version_file.display()
            )
        })?;
    let parser = VersionParser::new()?;
    let version = parser.parse_with_path(&version_content, &config.project.version_file)?;

    info!("Packaging version {}", version);

    // Delete the old contents of the output folder
    let output_dir = config.output_dir(build_type);
    let removed = fs_utils
        .remove_dir_all_if_exists(&output_dir)
        .with_context(|| format!("Failed to delete old output folder {}", output_dir.display()))?;
    if removed {
        info!("Deleted old output folder");
    }
    fs_utils
        .create_dir_all(&output_dir)
        .with_context(|| format!("Failed to create output folder {}", output_dir.display()))?;
    info!("Outputting to {}", output_dir.display());

    // Copy files from the top level data folder
    let include = config.include_patterns(build_type);
    let exclude = config.exclude_patterns(build_type);
    let binaries = config.app_binaries(build_type);
    let copier = TreeCopier::new(&include, &exclude, binaries);
    let stats = copier
        .copy_tree(&config.project.data_dir, &output_dir)
        .context("Failed to copy files to the output folder")?;

    info!(
        "Copied {} files to output ({} total)",
        stats.files_copied,
        format_size(stats.total_bytes)
    );
    info!("Application is {}", format_size(stats.app_bytes));
    info!(
        "Resources contains {} files and is {} total",
        stats.resource_files,
        format_size(stats.resource_bytes)
    );

    // Modify the build script
    let script_content = fs_utils
        .read_file_to_string(&config.steam.app_script)
        .with_context(|| {
            format!(
                "Failed to read app build script {}",
                config.steam.app_script.display()
            )
        })?;

    let patcher = BuildScriptPatcher::new(
        &config.steam.main_depot_script,
        &config.steam.shared_depot_script,
        config.steam.shared_depot_id,
    )?;
    let fields = BuildScriptFields {
        app_id: config.app_id(build_type),
        description: format!(
            "{} Build v{}.{:02}({})",
            build_type.display_name(),
            version.major,
            version.minor,
            version.build
        ),
        content_root: output_dir.display().to_string(),
        main_depot_id: config.main_depot_id(build_type),
        shared_depot_id: config.steam.shared_depot_id,
        shared_depot_active: config.upload_shared_depot(build_type),
    };
    let patched_script = patcher.patch(&script_content, &fields, &config.steam.app_script)?;

    fs_utils
        .write_file(&config.steam.app_script, patched_script)
        .with_context(|| {
            format!(
                "Failed to rewrite app build script {}",
                config.steam.app_script.display()
            )
        })?;
    info!(
        "Updated the app build script at {}",
        config.steam.app_script.display()
    );

    // Start the upload
    if test {
        info!("This was just a test, skipping the upload step");
        return Ok(());
    }

    let prompt = TerminalPrompt::new();
    let username = match username {
        Some(name) => name.to_string(),
        None => prompt.username().context("Failed to get Steam username")?,
    };
    let password = prompt.password().context("Failed to get Steam password")?;

    let runner = ProcessRunner::new(config.debug);
    if !runner.command_exists(&config.steam.steamcmd.display().to_string()) {
        warn!(
            "steamcmd not found at {}, the upload will likely fail",
            config.steam.steamcmd.display()
        );
    }
    let uploader = SteamUploader::new(&config.steam.steamcmd, &runner);
    uploader
        .upload(&username, &password, &config.steam.app_script)
        .context("Steam upload failed")?;

    Ok(())
}
