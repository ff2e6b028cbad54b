//! SteamPipe upload driver
//!
//! Builds the single steamcmd invocation and runs it once, synchronously,
//! with no retry. The actual process spawn goes through the `CommandRunner`
//! seam so the payload assembly stays testable without touching Steam.

use crate::{error::Result, utils::process::CommandRunner};
use std::path::Path;
use tracing::info;

/// Runs the content upload through steamcmd
pub struct SteamUploader<'a, R: CommandRunner> {
    steamcmd: &'a Path,
    runner: &'a R,
}

impl<'a, R: CommandRunner> SteamUploader<'a, R> {
    /// Create an uploader for the given steamcmd executable
    pub fn new(steamcmd: &'a Path, runner: &'a R) -> Self {
        Self { steamcmd, runner }
    }

    /// Log in and run the app build described by the patched build script
    pub fn upload(&self, username: &str, password: &str, app_script: &Path) -> Result<()> {
        let script = app_script.display().to_string();
        let args = [
            "+login",
            username,
            password,
            "+run_app_build",
            script.as_str(),
            "+quit",
        ];

        info!(" +================================+");
        info!(" | Running steam upload script... |");
        info!(" +================================+");
        let result = self
            .runner
            .run(&self.steamcmd.display().to_string(), &args);
        info!(" +================================+");
        info!(" |     Upload Script Finished     |");
        info!(" +================================+");
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PackagerError;
    use std::cell::RefCell;
    use std::path::PathBuf;

    #[derive(Default)]
    struct RecordingRunner {
        calls: RefCell<Vec<(String, Vec<String>)>>,
        fail: bool,
    }

    impl CommandRunner for RecordingRunner {
        fn run(&self, command: &str, args: &[&str]) -> Result<()> {
            self.calls.borrow_mut().push((
                command.to_string(),
                args.iter().map(|s| s.to_string()).collect(),
            ));
            if self.fail {
                Err(PackagerError::process(command, Some(1)))
            } else {
                Ok(())
            }
        }
    }

    #[test]
    fn test_upload_builds_the_expected_command_line() {
        let runner = RecordingRunner::default();
        let steamcmd = PathBuf::from("steamcmd");
        let uploader = SteamUploader::new(&steamcmd, &runner);

        uploader
            .upload("dev", "hunter2", Path::new("build_steam_app.vdf"))
            .unwrap();

        let calls = runner.calls.borrow();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, "steamcmd");
        assert_eq!(
            calls[0].1,
            vec![
                "+login",
                "dev",
                "hunter2",
                "+run_app_build",
                "build_steam_app.vdf",
                "+quit",
            ]
        );
    }

    #[test]
    fn test_upload_failure_propagates_without_retry() {
        let runner = RecordingRunner {
            fail: true,
            ..Default::default()
        };
        let steamcmd = PathBuf::from("steamcmd");
        let uploader = SteamUploader::new(&steamcmd, &runner);

        let result = uploader.upload("dev", "pw", Path::new("build_steam_app.vdf"));
        assert!(matches!(result, Err(PackagerError::Process { .. })));
        assert_eq!(runner.calls.borrow().len(), 1);
    }
}
