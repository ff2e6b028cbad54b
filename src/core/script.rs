//! Steam build script patching
//!
//! Rewrites the placeholder fields of the app build script in place: app id,
//! build description, content root, the two depot ids, and the comment
//! marker that toggles the shared depot line. Patches run sequentially, each
//! against the previous patch's output, and any field that cannot be located
//! is a fatal configuration error.

use crate::{
    core::patch,
    error::{PackagerError, Result},
};
use regex::Regex;
use std::path::Path;
use tracing::debug;

/// Values substituted into the app build script
#[derive(Debug, Clone)]
pub struct BuildScriptFields {
    /// Steam app id to publish under
    pub app_id: u32,
    /// Human-readable build description shown on Steamworks
    pub description: String,
    /// Folder the depots read their content from
    pub content_root: String,
    /// Main content depot id
    pub main_depot_id: u32,
    /// Shared content depot id
    pub shared_depot_id: u32,
    /// Whether the shared depot line stays active or is commented out
    pub shared_depot_active: bool,
}

/// Patcher holding the compiled field patterns
pub struct BuildScriptPatcher {
    re_appid: Regex,
    re_desc: Regex,
    re_content_root: Regex,
    re_main_depot: Regex,
    re_shared_depot: Regex,
    re_shared_toggle: Regex,
}

impl BuildScriptPatcher {
    /// Create a patcher for scripts referencing the given depot script names
    ///
    /// The toggle pattern anchors on `shared_depot_id`, so it must match the
    /// id the shared-depot patch writes.
    pub fn new(
        main_depot_script: &str,
        shared_depot_script: &str,
        shared_depot_id: u32,
    ) -> Result<Self> {
        Ok(Self {
            re_appid: Self::compile(r#""appid"\s*"([^\n"]+)""#.to_string())?,
            re_desc: Self::compile(r#""desc"\s*"([^\n"]+)""#.to_string())?,
            re_content_root: Self::compile(r#""contentroot"\s*"([^\n"]+)""#.to_string())?,
            re_main_depot: Self::compile(format!(
                r#""([0-9]+)"\s*"{}""#,
                regex::escape(main_depot_script)
            ))?,
            re_shared_depot: Self::compile(format!(
                r#""([0-9]+)"\s*"{}""#,
                regex::escape(shared_depot_script)
            ))?,
            re_shared_toggle: Self::compile(format!(r#"(/*"){}"#, shared_depot_id))?,
        })
    }

    fn compile(pattern: String) -> Result<Regex> {
        Regex::new(&pattern)
            .map_err(|e| PackagerError::config(format!("Failed to compile regex: {}", e)))
    }

    /// Apply all six field patches to the script content
    pub fn patch(
        &self,
        content: &str,
        fields: &BuildScriptFields,
        path: &Path,
    ) -> Result<String> {
        debug!("Patching build script fields: {:?}", fields);

        let toggle = if fields.shared_depot_active {
            "\""
        } else {
            "//\""
        };

        let content = self.patch_field(content, &self.re_appid, &fields.app_id.to_string(), "appid", path)?;
        let content = self.patch_field(&content, &self.re_desc, &fields.description, "desc", path)?;
        let content = self.patch_field(&content, &self.re_content_root, &fields.content_root, "contentroot", path)?;
        let content = self.patch_field(
            &content,
            &self.re_main_depot,
            &fields.main_depot_id.to_string(),
            "main depot id",
            path,
        )?;
        let content = self.patch_field(
            &content,
            &self.re_shared_depot,
            &fields.shared_depot_id.to_string(),
            "shared depot id",
            path,
        )?;
        // Runs last, after the shared depot id patch has written the id the
        // toggle pattern anchors on
        self.patch_field(&content, &self.re_shared_toggle, toggle, "shared depot toggle", path)
    }

    fn patch_field(
        &self,
        content: &str,
        re: &Regex,
        replacement: &str,
        field: &str,
        path: &Path,
    ) -> Result<String> {
        patch::replace_capture(content, re, replacement)
            .ok_or_else(|| PackagerError::field_not_found(field, path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCRIPT: &str = r#""AppBuild"
{
	"appid" "1000"
	"desc" "PLACEHOLDER"
	"contentroot" "PLACEHOLDER"
	"depots"
	{
		"1001" "build_steam_main.vdf"
		"1002" "build_steam_shared.vdf"
	}
}
"#;

    fn fields(active: bool) -> BuildScriptFields {
        BuildScriptFields {
            app_id: 2_185_480,
            description: "Release Build v1.02(43)".to_string(),
            content_root: "release/win_release".to_string(),
            main_depot_id: 2_185_481,
            shared_depot_id: 2_185_482,
            shared_depot_active: active,
        }
    }

    fn patcher() -> BuildScriptPatcher {
        BuildScriptPatcher::new("build_steam_main.vdf", "build_steam_shared.vdf", 2_185_482)
            .unwrap()
    }

    #[test]
    fn test_all_fields_substituted() {
        let patched = patcher()
            .patch(SCRIPT, &fields(true), Path::new("build_steam_app.vdf"))
            .unwrap();

        assert!(patched.contains("\"appid\" \"2185480\""));
        assert!(patched.contains("\"desc\" \"Release Build v1.02(43)\""));
        assert!(patched.contains("\"contentroot\" \"release/win_release\""));
        assert!(patched.contains("\"2185481\" \"build_steam_main.vdf\""));
        assert!(patched.contains("\"2185482\" \"build_steam_shared.vdf\""));
        // Active shared depot keeps the line uncommented
        assert!(!patched.contains("//\"2185482\""));
    }

    #[test]
    fn test_demo_comments_out_shared_depot() {
        let patched = patcher()
            .patch(SCRIPT, &fields(false), Path::new("build_steam_app.vdf"))
            .unwrap();
        assert!(patched.contains("//\"2185482\" \"build_steam_shared.vdf\""));
    }

    #[test]
    fn test_toggle_flips_back_to_active() {
        // A script left commented by a previous demo run becomes active again
        let commented = patcher()
            .patch(SCRIPT, &fields(false), Path::new("build_steam_app.vdf"))
            .unwrap();
        let active = patcher()
            .patch(&commented, &fields(true), Path::new("build_steam_app.vdf"))
            .unwrap();
        assert!(active.contains("\t\t\"2185482\" \"build_steam_shared.vdf\""));
        assert!(!active.contains("//\"2185482\""));
    }

    #[test]
    fn test_missing_field_names_the_field() {
        let script = SCRIPT.replace("\"contentroot\" \"PLACEHOLDER\"", "");
        let result = patcher().patch(&script, &fields(true), Path::new("build_steam_app.vdf"));
        match result {
            Err(PackagerError::FieldNotFound { field, .. }) => {
                assert_eq!(field, "contentroot");
            }
            other => panic!("Expected FieldNotFound, got {:?}", other.map(|_| ())),
        }
    }
}
