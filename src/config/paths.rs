//! Tier path discovery for prompt configuration files.

use std::path::{Path, PathBuf};

/// Directory name used for both the project and user tiers.
const CONFIG_DIR_NAME: &str = ".collab-kit";

/// Filename holding prompt overrides within a tier directory.
const PROMPTS_FILE_NAME: &str = "prompts.yaml";

/// Locations checked for `prompts.yaml`, lowest to highest precedence.
#[derive(Debug, Clone)]
pub struct ConfigPaths {
    /// User-level config directory (~/.collab-kit)
    pub user_dir: Option<PathBuf>,
    /// Project-level config directory ($CWD/.collab-kit)
    pub project_dir: Option<PathBuf>,
    /// Explicit prompts file from COLLAB_KIT_PROMPTS_PATH, overrides tiers
    pub explicit_file: Option<PathBuf>,
}

impl Default for ConfigPaths {
    fn default() -> Self {
        Self::discover()
    }
}

impl ConfigPaths {
    /// Discover configuration paths from environment and defaults.
    pub fn discover() -> Self {
        let user_dir = std::env::var("COLLAB_KIT_USER_DIR")
            .ok()
            .map(PathBuf::from)
            .or_else(|| dirs::home_dir().map(|h| h.join(CONFIG_DIR_NAME)));

        let project_dir = std::env::var("COLLAB_KIT_PROJECT_DIR")
            .ok()
            .map(PathBuf::from)
            .or_else(|| Some(PathBuf::from(CONFIG_DIR_NAME)));

        let explicit_file = std::env::var("COLLAB_KIT_PROMPTS_PATH")
            .ok()
            .map(PathBuf::from);

        Self {
            user_dir,
            project_dir,
            explicit_file,
        }
    }

    /// Create paths with explicit tier directories (no environment lookup).
    pub fn with_dirs(project_dir: Option<PathBuf>, user_dir: Option<PathBuf>) -> Self {
        Self {
            user_dir,
            project_dir,
            explicit_file: None,
        }
    }

    /// Candidate prompts files in merge order (lowest precedence first).
    ///
    /// The user tier merges over the project tier: a project checks in its
    /// prompts, a user adjusts them locally.
    pub fn prompts_files(&self) -> Vec<PathBuf> {
        [&self.project_dir, &self.user_dir]
            .into_iter()
            .flatten()
            .map(|dir| dir.join(PROMPTS_FILE_NAME))
            .collect()
    }

    /// The explicit override file, if one was configured.
    pub fn explicit_file(&self) -> Option<&Path> {
        self.explicit_file.as_deref()
    }
}
