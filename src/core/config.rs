//! Project configuration loaded from `.pushgate.toml`.
//!
//! Every field defaults to the stock layout (an npm project with sources
//! under `src/`), so a project without the file gets the standard gate.
//! Only paths and commands are configurable; the check set is fixed.

use crate::core::error::PushgateError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const CONFIG_FILE: &str = ".pushgate.toml";

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Required manifest, relative to the project root.
    pub kernel_path: String,
    /// Root of the scanned `.ts`/`.tsx` sources.
    pub source_root: String,
    pub commands: Commands,
    pub tree: TreeConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            kernel_path: "directives/ANTIGRAVITY_KERNEL.md".to_string(),
            source_root: "src".to_string(),
            commands: Commands::default(),
            tree: TreeConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct Commands {
    pub build: String,
    pub lint: String,
    pub typecheck: String,
}

impl Default for Commands {
    fn default() -> Self {
        Self {
            build: "npm run build".to_string(),
            lint: "npm run lint".to_string(),
            typecheck: "npm run typecheck".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct TreeConfig {
    /// Directory name of installed dependency trees. Only the one at the root is authorized.
    pub package_dir: String,
    /// Root-level entries skipped by the conflict-copy scan.
    pub excluded_zones: Vec<String>,
    /// Compiler configuration files allowed at the root.
    pub compiler_config_whitelist: Vec<String>,
    /// Path fragments whose files may contain literal colors.
    pub design_exclusions: Vec<String>,
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self {
            package_dir: "node_modules".to_string(),
            excluded_zones: vec![
                "node_modules".to_string(),
                ".git".to_string(),
                "knowledge".to_string(),
            ],
            compiler_config_whitelist: vec![
                "tsconfig.json".to_string(),
                "tsconfig.app.json".to_string(),
                "tsconfig.node.json".to_string(),
            ],
            design_exclusions: vec![
                "tailwind.config".to_string(),
                "utils.ts".to_string(),
                "constants".to_string(),
            ],
        }
    }
}

/// Load `.pushgate.toml` from the project root.
///
/// A missing file yields the defaults. A file that exists but cannot be
/// read or parsed is an error: silently ignoring it would run the gate
/// against the wrong commands.
pub fn load_config(project_root: &Path) -> Result<Config, PushgateError> {
    let config_path = project_root.join(CONFIG_FILE);
    if !config_path.exists() {
        return Ok(Config::default());
    }

    let content = fs::read_to_string(&config_path)?;
    toml::from_str(&content).map_err(|e| PushgateError::ConfigError {
        path: config_path.display().to_string(),
        message: e.to_string(),
    })
}
