use serde::{Deserialize, Serialize};
use std::path::Path;

/// Name of the optional configuration file in the project directory.
pub const CONFIG_FILE: &str = "funcpack.toml";

/// funcpack.toml configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FuncpackConfig {
    #[serde(default)]
    pub package: PackageConfig,
    #[serde(default)]
    pub deploy: DeployConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackageConfig {
    /// Exclusion manifest file name (defaults to .funcignore)
    #[serde(default = "default_manifest")]
    pub manifest: String,
    /// Output artifact file name (defaults to app.zip)
    #[serde(default = "default_artifact")]
    pub artifact: String,
    /// Compression effort for the artifact
    #[serde(default)]
    pub compression: Compression,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeployConfig {
    /// Deployment slot; the production slot when unset
    pub slot: Option<String>,
    /// Ask the function app to build the package remotely
    #[serde(default)]
    pub build_remote: bool,
    /// Deployment timeout in seconds, passed through to `az`
    pub timeout: Option<u32>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Compression {
    #[default]
    Fastest,
    Optimal,
    None,
}

impl Default for PackageConfig {
    fn default() -> Self {
        Self {
            manifest: default_manifest(),
            artifact: default_artifact(),
            compression: Compression::default(),
        }
    }
}

impl FuncpackConfig {
    /// Load from funcpack.toml at the given path, or return defaults if not found.
    pub fn load(project_dir: &Path) -> crate::Result<Self> {
        let config_path = project_dir.join(CONFIG_FILE);
        if config_path.exists() {
            let content =
                std::fs::read_to_string(&config_path).map_err(|e| crate::Error::ConfigLoad {
                    path: config_path.clone(),
                    source: e,
                })?;
            toml::from_str(&content).map_err(|e| crate::Error::ConfigParse {
                path: config_path,
                source: e,
            })
        } else {
            tracing::debug!(path = %config_path.display(), "no config file, using defaults");
            Ok(Self::default())
        }
    }
}

fn default_manifest() -> String {
    ".funcignore".to_owned()
}

fn default_artifact() -> String {
    "app.zip".to_owned()
}
