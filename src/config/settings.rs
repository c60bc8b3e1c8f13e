use super::ConfigError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_LAUNCHER_SCRIPT: &str = "run.sh";
pub const DEFAULT_SHELL: &str = "bash";
pub const DEFAULT_RESERVED_DIR: &str = "benchmark_runner";

fn default_root() -> PathBuf {
    PathBuf::from(".")
}

fn default_launcher_script() -> String {
    DEFAULT_LAUNCHER_SCRIPT.to_string()
}

fn default_shell() -> String {
    DEFAULT_SHELL.to_string()
}

fn default_reserved_dir() -> String {
    DEFAULT_RESERVED_DIR.to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default = "default_root")]
    pub root: PathBuf,
    #[serde(default = "default_launcher_script")]
    pub launcher_script: String,
    #[serde(default = "default_shell")]
    pub shell: String,
    #[serde(default = "default_reserved_dir")]
    pub reserved_dir: String,
    #[serde(default)]
    pub log_path: Option<PathBuf>,
    #[serde(default)]
    pub script_keys: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            root: default_root(),
            launcher_script: default_launcher_script(),
            shell: default_shell(),
            reserved_dir: default_reserved_dir(),
            log_path: None,
            script_keys: None,
        }
    }
}

impl Settings {
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        serde_yaml::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.root.as_os_str().is_empty() {
            return Err(ConfigError::Settings("`root` must be non-empty".to_string()));
        }
        let script = self.launcher_script.trim();
        if script.is_empty() {
            return Err(ConfigError::Settings(
                "`launcher_script` must be non-empty".to_string(),
            ));
        }
        if script.contains('/') {
            return Err(ConfigError::Settings(
                "`launcher_script` must be a file name inside each language folder".to_string(),
            ));
        }
        if self.shell.trim().is_empty() {
            return Err(ConfigError::Settings("`shell` must be non-empty".to_string()));
        }
        Ok(())
    }
}
