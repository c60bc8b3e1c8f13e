use crate::config::Settings;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum DiscoveryError {
    #[error("failed to read repo root {path}: {source}")]
    ReadRoot {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to read language folder {path}: {source}")]
    ReadLanguage {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Discovery {
    root: PathBuf,
    launcher_script: String,
    reserved_dir: String,
}

impl Discovery {
    pub fn new(
        root: impl Into<PathBuf>,
        launcher_script: impl Into<String>,
        reserved_dir: impl Into<String>,
    ) -> Self {
        Self {
            root: root.into(),
            launcher_script: launcher_script.into(),
            reserved_dir: reserved_dir.into(),
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(
            settings.root.clone(),
            settings.launcher_script.trim(),
            settings.reserved_dir.clone(),
        )
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn language_dir(&self, language: &str) -> PathBuf {
        self.root.join(language)
    }

    /// Visible folders under the root that carry the launcher script, sorted.
    pub fn list_languages(&self) -> Result<Vec<String>, DiscoveryError> {
        let names = visible_dirs(&self.root).map_err(|source| DiscoveryError::ReadRoot {
            path: self.root.display().to_string(),
            source,
        })?;
        let mut languages: Vec<String> = names
            .into_iter()
            .filter(|name| *name != self.reserved_dir)
            .filter(|name| self.root.join(name).join(&self.launcher_script).exists())
            .collect();
        languages.sort();
        Ok(languages)
    }

    pub fn list_benchmarks(&self, language: &str) -> Result<Vec<String>, DiscoveryError> {
        let dir = self.language_dir(language);
        let mut benchmarks =
            visible_dirs(&dir).map_err(|source| DiscoveryError::ReadLanguage {
                path: dir.display().to_string(),
                source,
            })?;
        benchmarks.sort();
        Ok(benchmarks)
    }
}

fn visible_dirs(dir: &Path) -> std::io::Result<Vec<String>> {
    let mut names = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_dir() {
            continue;
        }
        let Ok(name) = entry.file_name().into_string() else {
            continue;
        };
        if name.starts_with('.') {
            continue;
        }
        names.push(name);
    }
    Ok(names)
}
