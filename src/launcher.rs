use crate::config::Settings;
use crate::preferences::{PreferenceStore, MIN_RUNS, SAVE_RESULTS};
use std::path::PathBuf;
use std::process::{Command, Stdio};

pub const MIN_RUNS_ENV: &str = "MIN_RUNS";
pub const EXPORT_RESULTS_ENV: &str = "EXPORT_RESULTS";

#[derive(Debug, thiserror::Error)]
pub enum LaunchError {
    #[error("failed to start `{shell} {script}` in {cwd}: {source}")]
    Spawn {
        shell: String,
        script: String,
        cwd: String,
        #[source]
        source: std::io::Error,
    },
    #[error("{language}/{benchmark} {}", describe_exit(.code))]
    Failed {
        language: String,
        benchmark: String,
        code: Option<i32>,
    },
}

fn describe_exit(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exited with status {code}"),
        None => "was terminated by a signal".to_string(),
    }
}

#[derive(Debug, Clone, Copy)]
pub struct LaunchRequest<'a> {
    pub language: &'a str,
    pub benchmark: &'a str,
    pub prefs: &'a PreferenceStore,
}

pub trait BenchmarkLauncher {
    fn launch(&mut self, request: &LaunchRequest<'_>) -> Result<(), LaunchError>;
}

/// Environment additions handed to the launcher script.
pub fn launch_env(prefs: &PreferenceStore) -> Vec<(&'static str, String)> {
    let mut env = vec![(MIN_RUNS_ENV, prefs.get(MIN_RUNS).to_string())];
    if prefs.get_bool(SAVE_RESULTS) {
        env.push((EXPORT_RESULTS_ENV, "1".to_string()));
    }
    env
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptLauncher {
    root: PathBuf,
    shell: String,
    script: String,
}

impl ScriptLauncher {
    pub fn new(
        root: impl Into<PathBuf>,
        shell: impl Into<String>,
        script: impl Into<String>,
    ) -> Self {
        Self {
            root: root.into(),
            shell: shell.into(),
            script: script.into(),
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(
            settings.root.clone(),
            settings.shell.trim(),
            settings.launcher_script.trim(),
        )
    }

    pub fn build_command(&self, request: &LaunchRequest<'_>) -> Command {
        let mut command = Command::new(&self.shell);
        command
            .current_dir(self.root.join(request.language))
            .arg(&self.script)
            .arg(request.benchmark)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());
        for (key, value) in launch_env(request.prefs) {
            command.env(key, value);
        }
        command
    }
}

impl BenchmarkLauncher for ScriptLauncher {
    fn launch(&mut self, request: &LaunchRequest<'_>) -> Result<(), LaunchError> {
        let cwd = self.root.join(request.language);
        let status = self
            .build_command(request)
            .status()
            .map_err(|source| LaunchError::Spawn {
                shell: self.shell.clone(),
                script: self.script.clone(),
                cwd: cwd.display().to_string(),
                source,
            })?;
        if status.success() {
            return Ok(());
        }
        Err(LaunchError::Failed {
            language: request.language.to_string(),
            benchmark: request.benchmark.to_string(),
            code: status.code(),
        })
    }
}
