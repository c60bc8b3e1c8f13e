use std::path::PathBuf;

pub const STATE_DIR: &str = ".benchmark_runner";
pub const SESSION_LOG_FILE_NAME: &str = "logs/session.log";

pub const CONFIG_ENV: &str = "BENCHMARK_RUNNER_CONFIG";
pub const ROOT_ENV: &str = "BENCHMARK_RUNNER_ROOT";
pub const SCRIPT_KEYS_ENV: &str = "BENCHMARK_RUNNER_SCRIPT_KEYS";

pub fn default_log_path(home: Option<&str>) -> Option<PathBuf> {
    let home = home.filter(|value| !value.trim().is_empty())?;
    Some(
        PathBuf::from(home)
            .join(STATE_DIR)
            .join(SESSION_LOG_FILE_NAME),
    )
}
