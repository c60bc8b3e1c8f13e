use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Best-effort JSON-lines log; every write failure is swallowed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionLog {
    path: Option<PathBuf>,
}

impl SessionLog {
    pub fn new(path: Option<PathBuf>) -> Self {
        Self { path }
    }

    pub fn disabled() -> Self {
        Self { path: None }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn info(&self, event: &str, message: &str) {
        self.append("info", event, message);
    }

    pub fn warn(&self, event: &str, message: &str) {
        self.append("warn", event, message);
    }

    pub fn error(&self, event: &str, message: &str) {
        self.append("error", event, message);
    }

    pub fn append(&self, level: &str, event: &str, message: &str) {
        if let Some(path) = &self.path {
            append_log_line(path, level, event, message);
        }
    }
}

pub fn append_log_line(path: &Path, level: &str, event: &str, message: &str) {
    let payload = serde_json::json!({
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "level": level,
        "event": event,
        "message": message,
    });

    let Ok(line) = serde_json::to_string(&payload) else {
        return;
    };

    if let Some(parent) = path.parent() {
        if fs::create_dir_all(parent).is_err() {
            return;
        }
    }
    let Ok(mut file) = fs::OpenOptions::new().create(true).append(true).open(path) else {
        return;
    };
    let _ = writeln!(file, "{line}");
}
