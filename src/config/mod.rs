pub mod error;
pub mod load;
pub mod paths;
pub mod settings;

pub use error::ConfigError;
pub use load::{load_settings, load_settings_with, scripted_keys};
pub use paths::{
    default_log_path, CONFIG_ENV, ROOT_ENV, SCRIPT_KEYS_ENV, SESSION_LOG_FILE_NAME, STATE_DIR,
};
pub use settings::{Settings, DEFAULT_LAUNCHER_SCRIPT, DEFAULT_RESERVED_DIR, DEFAULT_SHELL};
