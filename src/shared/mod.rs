pub mod logging;

pub use logging::{append_log_line, SessionLog};
