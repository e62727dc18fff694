use std::sync::OnceLock;
use chrono::Local;

static LOGGER: OnceLock<Logger> = OnceLock::new();

pub struct Logger {
    prefix: Option<String>,
}

impl Logger {
    fn new(prefix: Option<String>) -> Self {
        Self { prefix }
    }

    pub fn log(&self, file: &str, line: u32, message: &str) {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S%.3f").to_string();
        eprintln!("{}", format_line(&timestamp, self.prefix.as_deref(), file, line, message));
    }
}

// Stdout belongs to the board renderer, so log lines go to stderr.
fn format_line(timestamp: &str, prefix: Option<&str>, file: &str, line: u32, message: &str) -> String {
    let file_name = file.rsplit(['/', '\\']).next().unwrap_or(file);
    match prefix {
        Some(prefix) => format!("[{}][{}][{}:{}] {}", timestamp, prefix, file_name, line, message),
        None => format!("[{}][{}:{}] {}", timestamp, file_name, line, message),
    }
}

pub fn init_logger(prefix: Option<String>) {
    LOGGER.get_or_init(|| Logger::new(prefix));
}

/// Messages logged before `init_logger` are dropped; the engine is usable as a
/// library without installing a logger.
pub fn log(file: &str, line: u32, message: &str) {
    if let Some(logger) = LOGGER.get() {
        logger.log(file, line, message);
    }
}

#[macro_export]
macro_rules! log {
    ($($arg:tt)*) => {
        $crate::logger::log(file!(), line!(), &format!($($arg)*))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_line_strips_directories() {
        let line = format_line("2026-01-01 10:00:00.000", None, "engine/src/session.rs", 42, "hello");

        assert_eq!(line, "[2026-01-01 10:00:00.000][session.rs:42] hello");
    }

    #[test]
    fn test_format_line_with_prefix() {
        let line = format_line("ts", Some("Console"), "C:\\xo\\board.rs", 7, "msg");

        assert_eq!(line, "[ts][Console][board.rs:7] msg");
    }
}
