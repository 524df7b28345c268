//! Logging setup for the demo binaries
//!
//! Plain text goes through `env_logger`; a `json:` level prefix switches to
//! one JSON object per line. Both write to stderr so stdout carries only
//! program output.

use chrono::{Local, Utc};
use log::{Level, LevelFilter, Log, Metadata, Record};
use serde_json::json;
use std::env;
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::sync::Mutex;

/// Environment variable holding the log level
pub const LOG_LEVEL_ENV: &str = "FALLIBLE_LOG_LEVEL";

/// Environment variable naming a file for JSON log lines
pub const LOG_PATH_ENV: &str = "FALLIBLE_LOG_PATH";

const DEFAULT_LEVEL: &str = "warn";

/// JSON logger implementation
#[derive(Debug)]
pub struct JsonLogger {
    level: Level,
    target_file: Mutex<Option<std::fs::File>>,
}

impl JsonLogger {
    pub fn new(level: Level, log_path: Option<String>) -> Self {
        let target_file = log_path
            .and_then(|path| OpenOptions::new().create(true).append(true).open(path).ok());

        JsonLogger {
            level,
            target_file: Mutex::new(target_file),
        }
    }

    /// Initialize logging from a level string such as `debug` or `json:trace`.
    ///
    /// Returns the effective level name.
    pub fn init_with_level(level_str: &str) -> String {
        let (use_json, actual_level) = split_level(level_str);
        let filter = parse_filter(actual_level);

        if !use_json {
            let result = env_logger::Builder::new()
                .filter_level(filter)
                .target(env_logger::Target::Stderr)
                .format(|buf, record| {
                    writeln!(
                        buf,
                        "[{} {} {}] {}",
                        Local::now().format("%Y-%m-%dT%H:%M:%S"),
                        record.level(),
                        record.target(),
                        record.args()
                    )
                })
                .try_init();
            if let Err(e) = result {
                eprintln!("Failed to initialize logger: {e}");
            }
            return actual_level.to_string();
        }

        let Some(level) = filter.to_level() else {
            log::set_max_level(LevelFilter::Off);
            return actual_level.to_string();
        };

        let logger = Box::new(JsonLogger::new(level, env::var(LOG_PATH_ENV).ok()));
        if let Err(e) = log::set_boxed_logger(logger) {
            eprintln!("Failed to initialize JSON logger: {e}");
            return actual_level.to_string();
        }

        log::set_max_level(filter);
        actual_level.to_string()
    }

    /// Initialize from `FALLIBLE_LOG_LEVEL`, defaulting to `warn`
    pub fn init() -> String {
        let level = env::var(LOG_LEVEL_ENV).unwrap_or_else(|_| DEFAULT_LEVEL.to_string());
        Self::init_with_level(&level)
    }

    /// Initialize from an explicit level if given, else from the environment
    pub fn init_from(level: Option<&str>) -> String {
        match level {
            Some(level) => Self::init_with_level(level),
            None => Self::init(),
        }
    }
}

impl Log for JsonLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let log_entry = json!({
            "@timestamp": Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Micros, true),
            "@level": record.level().to_string().to_lowercase(),
            "@message": record.args().to_string(),
            "@module": record.target(),
            "@pid": std::process::id(),
            "@file": record.file().unwrap_or("unknown"),
            "@line": record.line().unwrap_or(0),
        });

        let line = format!("{}\n", serde_json::to_string(&log_entry).unwrap_or_default());

        if let Ok(mut guard) = self.target_file.lock() {
            if let Some(ref mut file) = *guard {
                let _ = file.write_all(line.as_bytes());
                let _ = file.flush();
                return;
            }
        }

        let _ = io::stderr().write_all(line.as_bytes());
        let _ = io::stderr().flush();
    }

    fn flush(&self) {
        if let Ok(mut guard) = self.target_file.lock() {
            if let Some(ref mut file) = *guard {
                let _ = file.flush();
            }
        }
        let _ = io::stderr().flush();
    }
}

/// Split `json:debug` into `(true, "debug")`; bare `json` means `info`
fn split_level(level_str: &str) -> (bool, &str) {
    if let Some(stripped) = level_str.strip_prefix("json:") {
        (true, stripped)
    } else if level_str == "json" {
        (true, "info")
    } else {
        (false, level_str)
    }
}

fn parse_filter(level: &str) -> LevelFilter {
    match level.to_lowercase().as_str() {
        "trace" => LevelFilter::Trace,
        "debug" => LevelFilter::Debug,
        "info" => LevelFilter::Info,
        "warn" => LevelFilter::Warn,
        "error" => LevelFilter::Error,
        "off" => LevelFilter::Off,
        _ => LevelFilter::Warn,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_split_level() {
        assert_eq!(split_level("debug"), (false, "debug"));
        assert_eq!(split_level("json:trace"), (true, "trace"));
        assert_eq!(split_level("json"), (true, "info"));
    }

    #[test]
    fn test_parse_filter() {
        assert_eq!(parse_filter("trace"), LevelFilter::Trace);
        assert_eq!(parse_filter("ERROR"), LevelFilter::Error);
        assert_eq!(parse_filter("off"), LevelFilter::Off);
        assert_eq!(parse_filter("bogus"), LevelFilter::Warn);
    }

    #[test]
    fn test_json_lines_to_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("log.jsonl");
        let logger = JsonLogger::new(Level::Info, Some(path.display().to_string()));

        logger.log(
            &Record::builder()
                .level(Level::Info)
                .target("fallible::test")
                .args(format_args!("opened {}", "a.txt"))
                .build(),
        );
        logger.log(
            &Record::builder()
                .level(Level::Debug)
                .args(format_args!("filtered"))
                .build(),
        );
        logger.flush();

        let contents = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<_> = contents.lines().collect();
        assert_eq!(lines.len(), 1);

        let entry: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(entry["@level"], "info");
        assert_eq!(entry["@message"], "opened a.txt");
        assert_eq!(entry["@module"], "fallible::test");
    }
}
