//! File logger behind the `log` facade.
//!
//! Level precedence: the `--log-level` CLI flag, then `RUST_LOG` (a plain
//! level name such as `debug`), then `DEBUG_LEVEL`:
//! - 0 or unset: Off
//! - 1: Errors only
//! - 2: Info
//! - 3: Debug
//! - 4: Trace
//!
//! Output goes to `par_term_profile_editor.log` in the system temp
//! directory. When `RUST_LOG` is set, records are mirrored to stderr too.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use std::sync::OnceLock;
use std::time::{SystemTime, UNIX_EPOCH};

use log::{LevelFilter, Log, Metadata, Record};
use parking_lot::Mutex;

struct FileLogger {
    level: LevelFilter,
    file: Mutex<Option<File>>,
    mirror_stderr: bool,
}

impl Log for FileLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format!(
            "[{}] [{:<5}] [{}] {}\n",
            timestamp(),
            record.level(),
            record.target(),
            record.args()
        );
        if let Some(file) = self.file.lock().as_mut() {
            let _ = file.write_all(line.as_bytes());
        }
        if self.mirror_stderr {
            eprint!("{}", line);
        }
    }

    fn flush(&self) {
        if let Some(file) = self.file.lock().as_mut() {
            let _ = file.flush();
        }
    }
}

static LOGGER: OnceLock<FileLogger> = OnceLock::new();

/// Path of the log file
pub fn log_path() -> PathBuf {
    std::env::temp_dir().join("par_term_profile_editor.log")
}

/// Install the file logger. Later calls are ignored.
pub fn init_log_bridge(level_override: Option<LevelFilter>) {
    let rust_log = std::env::var("RUST_LOG").ok();
    let level = level_override
        .or_else(|| rust_log.as_deref().and_then(|v| v.trim().parse().ok()))
        .unwrap_or_else(level_from_debug_env);

    let file = if level == LevelFilter::Off {
        None
    } else {
        // Logging must never stop the tool, so an unopenable file is ignored
        OpenOptions::new()
            .write(true)
            .truncate(true)
            .create(true)
            .open(log_path())
            .ok()
    };

    let logger = LOGGER.get_or_init(|| FileLogger {
        level,
        file: Mutex::new(file),
        mirror_stderr: rust_log.is_some(),
    });
    if log::set_logger(logger).is_ok() {
        log::set_max_level(logger.level);
    }
}

fn level_from_debug_env() -> LevelFilter {
    match std::env::var("DEBUG_LEVEL")
        .ok()
        .and_then(|v| v.trim().parse::<u8>().ok())
    {
        Some(1) => LevelFilter::Error,
        Some(2) => LevelFilter::Info,
        Some(3) => LevelFilter::Debug,
        Some(4) => LevelFilter::Trace,
        _ => LevelFilter::Off,
    }
}

fn timestamp() -> String {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    format!("{}.{:06}", now.as_secs(), now.subsec_micros())
}
