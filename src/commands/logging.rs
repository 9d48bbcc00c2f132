//! File logging for the shell and the page.
//!
//! One log file per day in the app log directory, with a bounded number of
//! files retained. The page reports through `write_log`; shell code logs
//! through the `log` macros, which mirror here via `log_line`.

use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use chrono::Local;
use tauri::{command, AppHandle, Manager};

use crate::error::{ShellError, ShellResult};

/// Maximum number of log files to keep.
const MAX_LOG_FILES: usize = 5;

lazy_static::lazy_static! {
    /// Global log file handle.
    static ref LOG_FILE: Mutex<Option<File>> = Mutex::new(None);
}

/// Log levels matching the page side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogLevel::Debug => write!(f, "DEBUG"),
            LogLevel::Info => write!(f, "INFO"),
            LogLevel::Warn => write!(f, "WARN"),
            LogLevel::Error => write!(f, "ERROR"),
        }
    }
}

impl LogLevel {
    fn parse(level: &str) -> Self {
        match level.to_lowercase().as_str() {
            "debug" => LogLevel::Debug,
            "warn" | "warning" => LogLevel::Warn,
            "error" => LogLevel::Error,
            _ => LogLevel::Info,
        }
    }
}

/// Initialize file logging. Failure is absorbed by the caller; the shell
/// keeps running with console logging only.
pub fn init(app: &AppHandle) -> ShellResult<()> {
    let log_dir = app
        .path()
        .app_log_dir()
        .map_err(|e| ShellError::Other(format!("failed to resolve log directory: {e}")))?;

    fs::create_dir_all(&log_dir)?;

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(current_log_path(&log_dir))?;

    if let Ok(mut log_file) = LOG_FILE.lock() {
        *log_file = Some(file);
    }

    prune_logs(&log_dir, MAX_LOG_FILES);
    log_line(LogLevel::Info, "shell", "file logging initialized");
    Ok(())
}

/// Path of the current log file (one per day).
fn current_log_path(log_dir: &Path) -> PathBuf {
    let date = Local::now().format("%Y-%m-%d");
    log_dir.join(format!("todo-tray_{}.log", date))
}

fn format_line(level: LogLevel, source: &str, message: &str) -> String {
    let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S%.3f");
    format!("[{}] [{}] [{}] {}\n", timestamp, level, source, message)
}

/// Delete the oldest `.log` files beyond `keep`.
fn prune_logs(log_dir: &Path, keep: usize) {
    let Ok(entries) = fs::read_dir(log_dir) else {
        return;
    };

    let mut log_files: Vec<_> = entries
        .filter_map(|e| e.ok())
        .filter(|e| {
            e.path()
                .extension()
                .map(|ext| ext == "log")
                .unwrap_or(false)
        })
        .collect();

    // Newest first.
    log_files.sort_by(|a, b| {
        let a_time = a.metadata().and_then(|m| m.modified()).ok();
        let b_time = b.metadata().and_then(|m| m.modified()).ok();
        b_time.cmp(&a_time)
    });

    for file in log_files.into_iter().skip(keep) {
        let _ = fs::remove_file(file.path());
    }
}

/// Append a line to the log file, if one is open.
pub fn log_line(level: LogLevel, source: &str, message: &str) {
    let line = format_line(level, source, message);
    if let Ok(mut log_file) = LOG_FILE.lock() {
        if let Some(ref mut file) = *log_file {
            let _ = file.write_all(line.as_bytes());
            let _ = file.flush();
        }
    }
}

// ============================================================================
// Tauri Commands
// ============================================================================

/// Write a log message from the page.
#[command]
pub fn write_log(level: String, source: String, message: String) {
    let level = LogLevel::parse(&level);
    match level {
        LogLevel::Error => log::error!("[{}] {}", source, message),
        LogLevel::Warn => log::warn!("[{}] {}", source, message),
        LogLevel::Info => log::info!("[{}] {}", source, message),
        LogLevel::Debug => log::debug!("[{}] {}", source, message),
    }
    log_line(level, &source, &message);
}

/// Get the log directory path.
#[command]
pub fn get_log_dir(app: AppHandle) -> Result<String, String> {
    let log_dir = app
        .path()
        .app_log_dir()
        .map_err(|e| format!("failed to resolve log directory: {}", e))?;

    Ok(log_dir.to_string_lossy().to_string())
}
