//! XDG-compliant log directory management
//!
//! Logs are stored in `$XDG_STATE_HOME/scribe/logs/` (typically
//! `~/.local/state/scribe/logs/`), one file per process so concurrent
//! editors never share a log. Old logs from earlier runs are removed on
//! startup.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use std::time::{Duration, SystemTime};

/// Minimum age for log files to be cleaned up (24 hours)
const CLEANUP_AGE: Duration = Duration::from_secs(24 * 60 * 60);

static LOG_DIR: OnceLock<PathBuf> = OnceLock::new();

/// Get the base log directory, creating it if necessary.
///
/// Falls back to the system temp directory when the XDG location cannot
/// be determined or created.
pub fn log_dir() -> &'static PathBuf {
    LOG_DIR.get_or_init(|| {
        let fallback = std::env::temp_dir().join("scribe-logs");
        let dir = xdg_log_dir().unwrap_or_else(|| fallback.clone());

        if let Err(e) = fs::create_dir_all(&dir) {
            tracing::warn!("Failed to create log directory {:?}: {}", dir, e);
            return fallback;
        }

        dir
    })
}

fn xdg_log_dir() -> Option<PathBuf> {
    if let Ok(state_home) = std::env::var("XDG_STATE_HOME") {
        let path = PathBuf::from(state_home);
        if path.is_absolute() {
            return Some(path.join("scribe").join("logs"));
        }
    }

    dirs::home_dir().map(|home| home.join(".local").join("state").join("scribe").join("logs"))
}

/// Log file for this process: `{log_dir}/scribe-{PID}.log`
pub fn main_log_path() -> PathBuf {
    log_dir().join(format!("scribe-{}.log", std::process::id()))
}

/// Remove log files older than a day, except this process's own.
pub fn cleanup_stale_logs() {
    cleanup_stale_logs_in_dir(log_dir(), std::process::id());
}

fn cleanup_stale_logs_in_dir(dir: &Path, current_pid: u32) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };

    for entry in entries.flatten() {
        let file_name = entry.file_name();
        let name = file_name.to_string_lossy();

        let Some(pid) = extract_pid_from_filename(&name) else {
            continue;
        };
        if pid == current_pid {
            continue;
        }

        if entry.file_type().map(|t| t.is_file()).unwrap_or(false)
            && is_file_older_than(&entry.path(), CLEANUP_AGE)
        {
            if let Err(e) = fs::remove_file(entry.path()) {
                tracing::debug!("Failed to clean up stale log {:?}: {}", entry.path(), e);
            } else {
                tracing::debug!("Cleaned up stale log file: {:?}", entry.path());
            }
        }
    }
}

fn is_file_older_than(path: &Path, age: Duration) -> bool {
    let Ok(modified) = fs::metadata(path).and_then(|m| m.modified()) else {
        return false;
    };

    SystemTime::now()
        .duration_since(modified)
        .map(|elapsed| elapsed > age)
        .unwrap_or(false)
}

/// Extract the PID from a name like "scribe-12345.log"
fn extract_pid_from_filename(name: &str) -> Option<u32> {
    name.strip_prefix("scribe-")?
        .strip_suffix(".log")?
        .parse()
        .ok()
}

/// Print the directories and files the editor uses to stdout
pub fn print_all_paths() {
    use std::io::Write;

    let stdout = std::io::stdout();
    let mut handle = stdout.lock();

    let config_dir = dirs::config_dir()
        .map(|d| d.join("scribe"))
        .unwrap_or_else(|| PathBuf::from("<unavailable>"));

    writeln!(handle, "Scribe directories:").ok();
    writeln!(handle).ok();
    writeln!(handle, "Config:     {}", config_dir.display()).ok();
    writeln!(
        handle,
        "  config.json:  {}",
        config_dir.join("config.json").display()
    )
    .ok();
    writeln!(
        handle,
        "  themes/:      {}",
        config_dir.join("themes").display()
    )
    .ok();
    writeln!(handle).ok();
    writeln!(handle, "Logs:       {}", log_dir().display()).ok();
    writeln!(handle, "  this run:     {}", main_log_path().display()).ok();
}
