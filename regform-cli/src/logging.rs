//! File logging for the CLI.
//!
//! Each day gets its own `regform-YYYY-MM-DD.log` and runs on the same day
//! append to it. Only the newest [`KEEP_DAYS`] daily files are kept.

use std::fs::{self, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::NaiveDate;
use simplelog::{Config, LevelFilter, WriteLogger};

const PREFIX: &str = "regform-";
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Number of daily log files left after pruning.
pub const KEEP_DAYS: usize = 7;

/// Install the file logger under `dir` and prune old daily files.
///
/// Returns the path of today's log.
pub fn init(dir: &Path, verbose: bool) -> Result<PathBuf> {
    fs::create_dir_all(dir).with_context(|| format!("failed to create {}", dir.display()))?;

    let path = dir.join(file_name(chrono::Local::now().date_naive()));
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("failed to open {}", path.display()))?;

    let level = if verbose { LevelFilter::Debug } else { LevelFilter::Info };
    WriteLogger::init(level, Config::default(), file).context("failed to install logger")?;

    match prune(dir, KEEP_DAYS) {
        Ok(0) => {}
        Ok(removed) => log::debug!("removed {} old log files", removed),
        Err(e) => log::warn!("failed to prune logs in {}: {}", dir.display(), e),
    }
    Ok(path)
}

fn file_name(day: NaiveDate) -> String {
    format!("{}{}.log", PREFIX, day.format(DATE_FORMAT))
}

fn log_day(name: &str) -> Option<NaiveDate> {
    let date = name.strip_prefix(PREFIX)?.strip_suffix(".log")?;
    NaiveDate::parse_from_str(date, DATE_FORMAT).ok()
}

/// Delete all but the `keep` newest daily logs in `dir`.
///
/// Files that are not daily logs are left alone. Returns how many were removed.
fn prune(dir: &Path, keep: usize) -> io::Result<usize> {
    let mut logs = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if let Some(day) = entry.file_name().to_str().and_then(log_day) {
            logs.push((day, entry.path()));
        }
    }

    // Newest first
    logs.sort_unstable_by(|a, b| b.0.cmp(&a.0));

    let mut removed = 0;
    for (_, path) in logs.into_iter().skip(keep) {
        fs::remove_file(path)?;
        removed += 1;
    }
    Ok(removed)
}
