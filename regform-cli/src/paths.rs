//! Where the CLI keeps its database and logs.

use std::path::PathBuf;

use directories::ProjectDirs;

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("dev", "regform", "regform")
}

/// `forms.db` in the platform data directory, shared by every persisted form.
pub fn forms_db() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.data_dir().join("forms.db"))
}

/// Directory for the daily log files, under the platform cache directory.
pub fn log_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.cache_dir().join("logs"))
}
