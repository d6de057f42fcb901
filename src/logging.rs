use std::{
    fs::{self, OpenOptions},
    path::{Path, PathBuf},
    sync::Mutex,
};

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::{DEFAULT_LOG_FILTER, DESKTOP_LOG_FILE};

pub fn resolve_desktop_log_path(log_dir: &Path) -> PathBuf {
    log_dir.join(DESKTOP_LOG_FILE)
}

/// Installs the global subscriber: stderr always, plus an append-only log
/// file when `log_dir` is usable.
pub fn init_logging(log_dir: Option<&Path>) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    let mut file_error = None;
    let file_layer = log_dir.and_then(|dir| match open_log_file(dir) {
        Ok(file) => Some(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .boxed(),
        ),
        Err(error) => {
            file_error = Some(error);
            None
        }
    });

    let installed = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .with(file_layer)
        .try_init()
        .is_ok();

    if installed {
        if let Some(error) = file_error {
            tracing::warn!("desktop log file unavailable: {error}");
        }
    }
}

fn open_log_file(log_dir: &Path) -> Result<fs::File, String> {
    fs::create_dir_all(log_dir).map_err(|error| {
        format!(
            "Failed to create log directory {}: {}",
            log_dir.display(),
            error
        )
    })?;
    let path = resolve_desktop_log_path(log_dir);
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .map_err(|error| format!("Failed to open desktop log {}: {}", path.display(), error))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_log_file_creates_missing_directories() {
        let dir = tempfile::tempdir().expect("temp dir");
        let log_dir = dir.path().join("nested").join("logs");

        open_log_file(&log_dir).expect("log file should open");
        assert!(resolve_desktop_log_path(&log_dir).is_file());
    }
}
