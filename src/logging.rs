//! Log output selection.
//!
//! stdout carries the protocol, so logs go to a file or to stderr.

use std::fs::{File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset or invalid.
const DEFAULT_FILTER: &str = "info";

/// Where log lines are written.
#[derive(Debug)]
pub enum LogTarget {
    File { path: PathBuf, file: File },
    Stderr,
}

impl LogTarget {
    /// Open `path` for appending, creating it if needed, or fall back to stderr.
    ///
    /// Also returns the open error when the fallback was taken.
    pub fn select(path: Option<&Path>) -> (Self, Option<io::Error>) {
        let Some(path) = path.filter(|p| !p.as_os_str().is_empty()) else {
            return (LogTarget::Stderr, None);
        };

        match OpenOptions::new().create(true).append(true).open(path) {
            Ok(file) => (
                LogTarget::File {
                    path: path.to_path_buf(),
                    file,
                },
                None,
            ),
            Err(err) => (LogTarget::Stderr, Some(err)),
        }
    }

    fn into_writer(self) -> BoxMakeWriter {
        match self {
            LogTarget::File { file, .. } => BoxMakeWriter::new(Mutex::new(file)),
            LogTarget::Stderr => BoxMakeWriter::new(io::stderr),
        }
    }
}

/// Install the global tracing subscriber.
pub fn init(log_path: Option<&Path>) {
    let (target, open_error) = LogTarget::select(log_path);
    let destination = match &target {
        LogTarget::File { path, .. } => path.display().to_string(),
        LogTarget::Stderr => "stderr".to_string(),
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER)),
        )
        .with_writer(target.into_writer())
        .with_ansi(false)
        .init();

    if let (Some(path), Some(err)) = (log_path, open_error) {
        tracing::warn!(path = %path.display(), %err, "cannot open log file, logging to stderr");
    }
    tracing::debug!(%destination, "logging initialized");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_path_uses_stderr() {
        let (target, err) = LogTarget::select(None);
        assert!(matches!(target, LogTarget::Stderr));
        assert!(err.is_none());

        let (target, _) = LogTarget::select(Some(Path::new("")));
        assert!(matches!(target, LogTarget::Stderr));
    }

    #[test]
    fn unopenable_path_falls_back_to_stderr() {
        let path = std::env::temp_dir()
            .join("asm6502-lsp-missing-dir")
            .join("nested")
            .join("server.log");
        let (target, err) = LogTarget::select(Some(&path));
        assert!(matches!(target, LogTarget::Stderr));
        assert!(err.is_some());
    }

    #[test]
    fn writable_path_is_created() {
        let path = std::env::temp_dir().join(format!("asm6502-lsp-{}.log", std::process::id()));
        let _ = std::fs::remove_file(&path);

        let (target, err) = LogTarget::select(Some(&path));
        assert!(err.is_none());
        assert!(matches!(target, LogTarget::File { .. }));
        assert!(path.exists());

        let _ = std::fs::remove_file(&path);
    }
}
