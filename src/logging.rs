//! Tracing setup for the Lambda binary.
//!
//! Lambda forwards stdout to CloudWatch, so every event goes there, either as compact text
//! or as JSON lines (`LOG_FORMAT=json`). Setting `UPLOAD_TO_SEARCH_LOG_FILE` mirrors events
//! into a file for local runs. Read [`LogSettings`] only after `.env` has been merged, see
//! [`crate::config::load_dotenv`].
use std::sync::OnceLock;

use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::{EnvFilter, Layer, fmt, prelude::*};

static FILE_GUARD: OnceLock<WorkerGuard> = OnceLock::new();

/// Output options taken from the environment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogSettings {
    /// Emit JSON lines on stdout instead of compact text.
    pub json: bool,
    /// File that additionally receives every event.
    pub file: Option<String>,
}

impl LogSettings {
    /// Read `LOG_FORMAT` and `UPLOAD_TO_SEARCH_LOG_FILE` from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let json = lookup("LOG_FORMAT")
            .is_some_and(|format| format.trim().eq_ignore_ascii_case("json"));
        let file = lookup("UPLOAD_TO_SEARCH_LOG_FILE")
            .map(|path| path.trim().to_string())
            .filter(|path| !path.is_empty());
        Self { json, file }
    }
}

/// Install the global subscriber. `RUST_LOG` filters events and defaults to `info`.
pub fn init_tracing(settings: &LogSettings) {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let stdout_layer = if settings.json {
        fmt::layer().json().with_current_span(false).boxed()
    } else {
        fmt::layer().with_target(false).compact().boxed()
    };
    let file_layer = settings.file.as_deref().and_then(open_file_writer).map(|writer| {
        fmt::layer()
            .with_writer(writer)
            .with_ansi(false)
            .compact()
    });

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stdout_layer)
        .with(file_layer)
        .init();
}

fn open_file_writer(path: &str) -> Option<NonBlocking> {
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .inspect_err(|err| eprintln!("Log file {path} unavailable, logging to stdout only: {err}"))
        .ok()?;
    let (writer, guard) = tracing_appender::non_blocking(file);
    let _ = FILE_GUARD.set(guard);
    Some(writer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn settings(pairs: &[(&str, &str)]) -> LogSettings {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        LogSettings::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_to_compact_stdout_only() {
        assert_eq!(settings(&[]), LogSettings::default());
    }

    #[test]
    fn reads_format_and_file() {
        let parsed = settings(&[
            ("LOG_FORMAT", " JSON "),
            ("UPLOAD_TO_SEARCH_LOG_FILE", "/tmp/upload.log"),
        ]);
        assert!(parsed.json);
        assert_eq!(parsed.file.as_deref(), Some("/tmp/upload.log"));
    }

    #[test]
    fn blank_file_path_is_ignored() {
        let parsed = settings(&[("LOG_FORMAT", "pretty"), ("UPLOAD_TO_SEARCH_LOG_FILE", "  ")]);
        assert!(!parsed.json);
        assert!(parsed.file.is_none());
    }

    #[test]
    fn dotenv_values_reach_log_settings() {
        let path = std::env::temp_dir().join(format!(
            "upload-to-search-logging-{}.env",
            std::process::id()
        ));
        std::fs::write(
            &path,
            "LOG_FORMAT=json\nUPLOAD_TO_SEARCH_LOG_FILE=/tmp/upload-to-search.log\n",
        )
        .expect("write env file");

        dotenvy::from_path_override(&path).expect("load env file");
        let parsed = LogSettings::from_env();
        let _ = std::fs::remove_file(&path);

        assert!(parsed.json);
        assert_eq!(parsed.file.as_deref(), Some("/tmp/upload-to-search.log"));
    }
}
