//! Tracing setup for diagnostics
//!
//! Configure console output via the RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=casekit::engine=trace` - engine transitions including no-ops
//!
//! # Log Files
//!
//! Logs are written to `~/.config/casekit/logs/casekit.log` with daily rotation.
//! File logging uses debug level regardless of RUST_LOG.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::config_paths::LOG_FILE_PREFIX;
use crate::engine::TransformEngine;
use crate::transforms::CaseKind;

/// Initialize tracing subscriber with console and file logging
///
/// Console output goes to stderr so it never mixes with converted text on
/// stdout.
pub fn init() {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    let file_layer = match crate::config_paths::ensure_logs_dir() {
        Ok(logs_dir) => {
            let file_appender = tracing_appender::rolling::daily(logs_dir, LOG_FILE_PREFIX);
            Some(
                fmt::layer()
                    .with_writer(file_appender)
                    .with_ansi(false)
                    .with_target(true)
                    .with_line_number(true)
                    .with_filter(EnvFilter::new("debug")),
            )
        }
        Err(e) => {
            eprintln!("Warning: Could not initialize file logging: {}", e);
            None
        }
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();
}

/// Lightweight snapshot of engine state for diffing around an update
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineSnapshot {
    pub text_len: usize,
    pub history_len: usize,
    pub active_toggle: Option<CaseKind>,
}

impl EngineSnapshot {
    pub fn from_engine(engine: &TransformEngine) -> Self {
        Self {
            text_len: engine.text().chars().count(),
            history_len: engine.history_len(),
            active_toggle: engine.active_toggle().map(|t| t.kind),
        }
    }

    /// Describe what changed between two snapshots
    pub fn diff(&self, other: &EngineSnapshot) -> Option<String> {
        let mut changes = Vec::new();

        if self.text_len != other.text_len {
            changes.push(format!("text: {} → {} chars", self.text_len, other.text_len));
        }
        if self.history_len != other.history_len {
            changes.push(format!(
                "history: {} → {}",
                self.history_len, other.history_len
            ));
        }
        if self.active_toggle != other.active_toggle {
            let name = |kind: Option<CaseKind>| kind.map_or("none", CaseKind::name);
            changes.push(format!(
                "toggle: {} → {}",
                name(self.active_toggle),
                name(other.active_toggle)
            ));
        }

        if changes.is_empty() {
            None
        } else {
            Some(changes.join("; "))
        }
    }
}
