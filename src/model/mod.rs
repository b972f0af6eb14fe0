//! Application model - the complete state of a casekit session
//!
//! Following the Elm Architecture pattern, the model is only mutated by
//! [`crate::update::update`].

pub mod ui;

pub use ui::UiState;

use crate::config::Config;
use crate::engine::{TextStats, TransformEngine};
use crate::transforms::CaseKind;

/// The complete application model
#[derive(Debug, Clone)]
pub struct AppModel {
    /// Text, undo history and active toggle
    pub engine: TransformEngine,
    /// Status line and pending side effects
    pub ui: UiState,
    /// Loaded configuration
    pub config: Config,
}

impl Default for AppModel {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl AppModel {
    /// Create an empty session using `config`
    pub fn new(config: Config) -> Self {
        Self {
            engine: TransformEngine::with_history_limit(config.history_limit),
            ui: UiState::new(),
            config,
        }
    }

    /// Create a session seeded with `text` (not recorded in history)
    pub fn with_text(config: Config, text: impl Into<String>) -> Self {
        let mut model = Self::new(config);
        model.engine.edit_text(text);
        model
    }

    pub fn text(&self) -> &str {
        self.engine.text()
    }

    /// Live stats readout for the current text
    pub fn stats(&self) -> TextStats {
        TextStats::of(self.engine.text())
    }

    /// Label of the active toggle, for highlighting its control
    pub fn active_toggle_label(&self) -> Option<&'static str> {
        self.engine.active_toggle().map(|t| t.kind.label())
    }

    /// Whether the control for `kind` should render as pressed
    pub fn is_pressed(&self, kind: CaseKind) -> bool {
        self.engine.is_toggle_active(kind)
    }
}
