//! Message types for the Elm-style architecture
//!
//! All state changes flow through these message types.

use std::path::PathBuf;

use crate::transforms::{CaseKind, CleanupKind};

/// Everything a user (or a completed side effect) can do to the model
#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    // === Engine operations ===
    /// Toggle a case transform on or off
    Case(CaseKind),
    /// Apply a cleanup rule
    Cleanup(CleanupKind),
    /// Restore the previous snapshot
    Undo,
    /// Replace the text (direct typing)
    Edit(String),
    /// Empty the workspace
    Clear,

    // === Outputs ===
    /// Copy the current text to the clipboard
    Copy,
    /// Save the current text to a file (default name from config)
    Download { filename: Option<String> },

    // === Side-effect results ===
    /// Clipboard write finished
    CopyCompleted(Result<(), String>),
    /// File save finished
    DownloadCompleted(Result<PathBuf, String>),
}

impl Msg {
    /// Check if this message goes through the engine
    pub fn is_editing(&self) -> bool {
        matches!(
            self,
            Msg::Case(_) | Msg::Cleanup(_) | Msg::Undo | Msg::Edit(_) | Msg::Clear
        )
    }

    /// Short name for logs
    pub fn name(&self) -> String {
        match self {
            Msg::Case(kind) => format!("Case({})", kind),
            Msg::Cleanup(kind) => format!("Cleanup({})", kind),
            Msg::Undo => "Undo".to_string(),
            Msg::Edit(_) => "Edit".to_string(),
            Msg::Clear => "Clear".to_string(),
            Msg::Copy => "Copy".to_string(),
            Msg::Download { .. } => "Download".to_string(),
            Msg::CopyCompleted(_) => "CopyCompleted".to_string(),
            Msg::DownloadCompleted(_) => "DownloadCompleted".to_string(),
        }
    }
}
