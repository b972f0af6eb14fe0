//! Command types for the Elm-style architecture
//!
//! [`Cmd`] values are side effects to perform after an update. [`Operation`]
//! is the named, user-invocable subset of messages used by the CLI and the
//! interactive session.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use crate::messages::Msg;
use crate::transforms::{CaseKind, CleanupKind, CASE_TRANSFORMS, CLEANUPS};

/// Side effects requested by `update`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cmd {
    /// Write text to the system clipboard
    CopyToClipboard { text: String },
    /// Write text to a file
    SaveFile { path: PathBuf, content: String },
}

// ============================================================================
// Operation registry
// ============================================================================

/// An engine operation addressable by name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Case(CaseKind),
    Cleanup(CleanupKind),
    Undo,
    Clear,
}

impl Operation {
    /// All operations in display order
    pub fn all() -> impl Iterator<Item = Operation> {
        CaseKind::all()
            .map(Operation::Case)
            .chain(CleanupKind::all().map(Operation::Cleanup))
            .chain([Operation::Undo, Operation::Clear])
    }

    pub fn name(self) -> &'static str {
        match self {
            Operation::Case(kind) => kind.name(),
            Operation::Cleanup(kind) => kind.name(),
            Operation::Undo => "undo",
            Operation::Clear => "clear",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Operation::Case(kind) => kind.label(),
            Operation::Cleanup(kind) => kind.label(),
            Operation::Undo => "Undo",
            Operation::Clear => "Clear",
        }
    }

    pub fn to_msg(self) -> Msg {
        match self {
            Operation::Case(kind) => Msg::Case(kind),
            Operation::Cleanup(kind) => Msg::Cleanup(kind),
            Operation::Undo => Msg::Undo,
            Operation::Clear => Msg::Clear,
        }
    }

    /// Comma-separated list of every valid name, for error messages
    pub fn known_names() -> String {
        Operation::all()
            .map(Operation::name)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Operation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Some(def) = CASE_TRANSFORMS
            .iter()
            .find(|def| def.name.eq_ignore_ascii_case(s))
        {
            return Ok(Operation::Case(def.kind));
        }
        if let Some(def) = CLEANUPS.iter().find(|def| def.name.eq_ignore_ascii_case(s)) {
            return Ok(Operation::Cleanup(def.kind));
        }
        match s.to_ascii_lowercase().as_str() {
            "undo" => Ok(Operation::Undo),
            "clear" => Ok(Operation::Clear),
            _ => Err(format!(
                "unknown operation '{}' (expected one of: {})",
                s,
                Operation::known_names()
            )),
        }
    }
}
