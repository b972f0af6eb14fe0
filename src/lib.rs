//! casekit - case conversion and line cleanup for plain text
//!
//! The core is [`engine::TransformEngine`]: a text buffer with a bounded undo
//! history and a single "active toggle" slot, so the last case transform can
//! be reverted by applying it again. Around it sits a small Elm-style layer
//! (messages, update, commands) that the CLI and interactive session drive.

pub mod cli;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod engine;
pub mod input;
pub mod messages;
pub mod model;
pub mod runtime;
pub mod tracing;
pub mod transforms;
pub mod update;

// Re-export commonly used types
pub use commands::{Cmd, Operation};
pub use config::Config;
pub use engine::{EditOutcome, TransformEngine};
pub use messages::Msg;
pub use model::AppModel;
pub use transforms::{CaseKind, CleanupKind};
