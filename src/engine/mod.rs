//! Text transform engine with toggle-revert and bounded undo.
//!
//! # Architecture
//!
//! - [`TransformEngine`]: owns the document text, the undo history and the
//!   single active toggle slot. Every mutation is one of its operations.
//! - [`SnapshotHistory`]: the undo stack of full-text snapshots.
//! - [`TextStats`]: word/character/line readout for the current text.
//!
//! # Example
//!
//! ```
//! use casekit::engine::TransformEngine;
//! use casekit::transforms::CaseKind;
//!
//! let mut engine = TransformEngine::new();
//! engine.edit_text("Hello World");
//!
//! engine.apply_case(CaseKind::Upper);
//! assert_eq!(engine.text(), "HELLO WORLD");
//!
//! // Pressing the same button again reverts without growing history
//! engine.apply_case(CaseKind::Upper);
//! assert_eq!(engine.text(), "Hello World");
//! assert_eq!(engine.history_len(), 1);
//! ```

mod history;
mod state;
mod stats;

pub use history::{SnapshotHistory, DEFAULT_HISTORY_LIMIT};
pub use state::{ActiveToggle, EditOutcome, TransformEngine};
pub use stats::TextStats;
