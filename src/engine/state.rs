//! TransformEngine - the text, its undo history and the active toggle.

use tracing::{debug, trace};

use crate::transforms::{CaseKind, CleanupKind};

use super::history::SnapshotHistory;

/// The case transform currently applied as a toggle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveToggle {
    /// Which transform is active
    pub kind: CaseKind,
    /// Text exactly as it was before the transform was applied
    pub pre_toggle_text: String,
}

/// What an engine operation did to the state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOutcome {
    /// The text changed and the previous text was pushed onto history
    Applied,
    /// An active toggle was switched off; history untouched
    Reverted,
    /// Preconditions unmet (empty text or empty history); nothing changed
    Unchanged,
}

impl EditOutcome {
    pub fn is_unchanged(self) -> bool {
        self == EditOutcome::Unchanged
    }
}

/// Owns the document text, the undo history and the active toggle slot.
///
/// All mutation goes through the methods below; nothing outside the engine
/// can touch the three fields directly.
#[derive(Debug, Clone, Default)]
pub struct TransformEngine {
    text: String,
    history: SnapshotHistory,
    active_toggle: Option<ActiveToggle>,
}

impl TransformEngine {
    /// Create an empty engine with the default history limit
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty engine with a history limit (0 = unbounded)
    pub fn with_history_limit(limit: usize) -> Self {
        Self {
            history: SnapshotHistory::with_max_size(limit),
            ..Self::default()
        }
    }

    // === Queries ===

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn history(&self) -> &SnapshotHistory {
        &self.history
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    pub fn active_toggle(&self) -> Option<&ActiveToggle> {
        self.active_toggle.as_ref()
    }

    /// Whether the toggle button for `kind` shows as active
    pub fn is_toggle_active(&self, kind: CaseKind) -> bool {
        self.active_toggle.as_ref().is_some_and(|t| t.kind == kind)
    }

    /// Whether transform and cleanup controls are enabled
    pub fn can_transform(&self) -> bool {
        !self.text.is_empty()
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    // === Operations ===

    /// Apply a case transform, or revert it if it is the active toggle.
    ///
    /// Toggle-on pushes the current text onto history; toggle-off restores
    /// the pre-toggle text without touching history.
    pub fn apply_case_transform<F>(&mut self, kind: CaseKind, transform: F) -> EditOutcome
    where
        F: FnOnce(&str) -> String,
    {
        // Toggle-off is checked first: a transform may produce empty text
        // and must still be revertible
        if let Some(toggle) = self.active_toggle.take_if(|t| t.kind == kind) {
            self.text = toggle.pre_toggle_text;
            debug!(%kind, history = self.history.len(), "toggle off");
            return EditOutcome::Reverted;
        }

        if self.text.is_empty() {
            trace!(%kind, "case transform skipped: empty text");
            return EditOutcome::Unchanged;
        }

        let transformed = transform(&self.text);
        let previous = std::mem::replace(&mut self.text, transformed);
        self.history.push(previous.clone());
        self.active_toggle = Some(ActiveToggle {
            kind,
            pre_toggle_text: previous,
        });
        debug!(%kind, history = self.history.len(), "toggle on");
        EditOutcome::Applied
    }

    /// Apply the registered transform for `kind` (see [`Self::apply_case_transform`])
    pub fn apply_case(&mut self, kind: CaseKind) -> EditOutcome {
        self.apply_case_transform(kind, kind.transform_fn())
    }

    /// Apply a cleanup rule. Only undo can revert it.
    pub fn apply_cleanup(&mut self, kind: CleanupKind) -> EditOutcome {
        if self.text.is_empty() {
            trace!(%kind, "cleanup skipped: empty text");
            return EditOutcome::Unchanged;
        }

        let cleaned = kind.apply(&self.text);
        let previous = std::mem::replace(&mut self.text, cleaned);
        self.history.push(previous);
        self.active_toggle = None;
        debug!(%kind, history = self.history.len(), "cleanup applied");
        EditOutcome::Applied
    }

    /// Restore the most recent snapshot
    pub fn undo(&mut self) -> EditOutcome {
        let Some(snapshot) = self.history.pop() else {
            trace!("undo skipped: empty history");
            return EditOutcome::Unchanged;
        };

        self.text = snapshot;
        self.active_toggle = None;
        debug!(history = self.history.len(), "undo");
        EditOutcome::Applied
    }

    /// Replace the text from direct typing. Not recorded in history.
    pub fn edit_text(&mut self, new_text: impl Into<String>) {
        self.text = new_text.into();
        if self.active_toggle.take().is_some() {
            trace!("manual edit cleared active toggle");
        }
    }

    /// Empty the workspace; undo brings the text back.
    ///
    /// Always pushes, even when the text is already empty.
    pub fn clear_workspace(&mut self) -> EditOutcome {
        let previous = std::mem::take(&mut self.text);
        self.history.push(previous);
        self.active_toggle = None;
        debug!(history = self.history.len(), "workspace cleared");
        EditOutcome::Applied
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine_with(text: &str) -> TransformEngine {
        let mut engine = TransformEngine::new();
        engine.edit_text(text);
        engine
    }

    #[test]
    fn test_new_engine_is_empty() {
        let engine = TransformEngine::new();
        assert_eq!(engine.text(), "");
        assert_eq!(engine.history_len(), 0);
        assert!(engine.active_toggle().is_none());
        assert!(!engine.can_transform());
        assert!(!engine.can_undo());
    }

    #[test]
    fn test_upper_toggle_scenario() {
        let mut engine = engine_with("Hello World");

        assert_eq!(engine.apply_case(CaseKind::Upper), EditOutcome::Applied);
        assert_eq!(engine.text(), "HELLO WORLD");
        assert_eq!(
            engine.active_toggle(),
            Some(&ActiveToggle {
                kind: CaseKind::Upper,
                pre_toggle_text: "Hello World".to_string(),
            })
        );

        assert_eq!(engine.apply_case(CaseKind::Upper), EditOutcome::Reverted);
        assert_eq!(engine.text(), "Hello World");
        assert!(engine.active_toggle().is_none());
        assert_eq!(engine.history().iter().collect::<Vec<_>>(), vec!["Hello World"]);
    }

    #[test]
    fn test_switching_kinds_pushes_transformed_text() {
        let mut engine = engine_with("Hello World");
        engine.apply_case(CaseKind::Upper);
        engine.apply_case(CaseKind::Snake);

        assert_eq!(engine.text(), "hello_world");
        assert_eq!(engine.history_len(), 2);
        let toggle = engine.active_toggle().unwrap();
        assert_eq!(toggle.kind, CaseKind::Snake);
        assert_eq!(toggle.pre_toggle_text, "HELLO WORLD");
        assert!(engine.is_toggle_active(CaseKind::Snake));
        assert!(!engine.is_toggle_active(CaseKind::Upper));

        // Reverting snake goes back to the uppercase text, not the original
        engine.apply_case(CaseKind::Snake);
        assert_eq!(engine.text(), "HELLO WORLD");
        assert_eq!(engine.history_len(), 2);
    }

    #[test]
    fn test_custom_transform_fn_is_used() {
        let mut engine = engine_with("abc");
        engine.apply_case_transform(CaseKind::Upper, |s| format!("<{}>", s));
        assert_eq!(engine.text(), "<abc>");
        engine.apply_case_transform(CaseKind::Upper, |_| unreachable!());
        assert_eq!(engine.text(), "abc");
    }

    #[test]
    fn test_cleanup_clears_toggle_and_pushes() {
        let mut engine = engine_with("b\na\nb");
        engine.apply_case(CaseKind::Upper);
        assert_eq!(engine.apply_cleanup(CleanupKind::DedupeLines), EditOutcome::Applied);

        assert_eq!(engine.text(), "B\nA");
        assert!(engine.active_toggle().is_none());
        assert_eq!(engine.history_len(), 2);

        // Upper is no longer active, so pressing it again applies it anew
        assert_eq!(engine.apply_case(CaseKind::Upper), EditOutcome::Applied);
        assert_eq!(engine.history_len(), 3);
    }

    #[test]
    fn test_undo_restores_and_clears_toggle() {
        let mut engine = engine_with("Hello");
        engine.apply_case(CaseKind::Lower);
        assert_eq!(engine.undo(), EditOutcome::Applied);

        assert_eq!(engine.text(), "Hello");
        assert!(engine.active_toggle().is_none());
        assert_eq!(engine.history_len(), 0);
        assert_eq!(engine.undo(), EditOutcome::Unchanged);
    }

    #[test]
    fn test_undo_after_toggle_off_goes_to_pre_toggle_text() {
        let mut engine = engine_with("Hello");
        engine.apply_case(CaseKind::Upper);
        engine.apply_case(CaseKind::Upper);
        engine.edit_text("Hello there");

        engine.undo();
        assert_eq!(engine.text(), "Hello");
    }

    #[test]
    fn test_edit_clears_toggle_keeps_history() {
        let mut engine = engine_with("abc");
        engine.apply_case(CaseKind::Upper);
        engine.edit_text("ABCD");

        assert!(engine.active_toggle().is_none());
        assert_eq!(engine.history_len(), 1);
        assert_eq!(engine.text(), "ABCD");
    }

    #[test]
    fn test_clear_workspace() {
        let mut engine = engine_with("keep me");
        engine.apply_case(CaseKind::Title);
        assert_eq!(engine.clear_workspace(), EditOutcome::Applied);

        assert_eq!(engine.text(), "");
        assert!(engine.active_toggle().is_none());
        assert_eq!(engine.history_len(), 2);

        engine.undo();
        assert_eq!(engine.text(), "Keep Me");
    }

    #[test]
    fn test_clear_empty_workspace_then_undo_restores_empty() {
        let mut engine = engine_with("abc");
        engine.apply_case(CaseKind::Upper);
        engine.edit_text("");

        assert_eq!(engine.clear_workspace(), EditOutcome::Applied);
        assert_eq!(engine.history_len(), 2);

        assert_eq!(engine.undo(), EditOutcome::Applied);
        assert_eq!(engine.text(), "");
        assert_eq!(engine.history_len(), 1);
    }

    #[test]
    fn test_toggle_to_empty_text_can_be_reverted() {
        let mut engine = engine_with("--");
        assert_eq!(engine.apply_case(CaseKind::Camel), EditOutcome::Applied);
        assert_eq!(engine.text(), "");
        assert!(engine.is_toggle_active(CaseKind::Camel));

        assert_eq!(engine.apply_case(CaseKind::Camel), EditOutcome::Reverted);
        assert_eq!(engine.text(), "--");
        assert!(engine.active_toggle().is_none());
        assert_eq!(engine.history_len(), 1);

        // Other kinds still respect the empty-text guard
        engine.apply_case(CaseKind::Camel);
        assert_eq!(engine.apply_case(CaseKind::Upper), EditOutcome::Unchanged);
        assert!(engine.is_toggle_active(CaseKind::Camel));
    }

    #[test]
    fn test_empty_text_guards() {
        let mut engine = TransformEngine::new();
        for kind in CaseKind::all() {
            assert_eq!(engine.apply_case(kind), EditOutcome::Unchanged);
        }
        for kind in CleanupKind::all() {
            assert_eq!(engine.apply_cleanup(kind), EditOutcome::Unchanged);
        }
        assert_eq!(engine.history_len(), 0);
        assert!(engine.active_toggle().is_none());
    }

    #[test]
    fn test_history_limit_applies() {
        let mut engine = TransformEngine::with_history_limit(2);
        engine.edit_text("a b");
        engine.apply_cleanup(CleanupKind::NumberLines);
        engine.apply_cleanup(CleanupKind::NumberLines);
        engine.apply_cleanup(CleanupKind::NumberLines);

        assert_eq!(engine.history_len(), 2);
        engine.undo();
        engine.undo();
        assert_eq!(engine.text(), "1. a b");
        assert!(!engine.can_undo());
    }
}
