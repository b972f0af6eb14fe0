//! Engine message handlers (case transforms, cleanups, undo, edits)

use crate::commands::Cmd;
use crate::engine::EditOutcome;
use crate::messages::Msg;
use crate::model::AppModel;

/// Handle messages that go through the transform engine
///
/// Engine operations never produce side effects, so this always returns
/// `None`; the status line reports what happened.
pub fn update_document(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    match msg {
        Msg::Case(kind) => match model.engine.apply_case(kind) {
            EditOutcome::Applied => model
                .ui
                .set_status(format!("Converted to {}", kind.label())),
            EditOutcome::Reverted => model.ui.set_status(format!("Reverted {}", kind.label())),
            EditOutcome::Unchanged => model.ui.set_status("Nothing to convert"),
        },

        Msg::Cleanup(kind) => match model.engine.apply_cleanup(kind) {
            EditOutcome::Unchanged => model.ui.set_status("Nothing to clean up"),
            _ => model.ui.set_status(format!("Applied {}", kind.label())),
        },

        Msg::Undo => match model.engine.undo() {
            EditOutcome::Unchanged => model.ui.set_status("Nothing to undo"),
            _ => model.ui.set_status(format!(
                "Undone ({} step{} left)",
                model.engine.history_len(),
                if model.engine.history_len() == 1 { "" } else { "s" }
            )),
        },

        Msg::Edit(text) => {
            // Typing is silent; no status message
            model.engine.edit_text(text);
        }

        Msg::Clear => {
            model.engine.clear_workspace();
            model.ui.set_status("Cleared");
        }

        other => {
            tracing::warn!("non-editing message routed to document handler: {}", other.name());
        }
    }

    None
}
