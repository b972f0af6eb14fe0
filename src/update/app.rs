//! App message handlers (clipboard, downloads and their results)

use crate::commands::Cmd;
use crate::messages::Msg;
use crate::model::AppModel;

/// Handle output messages and side-effect completions
pub fn update_app(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    match msg {
        Msg::Copy => {
            if model.text().is_empty() {
                model.ui.set_status("Nothing to copy");
                return None;
            }
            model.ui.is_copying = true;
            Some(Cmd::CopyToClipboard {
                text: model.text().to_string(),
            })
        }

        Msg::Download { filename } => {
            if model.text().is_empty() {
                model.ui.set_status("Nothing to save");
                return None;
            }
            let path = model.config.download_path(filename.as_deref());
            model.ui.is_saving = true;
            model.ui.set_status("Saving...");
            Some(Cmd::SaveFile {
                path,
                content: model.text().to_string(),
            })
        }

        Msg::CopyCompleted(result) => {
            model.ui.is_copying = false;
            match result {
                Ok(()) => model.ui.set_status("Copied to clipboard"),
                Err(e) => model.ui.set_status(format!("Copy failed: {}", e)),
            }
            None
        }

        Msg::DownloadCompleted(result) => {
            model.ui.is_saving = false;
            match result {
                Ok(path) => model.ui.set_status(format!("Saved: {}", path.display())),
                Err(e) => model.ui.set_status(format!("Error: {}", e)),
            }
            None
        }

        other => {
            tracing::warn!("editing message routed to app handler: {}", other.name());
            None
        }
    }
}
