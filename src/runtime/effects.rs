//! Side-effect execution for [`Cmd`] values
//!
//! Effects run synchronously and report back through a completion message,
//! which the caller feeds into `update` like any other message.

use crate::commands::Cmd;
use crate::messages::Msg;

/// Destination for clipboard writes
pub trait Clipboard {
    fn set_text(&mut self, text: &str) -> Result<(), String>;
}

/// The system clipboard, via `arboard`
///
/// The handle is opened lazily on first use, so headless sessions that never
/// copy don't need a display server.
#[derive(Default)]
pub struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
    /// Block each write until another program takes the contents
    hold_until_pasted: bool,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep serving written text until it is pasted elsewhere.
    ///
    /// On Linux the clipboard contents are owned by the writing process and
    /// vanish when it exits, so a process that exits right after copying
    /// must wait. Other platforms ignore this.
    pub fn holding_until_pasted(mut self) -> Self {
        self.hold_until_pasted = true;
        self
    }

    pub fn holds_until_pasted(&self) -> bool {
        self.hold_until_pasted
    }
}

impl Clipboard for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), String> {
        if self.inner.is_none() {
            let clipboard = arboard::Clipboard::new().map_err(|e| e.to_string())?;
            self.inner = Some(clipboard);
        }
        let Some(clipboard) = self.inner.as_mut() else {
            return Err("clipboard unavailable".to_string());
        };
        write_clipboard(clipboard, text, self.hold_until_pasted).map_err(|e| e.to_string())
    }
}

#[cfg(target_os = "linux")]
fn write_clipboard(
    clipboard: &mut arboard::Clipboard,
    text: &str,
    hold_until_pasted: bool,
) -> Result<(), arboard::Error> {
    use arboard::SetExtLinux;

    if hold_until_pasted {
        tracing::debug!("holding clipboard until pasted");
        clipboard.set().wait().text(text)
    } else {
        clipboard.set_text(text)
    }
}

#[cfg(not(target_os = "linux"))]
fn write_clipboard(
    clipboard: &mut arboard::Clipboard,
    text: &str,
    _hold_until_pasted: bool,
) -> Result<(), arboard::Error> {
    clipboard.set_text(text)
}

/// Runs commands against a clipboard and the filesystem
pub struct Effects<C: Clipboard> {
    clipboard: C,
}

impl Effects<SystemClipboard> {
    /// Effects backed by the system clipboard
    pub fn system() -> Self {
        Self::new(SystemClipboard::new())
    }
}

impl<C: Clipboard> Effects<C> {
    pub fn new(clipboard: C) -> Self {
        Self { clipboard }
    }

    pub fn clipboard(&self) -> &C {
        &self.clipboard
    }

    /// Perform `cmd` and return the message describing its result
    pub fn execute(&mut self, cmd: Cmd) -> Msg {
        match cmd {
            Cmd::CopyToClipboard { text } => {
                let result = self.clipboard.set_text(&text);
                match &result {
                    Ok(()) => tracing::debug!(chars = text.chars().count(), "copied to clipboard"),
                    Err(e) => tracing::warn!("Clipboard write failed: {}", e),
                }
                Msg::CopyCompleted(result)
            }
            Cmd::SaveFile { path, content } => {
                let result = save_file(&path, &content).map(|()| path);
                match &result {
                    Ok(path) => tracing::info!("Saved {}", path.display()),
                    Err(e) => tracing::warn!("Save failed: {}", e),
                }
                Msg::DownloadCompleted(result)
            }
        }
    }
}

fn save_file(path: &std::path::Path, content: &str) -> Result<(), String> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .map_err(|e| format!("Failed to create {}: {}", parent.display(), e))?;
    }
    std::fs::write(path, content)
        .map_err(|e| format!("Failed to write {}: {}", path.display(), e))
}

/// Clipboard that records writes in memory
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    pub contents: Option<String>,
    /// When set, every write fails with this message
    pub fail_with: Option<String>,
}

impl Clipboard for MemoryClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), String> {
        if let Some(err) = &self.fail_with {
            return Err(err.clone());
        }
        self.contents = Some(text.to_string());
        Ok(())
    }
}
