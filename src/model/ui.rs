//! UI state - the transient status line

/// UI-only state that never feeds back into the engine
#[derive(Debug, Clone, Default)]
pub struct UiState {
    /// Last status message (e.g., "Converted to UPPERCASE")
    status_message: Option<String>,
    /// Whether a clipboard write is in flight
    pub is_copying: bool,
    /// Whether a file save is in flight
    pub is_saving: bool,
}

impl UiState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    pub fn status(&self) -> Option<&str> {
        self.status_message.as_deref()
    }

    /// Take the status message, leaving none (shown once, like a toast)
    pub fn take_status(&mut self) -> Option<String> {
        self.status_message.take()
    }

    /// Check if a side effect is pending
    pub fn is_busy(&self) -> bool {
        self.is_copying || self.is_saving
    }
}
