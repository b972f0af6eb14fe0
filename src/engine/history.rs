//! Snapshot history (undo stack) for the transform engine.

/// Default number of snapshots kept
pub const DEFAULT_HISTORY_LIMIT: usize = 50;

/// Undo stack of full-text snapshots, oldest first.
///
/// There is no redo: an undo discards the snapshot it restores.
#[derive(Debug, Clone)]
pub struct SnapshotHistory {
    snapshots: Vec<String>,
    /// Maximum snapshots kept; 0 means unbounded
    max_size: usize,
}

impl Default for SnapshotHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl SnapshotHistory {
    /// Create a new history with the default limit
    pub fn new() -> Self {
        Self::with_max_size(DEFAULT_HISTORY_LIMIT)
    }

    /// Create a new history with the given limit (0 = unbounded)
    pub fn with_max_size(max_size: usize) -> Self {
        Self {
            snapshots: Vec::new(),
            max_size,
        }
    }

    /// Create a history without a size limit
    pub fn unbounded() -> Self {
        Self::with_max_size(0)
    }

    /// Push a snapshot, dropping the oldest ones past the limit
    pub fn push(&mut self, snapshot: String) {
        self.snapshots.push(snapshot);

        if self.max_size > 0 && self.snapshots.len() > self.max_size {
            let excess = self.snapshots.len() - self.max_size;
            self.snapshots.drain(..excess);
            tracing::trace!(dropped = excess, "history limit reached");
        }
    }

    /// Pop the most recent snapshot
    pub fn pop(&mut self) -> Option<String> {
        self.snapshots.pop()
    }

    /// Most recent snapshot without removing it
    pub fn peek(&self) -> Option<&str> {
        self.snapshots.last().map(String::as_str)
    }

    pub fn can_undo(&self) -> bool {
        !self.snapshots.is_empty()
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn max_size(&self) -> usize {
        self.max_size
    }

    pub fn clear(&mut self) {
        self.snapshots.clear();
    }

    /// Snapshots oldest first
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.snapshots.iter().map(String::as_str)
    }
}
