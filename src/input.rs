//! Loading input text
//!
//! Files are validated before reading:
//! - existence and permissions
//! - size limit
//! - binary content (null bytes near the start)

use std::fs::{self, File};
use std::io::{self, Read};
use std::path::Path;

/// Maximum input size in bytes (50 MB)
pub const MAX_INPUT_SIZE: u64 = 50 * 1024 * 1024;

/// How many leading bytes are scanned for null bytes
const BINARY_SNIFF_LEN: usize = 8192;

/// Errors that can occur when loading input text
#[derive(Debug, Clone, PartialEq)]
pub enum InputError {
    /// File does not exist
    NotFound,
    /// Permission denied to read file
    PermissionDenied,
    /// Path is a directory, not a file
    IsDirectory,
    /// Content appears to be binary (contains null bytes)
    Binary,
    /// Content is not valid UTF-8
    InvalidUtf8,
    /// Input exceeds the size limit
    TooLarge { size_mb: f64 },
    /// Other I/O error
    Io(String),
}

impl InputError {
    /// Get a user-friendly error message
    pub fn user_message(&self, source: &str) -> String {
        match self {
            Self::NotFound => format!("File not found: {}", source),
            Self::PermissionDenied => format!("Permission denied: {}", source),
            Self::IsDirectory => format!("Cannot read directory: {}", source),
            Self::Binary => format!("Cannot convert binary data: {}", source),
            Self::InvalidUtf8 => format!("{} is not valid UTF-8 text", source),
            Self::TooLarge { size_mb } => format!(
                "{} is too large ({:.1} MB, max {} MB)",
                source,
                size_mb,
                MAX_INPUT_SIZE / (1024 * 1024)
            ),
            Self::Io(msg) => format!("Error reading {}: {}", source, msg),
        }
    }

    fn from_io(e: io::Error) -> Self {
        match e.kind() {
            io::ErrorKind::NotFound => Self::NotFound,
            io::ErrorKind::PermissionDenied => Self::PermissionDenied,
            io::ErrorKind::InvalidData => Self::InvalidUtf8,
            _ => Self::Io(e.to_string()),
        }
    }
}

impl std::fmt::Display for InputError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound => write!(f, "file not found"),
            Self::PermissionDenied => write!(f, "permission denied"),
            Self::IsDirectory => write!(f, "is a directory"),
            Self::Binary => write!(f, "binary data"),
            Self::InvalidUtf8 => write!(f, "invalid UTF-8"),
            Self::TooLarge { size_mb } => write!(f, "input too large ({:.1} MB)", size_mb),
            Self::Io(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for InputError {}

fn too_large(len: u64) -> InputError {
    InputError::TooLarge {
        size_mb: len as f64 / (1024.0 * 1024.0),
    }
}

/// Validate a file before attempting to read it
///
/// Does NOT check for binary content (use `is_likely_binary` after this passes)
pub fn validate_file(path: &Path) -> Result<(), InputError> {
    let metadata = fs::metadata(path).map_err(InputError::from_io)?;

    if metadata.is_dir() {
        return Err(InputError::IsDirectory);
    }

    if metadata.len() > MAX_INPUT_SIZE {
        return Err(too_large(metadata.len()));
    }

    Ok(())
}

/// Check if a file is likely binary by scanning its first 8KB for null bytes
///
/// Returns `false` on any read error (let the actual read fail with a better error).
pub fn is_likely_binary(path: &Path) -> bool {
    let Ok(mut file) = File::open(path) else {
        return false;
    };

    let mut buffer = [0u8; BINARY_SNIFF_LEN];
    let Ok(bytes_read) = file.read(&mut buffer) else {
        return false;
    };

    buffer[..bytes_read].contains(&0)
}

/// Validate and read a text file
pub fn read_text_file(path: &Path) -> Result<String, InputError> {
    validate_file(path)?;
    if is_likely_binary(path) {
        return Err(InputError::Binary);
    }
    let text = fs::read_to_string(path).map_err(InputError::from_io)?;
    tracing::debug!(bytes = text.len(), "read input from {}", path.display());
    Ok(text)
}

/// Read all text from `reader`, applying the same size and binary checks
pub fn read_text<R: Read>(reader: R) -> Result<String, InputError> {
    let mut bytes = Vec::new();
    reader
        .take(MAX_INPUT_SIZE + 1)
        .read_to_end(&mut bytes)
        .map_err(InputError::from_io)?;

    if bytes.len() as u64 > MAX_INPUT_SIZE {
        return Err(too_large(bytes.len() as u64));
    }
    if bytes[..bytes.len().min(BINARY_SNIFF_LEN)].contains(&0) {
        return Err(InputError::Binary);
    }
    String::from_utf8(bytes).map_err(|_| InputError::InvalidUtf8)
}

/// Split off one trailing line ending so line-based rules don't see a
/// phantom empty last line. Returns the text and the ending that was removed.
pub fn strip_trailing_newline(mut text: String) -> (String, Option<&'static str>) {
    let ending = if text.ends_with("\r\n") {
        "\r\n"
    } else if text.ends_with('\n') {
        "\n"
    } else {
        return (text, None);
    };
    text.truncate(text.len() - ending.len());
    (text, Some(ending))
}

/// Get the filename from a path for display in error messages
pub fn filename_for_display(path: &Path) -> String {
    path.file_name()
        .unwrap_or_default()
        .to_string_lossy()
        .to_string()
}
