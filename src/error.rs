//! Central error types for the shell.
//!
//! All errors implement `Serialize` so commands can hand them straight to the
//! webview over Tauri IPC.

use serde::Serialize;
use thiserror::Error;

/// Main error type for shell operations.
#[derive(Error, Debug)]
pub enum ShellError {
    /// Main window creation or content load failed. This is the one fatal
    /// class in the shell.
    #[error("Window error: {0}")]
    Window(String),

    /// Tray icon creation failed.
    #[error("Tray error: {0}")]
    Tray(String),

    /// Menu construction or popup failed.
    #[error("Menu error: {0}")]
    Menu(String),

    /// Filesystem operation failed (log files).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}

/// Serialize as the error message string for Tauri IPC.
impl Serialize for ShellError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl From<String> for ShellError {
    fn from(msg: String) -> Self {
        ShellError::Other(msg)
    }
}

impl From<&str> for ShellError {
    fn from(msg: &str) -> Self {
        ShellError::Other(msg.to_string())
    }
}

/// Type alias for Results using ShellError.
pub type ShellResult<T> = Result<T, ShellError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ShellError::Window("content failed to load".to_string());
        assert_eq!(err.to_string(), "Window error: content failed to load");
    }

    #[test]
    fn test_error_serialization() {
        let err = ShellError::Tray("no tray available".to_string());
        let json = serde_json::to_string(&err).unwrap();
        assert!(json.contains("no tray available"));
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: ShellError = io_err.into();
        assert!(matches!(err, ShellError::Io(_)));
    }

    #[test]
    fn test_from_string() {
        let err: ShellError = "something went sideways".into();
        assert!(matches!(err, ShellError::Other(_)));
        assert_eq!(err.to_string(), "something went sideways");
    }
}
