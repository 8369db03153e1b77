//! System clipboard access.
//!
//! Best-effort by design: callers surface failure as a transient status
//! label, never as an application error. A platform without a clipboard is a
//! normal variant, not a fault.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),
    #[error("clipboard write failed: {0}")]
    WriteFailed(String),
}

/// Copy text to the system clipboard.
pub fn copy_text(text: &str) -> Result<(), ClipboardError> {
    let mut cb =
        arboard::Clipboard::new().map_err(|e| ClipboardError::Unavailable(e.to_string()))?;
    cb.set_text(text.to_string())
        .map_err(|e| ClipboardError::WriteFailed(e.to_string()))
}
