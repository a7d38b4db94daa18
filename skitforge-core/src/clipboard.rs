//! # Clipboard
//!
//! Text clipboard access is asynchronous and fallible. The store only ever moves JSON text through it.

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ClipboardError {
    #[error("clipboard is unavailable: {0}")]
    Unavailable(String),
    #[error("clipboard content could not be encoded: {0}")]
    Encode(String),
}

#[async_trait::async_trait]
pub trait Clipboard: Send + Sync {
    async fn read_text(&self) -> Result<String, ClipboardError>;
    async fn write_text(&self, text: String) -> Result<(), ClipboardError>;
}

/// A process-local clipboard.
#[derive(Default, Debug)]
pub struct MemoryClipboard {
    text: parking_lot::Mutex<String>,
}
impl MemoryClipboard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
    /// Peek the current content.
    #[must_use]
    pub fn text(&self) -> String {
        self.text.lock().clone()
    }
}
#[async_trait::async_trait]
impl Clipboard for MemoryClipboard {
    async fn read_text(&self) -> Result<String, ClipboardError> {
        Ok(self.text.lock().clone())
    }
    async fn write_text(&self, text: String) -> Result<(), ClipboardError> {
        *self.text.lock() = text;
        Ok(())
    }
}

/// Failure of a clipboard edit: either the edit was skipped, or the clipboard failed.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum TransferError {
    #[error(transparent)]
    Edit(#[from] crate::EditError),
    #[error(transparent)]
    Clipboard(#[from] ClipboardError),
}
