//! System clipboard access.

use thiserror::Error;

/// Clipboard write failures.
#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("Clipboard unavailable: {0}")]
    Unavailable(String),
    #[error("Failed to write clipboard: {0}")]
    Write(String),
}

/// Somewhere copied text can go.
pub trait ClipboardSink {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// The OS clipboard, opened lazily and reused across writes.
#[cfg(feature = "native")]
#[derive(Default)]
pub struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
}

#[cfg(feature = "native")]
impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(feature = "native")]
impl ClipboardSink for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        if self.inner.is_none() {
            let clipboard = arboard::Clipboard::new()
                .map_err(|e| ClipboardError::Unavailable(e.to_string()))?;
            self.inner = Some(clipboard);
        }
        let Some(clipboard) = self.inner.as_mut() else {
            return Err(ClipboardError::Unavailable("not initialized".to_string()));
        };
        let result = clipboard.set_text(text);
        if let Err(e) = result {
            // Drop the handle so the next write reconnects.
            self.inner = None;
            return Err(ClipboardError::Write(e.to_string()));
        }
        Ok(())
    }
}

/// Used when the crate is built without native clipboard support. Every
/// write fails, so copies fall back to egui's platform output.
#[cfg(not(feature = "native"))]
#[derive(Default)]
pub struct SystemClipboard;

#[cfg(not(feature = "native"))]
impl SystemClipboard {
    pub fn new() -> Self {
        Self
    }
}

#[cfg(not(feature = "native"))]
impl ClipboardSink for SystemClipboard {
    fn set_text(&mut self, _text: &str) -> Result<(), ClipboardError> {
        Err(ClipboardError::Unavailable("native clipboard disabled".to_string()))
    }
}
