//! System clipboard access for the copy-all action.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),

    #[error("clipboard write failed: {0}")]
    Write(String),
}

/// Destination for copied text.
pub trait ClipboardWriter {
    fn write_text(
        &mut self,
        text: &str,
    ) -> Result<(), ClipboardError>;
}

/// The OS clipboard, opened lazily on first write.
///
/// The handle is kept after a successful open; on Linux the copied text
/// is only served while it is alive.
#[derive(Default)]
pub struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    fn handle(&mut self) -> Result<&mut arboard::Clipboard, ClipboardError> {
        if self.inner.is_none() {
            let clipboard = arboard::Clipboard::new()
                .map_err(|e| ClipboardError::Unavailable(e.to_string()))?;
            self.inner = Some(clipboard);
        }
        self.inner
            .as_mut()
            .ok_or_else(|| ClipboardError::Unavailable("no clipboard handle".to_string()))
    }
}

impl ClipboardWriter for SystemClipboard {
    fn write_text(
        &mut self,
        text: &str,
    ) -> Result<(), ClipboardError> {
        let result = self
            .handle()?
            .set_text(text.to_owned())
            .map_err(|e| ClipboardError::Write(e.to_string()));

        if result.is_err() {
            // Drop the handle so the next attempt reconnects.
            self.inner = None;
        }
        result
    }
}
