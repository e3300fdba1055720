use arboard::Clipboard;
use log::debug;
use multiclip_core::{ClipboardError, ClipboardPort};

/// System clipboard through `arboard`.
pub struct ArboardClipboard {
    inner: Clipboard,
}

impl ArboardClipboard {
    pub fn new() -> Result<Self, ClipboardError> {
        let inner = Clipboard::new().map_err(|err| ClipboardError::new(err.to_string()))?;
        Ok(Self { inner })
    }
}

impl ClipboardPort for ArboardClipboard {
    fn read_text(&mut self) -> Result<String, ClipboardError> {
        match self.inner.get_text() {
            Ok(text) => Ok(text),
            // Non-text or empty clipboard reads as empty text.
            Err(arboard::Error::ContentNotAvailable) => {
                debug!("event=clipboard_read module=cli status=empty");
                Ok(String::new())
            }
            Err(err) => Err(ClipboardError::new(err.to_string())),
        }
    }

    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.inner
            .set_text(text.to_owned())
            .map_err(|err| ClipboardError::new(err.to_string()))
    }
}
