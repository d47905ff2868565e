//! [`Clipboard`] backed by the operating system clipboard.

use parking_lot::Mutex;

use crate::host::Clipboard;

/// System clipboard through `arboard`.
///
/// Clipboard failures are not fatal to editing: they are logged and the
/// operation behaves as if the clipboard were empty.
pub struct SystemClipboard {
    inner: Mutex<arboard::Clipboard>,
}

impl SystemClipboard {
    pub fn new() -> Result<Self, arboard::Error> {
        Ok(Self {
            inner: Mutex::new(arboard::Clipboard::new()?),
        })
    }
}

impl Clipboard for SystemClipboard {
    fn set_text(&self, text: &str) {
        if let Err(err) = self.inner.lock().set_text(text.to_owned()) {
            tracing::warn!(error = %err, "failed to write system clipboard");
        }
    }

    fn get_text(&self) -> Option<String> {
        match self.inner.lock().get_text() {
            Ok(text) => Some(text),
            Err(arboard::Error::ContentNotAvailable) => None,
            Err(err) => {
                tracing::warn!(error = %err, "failed to read system clipboard");
                None
            }
        }
    }
}
