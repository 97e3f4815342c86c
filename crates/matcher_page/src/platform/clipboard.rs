use matcher_logging::matcher_debug;
use thiserror::Error;

use super::dom::{Document, Element};

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("clipboard write rejected: {0}")]
    Rejected(String),
}

/// The platform clipboard API, when the page has one.
pub trait Clipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError>;
    fn read_text(&self) -> Option<String>;
}

/// Clipboard held in memory, standing in for the system clipboard.
#[derive(Debug, Default, Clone)]
pub struct MemoryClipboard {
    contents: Option<String>,
}

impl Clipboard for MemoryClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.contents = Some(text.to_string());
        Ok(())
    }

    fn read_text(&self) -> Option<String> {
        self.contents.clone()
    }
}

/// Copies `text`, falling back to a temporary selected textarea when no
/// clipboard API is available. Failures are logged and otherwise ignored.
pub fn copy_to_clipboard(
    document: &mut Document,
    clipboard: Option<&mut (dyn Clipboard + 'static)>,
    text: &str,
) {
    if let Some(clipboard) = clipboard {
        if let Err(err) = clipboard.write_text(text) {
            matcher_debug!("Clipboard write failed: {}", err);
        }
        return;
    }

    let body = document.body();
    let mut scratch = Element::new("textarea");
    scratch.value = text.to_string();
    let node = document.append(body, scratch);
    document.select(node);
    if !document.exec_copy() {
        matcher_debug!("Fallback copy failed for {} chars", text.chars().count());
    }
    document.remove(node);
}
