use crate::error::Result;
use arboard::Clipboard;

pub struct ClipboardManager {
    clipboard: Clipboard,
}

impl ClipboardManager {
    pub fn new() -> Result<Self> {
        Ok(Self {
            clipboard: Clipboard::new()?,
        })
    }

    pub fn copy_to_clipboard(&mut self, content: &str) -> Result<()> {
        self.clipboard.set_text(content)?;
        Ok(())
    }
}
