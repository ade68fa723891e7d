//! Clipboard delivery
//!
//! Thin wrapper around `arboard`. On some platforms or in headless CI
//! environments clipboard initialization may fail; callers surface the error
//! once and do not retry.

/// Copy `text` to the system clipboard.
pub fn copy_to_clipboard(text: &str) -> Result<(), arboard::Error> {
    let mut clipboard = arboard::Clipboard::new()?;
    clipboard.set_text(text.to_owned())
}
