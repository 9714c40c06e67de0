pub mod components;
pub mod layouts;
pub mod pages;

use crate::i18n::Messages;

/// Everything a page needs besides its own content.
#[derive(Clone, Copy)]
pub struct PageCtx<'a> {
    pub brand: &'a str,
    pub msgs: Messages<'a>,
    /// Current path without any locale prefix; the language selector
    /// returns here after saving a choice.
    pub page_path: &'a str,
    pub year: i32,
}

// Re-exports for convenience
pub use components::{card, html_error_response, language_switcher};
pub use layouts::desktop::desktop_layout;
