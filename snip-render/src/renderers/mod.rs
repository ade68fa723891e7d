//! Renderer implementations, one module per output format.

pub mod html;
pub mod markdown;
pub mod plain;

pub use html::HtmlRenderer;
pub use markdown::MarkdownRenderer;
pub use plain::PlainRenderer;
