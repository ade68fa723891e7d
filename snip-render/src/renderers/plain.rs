//! Plain text rendering
//!
//! Strict identity on the content: no escaping, no metadata, leading and
//! trailing whitespace preserved. The path and language tag are ignored.

use crate::renderer::Renderer;
use crate::snippet::SnippetRequest;

/// Renderer that passes content through untouched
pub struct PlainRenderer;

impl Renderer for PlainRenderer {
    fn name(&self) -> &str {
        "plain"
    }

    fn description(&self) -> &str {
        "Raw content with no formatting or escaping"
    }

    fn render(&self, request: &SnippetRequest) -> String {
        request.content.clone()
    }
}
