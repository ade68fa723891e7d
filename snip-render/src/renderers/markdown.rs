//! Markdown fenced-block rendering
//!
//! Emits a standard triple-backtick fence with the language tag as the info
//! string. When the path is included it is appended to the info string after
//! a colon (`lang:path`), the form chat tools and docs renderers understand.
//!
//! Content goes into the block verbatim. A triple-backtick run inside the
//! content will terminate the fence early; that malformed block is accepted
//! output, since consumers pin the exact byte form and any escaping scheme
//! would change it.

use crate::renderer::Renderer;
use crate::snippet::SnippetRequest;

const FENCE: &str = "```";

/// Renderer for Markdown fenced code blocks
pub struct MarkdownRenderer;

impl Renderer for MarkdownRenderer {
    fn name(&self) -> &str {
        "markdown"
    }

    fn description(&self) -> &str {
        "Fenced code block with a language:path info string"
    }

    fn render(&self, request: &SnippetRequest) -> String {
        if request.include_path {
            format!(
                "{FENCE}{}:{}\n{}\n{FENCE}",
                request.language, request.relative_path, request.content
            )
        } else {
            format!("{FENCE}{}\n{}\n{FENCE}", request.language, request.content)
        }
    }
}
