//! HTML rendering
//!
//! Emits a single `<pre><code>` element. The language tag always lands in
//! the `class` attribute as `language-<tag>` (the convention highlight.js
//! and friends key on); when the path is included it is carried in a
//! `data-filename` attribute. Both the attribute value and the element text
//! are HTML-escaped.

use crate::renderer::Renderer;
use crate::snippet::SnippetRequest;

/// Escape HTML special characters
///
/// Ampersand must be replaced first: the later substitutions insert
/// ampersands of their own, and those must not be escaped again.
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('\"', "&quot;")
        .replace('\'', "&#039;")
}

/// Renderer for HTML `<pre><code>` blocks
pub struct HtmlRenderer;

impl Renderer for HtmlRenderer {
    fn name(&self) -> &str {
        "html"
    }

    fn description(&self) -> &str {
        "A pre/code element with language class and optional data-filename"
    }

    fn render(&self, request: &SnippetRequest) -> String {
        let class_attr = format!("language-{}", request.language);
        let filename_attr = if request.include_path {
            format!(" data-filename=\"{}\"", escape_html(&request.relative_path))
        } else {
            String::new()
        };
        format!(
            "<pre><code class=\"{class_attr}\"{filename_attr}>{}</code></pre>",
            escape_html(&request.content)
        )
    }
}
