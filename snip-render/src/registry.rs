//! Renderer registry for discovery and dispatch
//!
//! This module provides a centralized registry for all available renderers.
//! Renderers can be registered and retrieved by name, and dispatch by
//! [`SnippetFormat`] is total: a missing entry falls back to Markdown.

use crate::error::RenderError;
use crate::renderer::Renderer;
use crate::renderers::{HtmlRenderer, MarkdownRenderer, PlainRenderer};
use crate::snippet::{SnippetFormat, SnippetRequest};
use std::collections::HashMap;

/// Registry of snippet renderers
///
/// # Examples
///
/// ```ignore
/// let mut registry = RendererRegistry::new();
/// registry.register(MyRenderer);
///
/// let renderer = registry.get("my-format")?;
/// let output = renderer.render(&request);
/// ```
pub struct RendererRegistry {
    renderers: HashMap<String, Box<dyn Renderer>>,
}

impl RendererRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        RendererRegistry {
            renderers: HashMap::new(),
        }
    }

    /// Register a renderer
    ///
    /// If a renderer with the same name already exists, it will be replaced.
    pub fn register<R: Renderer + 'static>(&mut self, renderer: R) {
        self.renderers
            .insert(renderer.name().to_string(), Box::new(renderer));
    }

    /// Get a renderer by name
    pub fn get(&self, name: &str) -> Result<&dyn Renderer, RenderError> {
        self.renderers
            .get(name)
            .map(|r| r.as_ref())
            .ok_or_else(|| RenderError::RendererNotFound(name.to_string()))
    }

    /// Check if a renderer exists
    pub fn has(&self, name: &str) -> bool {
        self.renderers.contains_key(name)
    }

    /// List all available renderer names (sorted)
    pub fn list_renderers(&self) -> Vec<String> {
        let mut names: Vec<_> = self.renderers.keys().cloned().collect();
        names.sort();
        names
    }

    /// Render a request in the given format
    ///
    /// Total dispatch: when the format's renderer is absent from this
    /// registry, the request is rendered as Markdown instead of failing.
    pub fn render(&self, format: SnippetFormat, request: &SnippetRequest) -> String {
        match self.get(format.name()) {
            Ok(renderer) => renderer.render(request),
            Err(_) => MarkdownRenderer.render(request),
        }
    }

    /// Create a registry with all built-in renderers
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();

        registry.register(MarkdownRenderer);
        registry.register(HtmlRenderer);
        registry.register(PlainRenderer);

        registry
    }
}

impl Default for RendererRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Test renderer
    struct TestRenderer;
    impl Renderer for TestRenderer {
        fn name(&self) -> &str {
            "test"
        }
        fn description(&self) -> &str {
            "Test renderer"
        }
        fn render(&self, request: &SnippetRequest) -> String {
            format!("test:{}", request.content)
        }
    }

    fn request() -> SnippetRequest {
        SnippetRequest::new("body", "src/a.rs", "rust", false)
    }

    #[test]
    fn test_registry_creation() {
        let registry = RendererRegistry::new();
        assert_eq!(registry.renderers.len(), 0);
    }

    #[test]
    fn test_registry_register() {
        let mut registry = RendererRegistry::new();
        registry.register(TestRenderer);

        assert!(registry.has("test"));
        assert_eq!(registry.list_renderers(), vec!["test"]);
    }

    #[test]
    fn test_registry_get() {
        let mut registry = RendererRegistry::new();
        registry.register(TestRenderer);

        let renderer = registry.get("test");
        assert!(renderer.is_ok());
        assert_eq!(renderer.unwrap().name(), "test");
    }

    #[test]
    fn test_registry_get_nonexistent() {
        let registry = RendererRegistry::new();
        let result = registry.get("nonexistent");
        assert_eq!(
            result.err(),
            Some(RenderError::RendererNotFound("nonexistent".to_string()))
        );
    }

    #[test]
    fn test_registry_replace_renderer() {
        let mut registry = RendererRegistry::new();
        registry.register(TestRenderer);
        registry.register(TestRenderer); // Replace

        assert_eq!(registry.list_renderers().len(), 1);
    }

    #[test]
    fn test_registry_with_defaults() {
        let registry = RendererRegistry::with_defaults();
        assert!(registry.has("markdown"));
        assert!(registry.has("html"));
        assert!(registry.has("plain"));
    }

    #[test]
    fn test_registry_default_trait() {
        let registry = RendererRegistry::default();
        for format in SnippetFormat::ALL {
            assert!(registry.has(format.name()));
        }
    }

    #[test]
    fn test_render_dispatches_by_format() {
        let registry = RendererRegistry::with_defaults();
        let output = registry.render(SnippetFormat::Plain, &request());
        assert_eq!(output, "body");
    }

    #[test]
    fn test_render_falls_back_to_markdown_on_missing_entry() {
        // An empty registry still renders: the fallback is the Markdown
        // renderer itself, not an error.
        let registry = RendererRegistry::new();
        let output = registry.render(SnippetFormat::Html, &request());
        assert_eq!(output, "```rust\nbody\n```");
    }
}
