//! Snippet request model and output format selection

use serde::{Deserialize, Deserializer};

/// Supported snippet output formats.
///
/// The set is closed: adding a format means a new variant, a new renderer
/// module, and one registration line in `RendererRegistry::with_defaults`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SnippetFormat {
    Markdown,
    Html,
    Plain,
}

impl SnippetFormat {
    /// All formats, in registration order.
    pub const ALL: &'static [SnippetFormat] = &[
        SnippetFormat::Markdown,
        SnippetFormat::Html,
        SnippetFormat::Plain,
    ];

    /// The registry name of this format (e.g., "markdown")
    pub fn name(&self) -> &'static str {
        match self {
            SnippetFormat::Markdown => "markdown",
            SnippetFormat::Html => "html",
            SnippetFormat::Plain => "plain",
        }
    }

    /// Look up a format by name.
    ///
    /// Unknown names resolve to Markdown. This is the documented fallback,
    /// not an error: configuration typos degrade to the default output
    /// rather than aborting the copy.
    pub fn from_name(name: &str) -> SnippetFormat {
        match name {
            "html" => SnippetFormat::Html,
            "plain" => SnippetFormat::Plain,
            _ => SnippetFormat::Markdown,
        }
    }
}

impl<'de> Deserialize<'de> for SnippetFormat {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let name = String::deserialize(deserializer)?;
        Ok(SnippetFormat::from_name(&name))
    }
}

/// A single snippet rendering request.
///
/// Constructed fresh per invocation and handed to a renderer together with
/// the chosen [`SnippetFormat`]. Nothing here outlives the call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnippetRequest {
    /// Snippet body. May be empty.
    pub content: String,
    /// Path shown in the snippet metadata. Workspace-relative when the
    /// caller knows a workspace root, otherwise whatever the caller passed.
    pub relative_path: String,
    /// Effective language tag, after rule application.
    pub language: String,
    /// Whether the path is included in the rendered output.
    pub include_path: bool,
}

impl SnippetRequest {
    pub fn new(
        content: impl Into<String>,
        relative_path: impl Into<String>,
        language: impl Into<String>,
        include_path: bool,
    ) -> Self {
        SnippetRequest {
            content: content.into(),
            relative_path: relative_path.into(),
            language: language.into(),
            include_path,
        }
    }
}
