//! Snippet rendering for the snip toolchain
//!
//!     This crate turns a block of source text plus a little metadata (language tag,
//!     relative path) into a paste-ready snippet in one of three output formats:
//!     Markdown fenced block, HTML block, or raw text.
//!
//!     TLDR: For renderer authors:
//!         - A renderer is a unit struct implementing the Renderer trait (./renderer.rs).
//!         - Renderers are total: they take a SnippetRequest and return a String, never an error.
//!           Empty content, empty path, empty language tag all produce well-defined output.
//!         - Register new renderers in RendererRegistry::with_defaults and add a
//!           SnippetFormat variant; dispatch is exhaustive over the enum plus an
//!           explicit Markdown fallback.
//!
//! Architecture
//!
//!     Two independent pieces with a single data dependency between them:
//!
//!     - The language resolver (./language.rs) maps (file path, caller-supplied default
//!       tag) to an effective language tag using a small ordered rule table with
//!       first-match-wins semantics. No match is not a failure, the default passes
//!       through unchanged.
//!     - The renderers (./renderers/) map (format, language tag, relative path, content,
//!       include-path flag) to the final string. HTML is the only format that escapes
//!       anything.
//!
//!     This is a pure lib: it powers snip-cli but is shell agnostic. No clipboard
//!     access, no filesystem reads, no env vars. The CLI owns all of that, including
//!     computing the workspace-relative path it hands us.
//!
//!     The file structure:
//!     .
//!     ├── error.rs
//!     ├── renderer.rs             # Renderer trait definition
//!     ├── registry.rs             # RendererRegistry for discovery and dispatch
//!     ├── renderers
//!     │   ├── markdown.rs
//!     │   ├── html.rs
//!     │   └── plain.rs
//!     ├── language.rs             # Ordered rule table + resolve()
//!     ├── snippet.rs              # SnippetFormat, SnippetRequest
//!     └── lib.rs
//!
//! Escaping
//!
//!     HTML output escapes both the content and the data-filename attribute, ampersand
//!     first so ampersands introduced by the later substitutions are not re-escaped.
//!     Markdown output never escapes content. A triple-backtick run inside the content
//!     will visually break the fenced block; that is accepted behavior, because the
//!     output format is pinned by downstream consumers and an escaping scheme of our
//!     own would change it.

pub mod error;
pub mod language;
pub mod registry;
pub mod renderer;
pub mod renderers;
pub mod snippet;

pub use error::RenderError;
pub use registry::RendererRegistry;
pub use renderer::Renderer;
pub use snippet::{SnippetFormat, SnippetRequest};
