//! Error types for renderer operations

use std::fmt;

/// Errors that can occur when interacting with the renderer registry
#[derive(Debug, Clone, PartialEq)]
pub enum RenderError {
    /// Renderer not found in registry
    RendererNotFound(String),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::RendererNotFound(name) => write!(f, "Renderer '{name}' not found"),
        }
    }
}

impl std::error::Error for RenderError {}
