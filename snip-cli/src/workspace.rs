//! Workspace-relative path computation
//!
//! The renderers show whatever path they are handed; computing that path is
//! host business. When a workspace root is known the input path is expressed
//! relative to it, otherwise it passes through unchanged.

use std::path::Path;

/// Express `path` relative to `workspace_root`, when one is known.
///
/// Falls back to the path as given when no root is supplied or when no
/// relative form can be computed (e.g., mixing relative and absolute paths).
pub fn relative_to(path: &str, workspace_root: Option<&str>) -> String {
    match workspace_root {
        Some(root) => pathdiff::diff_paths(Path::new(path), Path::new(root))
            .map(|p| p.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.to_string()),
        None => path.to_string(),
    }
}
