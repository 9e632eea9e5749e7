//! Core data models for Parcel
//!
//! Defines the one entity the tool works with: `TextureAsset`, a texture
//! image discovered in the assets directory. Assets are recomputed fresh on
//! every run and never persisted.

use serde::Serialize;
use std::path::PathBuf;

/// Prefix for every generated symbol (incbin target and extern array alike)
pub const SYMBOL_PREFIX: &str = "tim_";

/// A texture image discovered in the assets directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextureAsset {
    /// Identifier derived from the filename (extension stripped)
    pub id: String,

    /// Path to the asset relative to the build file's directory
    pub relative_path: PathBuf,
}

impl TextureAsset {
    /// Create a new TextureAsset
    pub fn new(id: impl Into<String>, relative_path: impl Into<PathBuf>) -> Self {
        Self {
            id: id.into(),
            relative_path: relative_path.into(),
        }
    }

    /// Generated symbol name, shared by the build directive and the extern
    /// declaration
    pub fn symbol(&self) -> String {
        format!("{SYMBOL_PREFIX}{}", self.id)
    }
}

/// Whether `id` can be embedded in a generated symbol name
///
/// The symbol is `tim_<id>`, so a leading digit is fine; anything outside
/// `[A-Za-z0-9_]` is not.
pub fn is_valid_asset_id(id: &str) -> bool {
    !id.is_empty() && id.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}
