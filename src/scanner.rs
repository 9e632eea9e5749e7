//! Asset discovery
//!
//! Non-recursive listing of the assets directory, keeping files with the
//! texture image extension.

use std::ffi::OsStr;
use std::fs;
use std::path::Path;

use crate::error::{ParcelError, ParcelResult};
use crate::models::{is_valid_asset_id, TextureAsset};

/// Extension of the texture image files the tool registers
pub const ASSET_EXTENSION: &str = "tim";

/// Directory prefix of the generated relative paths
const ASSETS_PREFIX: &str = "assets";

/// Scan the assets directory for texture files
///
/// Returns one [`TextureAsset`] per `.tim` file, with the id taken from the
/// file stem and the path made relative to the build file's directory.
/// Rejects filenames whose stem would not form a valid C identifier.
pub fn scan_assets(assets_dir: &Path) -> ParcelResult<Vec<TextureAsset>> {
    if !assets_dir.is_dir() {
        return Err(ParcelError::AssetsDirNotFound {
            path: assets_dir.to_path_buf(),
        });
    }

    let mut assets = Vec::new();
    for entry in fs::read_dir(assets_dir)? {
        let entry = entry?;
        let path = entry.path();
        if !path.is_file() || path.extension() != Some(OsStr::new(ASSET_EXTENSION)) {
            continue;
        }

        let id = path
            .file_stem()
            .and_then(|s| s.to_str())
            .filter(|s| is_valid_asset_id(s))
            .ok_or_else(|| ParcelError::InvalidAssetName { file: path.clone() })?;

        assets.push(TextureAsset::new(
            id,
            Path::new(ASSETS_PREFIX).join(format!("{id}.{ASSET_EXTENSION}")),
        ));
    }

    // Sort by id for deterministic output
    assets.sort_by(|a, b| a.id.cmp(&b.id));

    Ok(assets)
}
