//! Error types for Parcel
//!
//! Uses `thiserror` for library errors; the binary wraps these in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

use crate::region::{REGION_BEGIN, REGION_END};

/// Result type alias for Parcel operations
pub type ParcelResult<T> = Result<T, ParcelError>;

/// Main error type for Parcel operations
#[derive(Error, Debug)]
pub enum ParcelError {
    /// The build file lacks the generated-region markers
    #[error("could not find the region markers ('{REGION_BEGIN}' and '{REGION_END}') in {file}")]
    MissingRegionMarkers { file: PathBuf },

    /// Assets directory not found
    #[error("assets directory not found: {path}")]
    AssetsDirNotFound { path: PathBuf },

    /// Asset filename does not form a usable symbol name
    #[error("asset file '{file}' does not produce a valid C identifier")]
    InvalidAssetName { file: PathBuf },

    /// The project root cannot be derived from the tool's location
    #[error("cannot derive the project root from the tool location {exe}")]
    ProjectRootUnresolved { exe: PathBuf },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
