//! Parcel - texture asset registration generator for psn00bsdk projects
//!
//! Parcel scans the project's asset directory for `.tim` texture images,
//! regenerates the `psn00bsdk_target_incbin` block in the build file, and
//! prints the matching `extern` declarations for the asset header.

pub mod codegen;
pub mod error;
pub mod layout;
pub mod models;
pub mod region;
pub mod scanner;

// Re-exports for convenience
pub use codegen::{
    directive_line, extern_declaration, render_directives, render_header_block, BUILD_TARGET,
};
pub use error::{ParcelError, ParcelResult};
pub use layout::ProjectLayout;
pub use models::TextureAsset;
pub use region::{replace_region, REGION_BEGIN, REGION_END};
pub use scanner::{scan_assets, ASSET_EXTENSION};
