//! Fixed project layout resolution
//!
//! The tool lives at `<root>/tools/parcel/` and every path it touches is a
//! constant offset from there: assets under `src/assets/`, the build file at
//! `src/CMakeLists.txt`. Nothing is validated here; a wrong root surfaces as
//! an error when the files are actually read.

use std::path::{Path, PathBuf};

use crate::error::{ParcelError, ParcelResult};

/// Resolved locations of everything the tool reads and writes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLayout {
    /// Project root
    pub project_root: PathBuf,

    /// Directory scanned for `.tim` files
    pub assets_dir: PathBuf,

    /// Build file rewritten in place
    pub build_file: PathBuf,

    /// Header the printed declarations are meant for (never touched)
    pub header_file: PathBuf,
}

impl ProjectLayout {
    /// Resolve the layout from an explicit project root
    pub fn from_project_root(root: impl Into<PathBuf>) -> Self {
        let project_root = root.into();
        let src_dir = project_root.join("src");
        let assets_dir = src_dir.join("assets");
        Self {
            build_file: src_dir.join("CMakeLists.txt"),
            header_file: assets_dir.join("assets.h"),
            project_root,
            assets_dir,
        }
    }

    /// Resolve the layout from the running executable's own location
    ///
    /// The binary is expected at `<root>/tools/parcel/<bin>`, so the project
    /// root is two directories above the one containing the executable.
    pub fn from_current_exe() -> ParcelResult<Self> {
        let exe = std::env::current_exe()?;
        Self::from_exe_path(&exe)
    }

    fn from_exe_path(exe: &Path) -> ParcelResult<Self> {
        let root = exe
            .parent()
            .and_then(Path::parent)
            .and_then(Path::parent)
            .ok_or_else(|| ParcelError::ProjectRootUnresolved {
                exe: exe.to_path_buf(),
            })?;
        Ok(Self::from_project_root(root))
    }
}
