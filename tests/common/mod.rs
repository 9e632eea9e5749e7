//! Common test utilities for Parcel integration tests.
//!
//! Provides `TestProject` - an isolated psn00bsdk-shaped project tree in a
//! temp directory, plus helpers to run the parcel binary against it.

use std::fs;
use std::path::PathBuf;
use std::process::Command;

use tempfile::TempDir;

/// A CMakeLists.txt with an empty generated region
pub const BUILD_FILE_EMPTY_REGION: &str = "\
cmake_minimum_required(VERSION 3.21)

project(hello_pong)

#region images
#endregion

psn00bsdk_add_executable(hello_pong GPREL main.c)
";

/// A CMakeLists.txt whose region holds stale entries from an earlier run
pub const BUILD_FILE_STALE_REGION: &str = "\
cmake_minimum_required(VERSION 3.21)

project(hello_pong)

#region images
psn00bsdk_target_incbin(hello_pong PRIVATE tim_gone assets/gone.tim)
psn00bsdk_target_incbin(hello_pong PRIVATE tim_also_gone assets/also_gone.tim)
psn00bsdk_target_incbin(hello_pong PRIVATE tim_third assets/third.tim)
#endregion

psn00bsdk_add_executable(hello_pong GPREL main.c)
";

/// A CMakeLists.txt without any region markers
pub const BUILD_FILE_NO_MARKERS: &str = "\
cmake_minimum_required(VERSION 3.21)

project(hello_pong)

psn00bsdk_add_executable(hello_pong GPREL main.c)
";

/// Result of running the parcel binary
#[derive(Debug)]
pub struct RunResult {
    pub success: bool,
    pub stdout: String,
    pub stderr: String,
}

/// Isolated project tree with `src/assets/` and `src/CMakeLists.txt`
pub struct TestProject {
    root: TempDir,
}

impl TestProject {
    /// Create a project whose build file has the given content
    pub fn with_build_file(build_file: &str) -> Self {
        let root = TempDir::new().unwrap();
        fs::create_dir_all(root.path().join("src/assets")).unwrap();
        fs::write(root.path().join("src/CMakeLists.txt"), build_file).unwrap();
        Self { root }
    }

    /// Drop a (fake) TIM file into the assets directory
    pub fn add_asset(&self, name: &str) {
        fs::write(self.root.path().join("src/assets").join(name), b"\x10\x00\x00\x00").unwrap();
    }

    /// Current content of the build file
    pub fn build_file(&self) -> String {
        fs::read_to_string(self.root.path().join("src/CMakeLists.txt")).unwrap()
    }

    /// Path to the project root
    pub fn root(&self) -> PathBuf {
        self.root.path().to_path_buf()
    }

    /// Run the parcel binary against this project
    pub fn run(&self, extra_args: &[&str]) -> RunResult {
        let bin = env!("CARGO_BIN_EXE_parcel");
        let output = Command::new(bin)
            .arg("--project-root")
            .arg(self.root.path())
            .args(extra_args)
            .output()
            .expect("Failed to execute parcel");

        RunResult {
            success: output.status.success(),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }
}
