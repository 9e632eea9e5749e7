//! Parcel CLI - texture asset registration generator
//!
//! Usage: parcel [OPTIONS]
//!
//! Scans `src/assets/` for `.tim` files, rewrites the incbin block in
//! `src/CMakeLists.txt`, and prints the extern declarations to paste into
//! the asset header. With no options, all paths are fixed offsets from the
//! tool's own location.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Parser;

use parcel::{
    render_directives, render_header_block, replace_region, scan_assets, ProjectLayout,
};

/// Parcel - texture asset registration generator
#[derive(Parser, Debug)]
#[command(name = "parcel")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Project root (defaults to two directories above the tool's location)
    #[arg(long)]
    project_root: Option<PathBuf>,

    /// Preview the rewrite as a diff without touching the build file
    #[arg(long)]
    dry_run: bool,

    /// Output format for CI
    #[arg(long, default_value = "false")]
    json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let layout = match &cli.project_root {
        Some(root) => ProjectLayout::from_project_root(root),
        None => ProjectLayout::from_current_exe()?,
    };

    cmd_generate(&layout, cli.dry_run, cli.json, cli.verbose)
}

fn cmd_generate(layout: &ProjectLayout, dry_run: bool, json: bool, verbose: u8) -> Result<()> {
    if !json {
        println!("📦 Parcel");
        println!("Project: {}", layout.project_root.display());
        if dry_run {
            println!("Mode: Dry run");
        }
        if verbose > 0 {
            println!("Assets: {}", layout.assets_dir.display());
            println!("Build file: {}", layout.build_file.display());
        }
    }

    // Discover assets
    let assets = scan_assets(&layout.assets_dir)?;

    if json {
        for asset in &assets {
            let output = serde_json::json!({
                "event": "asset",
                "id": asset.id,
                "symbol": asset.symbol(),
                "path": asset.relative_path.display().to_string(),
            });
            println!("{}", serde_json::to_string(&output)?);
        }
    } else {
        println!("\nFound {} TIM files:", assets.len());
        for asset in &assets {
            println!("  - {}", asset.relative_path.display());
        }
    }

    // Rewrite the generated region of the build file
    let content = fs::read_to_string(&layout.build_file)?;
    let updated = replace_region(&content, &render_directives(&assets), &layout.build_file)?;

    if dry_run {
        if !json {
            println!();
            print!("{}", unified_diff(&layout.build_file, &content, &updated));
        }
    } else {
        fs::write(&layout.build_file, &updated)?;
        if !json {
            println!(
                "\n✓ Updated {} with {} TIM file entries.",
                layout.build_file.display(),
                assets.len()
            );
        }
    }

    // Suggested header declarations (stdout only, the header is never written)
    if !json {
        println!("\nDeclarations for {}:\n", layout.header_file.display());
        println!("{}", render_header_block(&assets));
    }

    if json {
        let output = serde_json::json!({
            "event": "generate",
            "status": "success",
            "assets": assets.len(),
            "written": !dry_run,
            "build_file": layout.build_file.display().to_string(),
        });
        println!("{}", serde_json::to_string(&output)?);
    }

    Ok(())
}

/// Generate a unified diff between old and new build file content
fn unified_diff(path: &Path, old: &str, new: &str) -> String {
    use similar::TextDiff;
    TextDiff::from_lines(old, new)
        .unified_diff()
        .header(
            &format!("a/{}", path.display()),
            &format!("b/{}", path.display()),
        )
        .to_string()
}
