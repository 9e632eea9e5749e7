//! Rendering of build directives and header declarations
//!
//! Two output shapes share the same derived symbol: the
//! `psn00bsdk_target_incbin` directive written into the build file, and the
//! `extern` array declaration suggested for the asset header.

use crate::models::TextureAsset;

/// Build target every incbin directive registers against
pub const BUILD_TARGET: &str = "hello_pong";

/// Marker comment opening the suggested header block
pub const HEADER_BEGIN: &str = "// region images";

/// Marker comment closing the suggested header block
pub const HEADER_END: &str = "// endregion";

/// Render the incbin directive registering one asset with the build
pub fn directive_line(asset: &TextureAsset) -> String {
    format!(
        "psn00bsdk_target_incbin({BUILD_TARGET} PRIVATE {} {})",
        asset.symbol(),
        asset.relative_path.display()
    )
}

/// Render the directive lines for the generated region, newline-joined
pub fn render_directives(assets: &[TextureAsset]) -> String {
    assets
        .iter()
        .map(directive_line)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render the extern declaration for one asset's embedded data array
pub fn extern_declaration(asset: &TextureAsset) -> String {
    format!("extern u_long {}[];", asset.symbol())
}

/// Render the suggested header block, bracketed by marker comments
///
/// Printed to stdout as a copy-paste suggestion; never written to the
/// header file itself.
pub fn render_header_block(assets: &[TextureAsset]) -> String {
    let mut block = String::from(HEADER_BEGIN);
    block.push('\n');
    for asset in assets {
        block.push_str(&extern_declaration(asset));
        block.push('\n');
    }
    block.push_str(HEADER_END);
    block
}
