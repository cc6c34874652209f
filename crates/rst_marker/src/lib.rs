// crates/rst_marker/src/lib.rs

//! Markers and names shared by the documentation tool‑chain.

/// Character that opens a comment line in a CMake macro file.
pub const COMMENT_MARKER: char = '#';

/// Trailing text on a comment line that opens an rST block.
pub const RST_BLOCK_MARKER: &str = ".rst:";

/// Extension of every generated document (without the dot).
pub const RST_EXTENSION: &str = "rst";

/// Subdirectory of the source root holding the per-macro documents.
pub const MACROS_DIR: &str = "macros";

/// Name of both index documents.
pub const INDEX_NAME: &str = "index";

/// Project title used in the index page banners.
pub const DEFAULT_PROJECT: &str = "ecBuild";

/// Returns `<name>.rst`.
pub fn rst_file_name(name: &str) -> String {
    format!("{}.{}", name, RST_EXTENSION)
}
