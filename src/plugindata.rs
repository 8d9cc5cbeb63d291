//! Songbook `.plugindata` output.
//!
//! The plugin reads a Lua-style nested table: `render` maps a catalog onto a
//! small table tree, and the tree printer handles indentation and escaping.

mod render;
mod tree;

pub use render::render;

/// File name the Songbook plugin loads from its PluginData directory.
pub const SONGBOOK_FILE_NAME: &str = "SongbookData.plugindata";
