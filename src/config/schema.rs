use std::path::PathBuf;

use serde::Deserialize;

/// Top-level settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/songbooker/config.toml` or `~/.config/songbooker/config.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `SONGBOOKER__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub library: LibrarySettings,
    pub paths: PathSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LibrarySettings {
    /// File extensions to treat as notation files (case-insensitive, without dot).
    pub extensions: Vec<String>,
    /// Whether to follow symlinks during scanning.
    pub follow_links: bool,
    /// Whether to include hidden files/directories (dotfiles).
    pub include_hidden: bool,
    /// Optional cap on directory recursion depth.
    pub max_depth: Option<usize>,
}

impl Default for LibrarySettings {
    fn default() -> Self {
        Self {
            extensions: vec!["abc".into()],
            follow_links: true,
            include_hidden: true,
            max_depth: None,
        }
    }
}

/// Default directories used when none are given on the command line.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PathSettings {
    /// Music directory to scan for `.abc` files.
    pub scan_dir: Option<PathBuf>,
    /// PluginData directory the songbook file is written into.
    pub output_dir: Option<PathBuf>,
}
