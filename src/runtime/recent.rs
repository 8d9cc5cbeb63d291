//! Directories used by the last successful run, kept next to `config.toml`.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::config;

const RECENT_FILE_NAME: &str = "recent.toml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecentDirs {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scan_dir: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_dir: Option<PathBuf>,
}

impl RecentDirs {
    pub fn default_path() -> Option<PathBuf> {
        config::config_dir().map(|d| d.join(RECENT_FILE_NAME))
    }

    /// A missing file is an empty record, not an error.
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let data = fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        let recent = toml::from_str(&data)
            .with_context(|| format!("parsing {}", path.display()))?;
        Ok(recent)
    }

    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)
                .with_context(|| format!("creating {}", dir.display()))?;
        }
        let data = toml::to_string_pretty(self)?;
        fs::write(path, data).with_context(|| format!("writing {}", path.display()))?;
        Ok(())
    }
}
