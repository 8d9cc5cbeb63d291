//! One full songbook update: scan, parse, build, render, write.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::config::LibrarySettings;
use crate::error::{Result, SongbookError};
use crate::library;
use crate::plugindata::{self, SONGBOOK_FILE_NAME};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildReport {
    pub output_path: PathBuf,
    pub files_found: usize,
    pub songs_written: usize,
    /// Files whose headers could not be read and fell back to filename metadata.
    pub degraded: usize,
}

/// Rebuild `SongbookData.plugindata` in `output_dir` from the files under `scan_root`.
///
/// The whole text is rendered before anything touches the output directory.
pub fn update_songbook(
    scan_root: &Path,
    output_dir: &Path,
    settings: &LibrarySettings,
) -> Result<BuildReport> {
    let files = library::collect(scan_root, settings);
    info!(count = files.len(), scan_root = %scan_root.display(), "found notation files");

    let built = library::build(scan_root, &files);
    let text = plugindata::render(&built.catalog);
    if built.catalog.is_empty() {
        info!("no notation files found; writing an empty songbook");
    } else {
        info!(songs = built.catalog.len(), "processed individual song files");
    }

    let output_path = write_songbook(output_dir, &text)?;

    Ok(BuildReport {
        output_path,
        files_found: files.len(),
        songs_written: built.catalog.len(),
        degraded: built.degraded,
    })
}

/// Write `text` to `output_dir/SongbookData.plugindata`, creating the directory
/// if needed and replacing any existing file.
pub fn write_songbook(output_dir: &Path, text: &str) -> Result<PathBuf> {
    fs::create_dir_all(output_dir).map_err(|source| SongbookError::CreateOutputDir {
        path: output_dir.to_path_buf(),
        source,
    })?;

    let path = output_dir.join(SONGBOOK_FILE_NAME);
    fs::write(&path, text).map_err(|source| SongbookError::WriteOutput {
        path: path.clone(),
        source,
    })?;

    info!(path = %path.display(), "wrote songbook");
    Ok(path)
}
