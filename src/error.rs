use std::path::PathBuf;

use thiserror::Error;

/// Failures that stop a songbook update. Unreadable notation files are not
/// among them; those degrade to filename metadata.
#[derive(Error, Debug)]
pub enum SongbookError {
    #[error("Failed to create output directory '{}': {source}", path.display())]
    CreateOutputDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write '{}': {source}", path.display())]
    WriteOutput {
        path: PathBuf,
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, SongbookError>;
