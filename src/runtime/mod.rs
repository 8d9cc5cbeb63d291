use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, bail};
use clap::Parser;
use tracing::{info, warn};

use crate::songbook::update_songbook;

mod cli;
mod logging;
mod recent;
mod settings;

use cli::Cli;
use recent::RecentDirs;

pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let settings = settings::load_settings();

    let recent_path = RecentDirs::default_path();
    let recent = recent_path
        .as_deref()
        .map(load_recent)
        .unwrap_or_default();

    let scan_dir = pick_dir(cli.scan_dir, settings.paths.scan_dir.clone(), recent.scan_dir)
        .context("no music directory given: pass SCAN_DIR or set paths.scan_dir")?;
    let output_dir = pick_dir(
        cli.output_dir,
        settings.paths.output_dir.clone(),
        recent.output_dir,
    )
    .context("no output directory given: pass OUTPUT_DIR or set paths.output_dir")?;

    let scan_dir = std::path::absolute(&scan_dir)
        .with_context(|| format!("resolving {}", scan_dir.display()))?;
    let output_dir = std::path::absolute(&output_dir)
        .with_context(|| format!("resolving {}", output_dir.display()))?;

    if !scan_dir.is_dir() {
        bail!("music directory {} is not a directory", scan_dir.display());
    }

    info!(scan_dir = %scan_dir.display(), output_dir = %output_dir.display(), "updating music database");
    let start = Instant::now();
    let report = update_songbook(&scan_dir, &output_dir, &settings.library)?;

    if report.degraded > 0 {
        warn!(count = report.degraded, "some files could not be read; their titles come from file names");
    }
    info!(
        files = report.files_found,
        songs = report.songs_written,
        path = %report.output_path.display(),
        elapsed = ?start.elapsed(),
        "songbook updated"
    );

    if !cli.no_remember
        && let Some(path) = recent_path
    {
        let used = RecentDirs {
            scan_dir: Some(scan_dir),
            output_dir: Some(output_dir),
        };
        if let Err(e) = used.save_to(&path) {
            warn!("could not remember directories: {e:#}");
        }
    }

    Ok(())
}

fn load_recent(path: &Path) -> RecentDirs {
    RecentDirs::load_from(path).unwrap_or_else(|e| {
        warn!("ignoring remembered directories: {e:#}");
        RecentDirs::default()
    })
}

/// Command line first, then config, then the last successful run.
fn pick_dir(
    from_cli: Option<PathBuf>,
    configured: Option<PathBuf>,
    remembered: Option<PathBuf>,
) -> Option<PathBuf> {
    from_cli.or(configured).or(remembered)
}
