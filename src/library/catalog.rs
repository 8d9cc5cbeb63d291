use std::path::{Component, Path};

use tracing::debug;

use super::abc::{self, ParseOutcome};
use super::model::{Catalog, CatalogEntry, HeaderMetadata, NotationFile, Track};

/// Catalog plus the number of files whose headers could not be read.
#[derive(Debug, Default)]
pub struct BuiltCatalog {
    pub catalog: Catalog,
    pub degraded: usize,
}

/// Build one catalog entry per file, in the order given.
pub fn build(scan_root: &Path, files: &[NotationFile]) -> BuiltCatalog {
    let mut built = BuiltCatalog::default();

    for file in files {
        let outcome = abc::parse_file(&file.path);
        if let Some(error) = outcome.error() {
            debug!(path = %file.path.display(), %error, "using filename fallback");
            built.degraded += 1;
        }
        let entry = make_entry(scan_root, &file.path, outcome);
        debug!(
            position = built.catalog.len() + 1,
            filepath = %entry.filepath,
            filename = %entry.filename,
            "catalog entry"
        );
        built.catalog.entries.push(entry);
    }

    built
}

fn make_entry(scan_root: &Path, path: &Path, outcome: ParseOutcome) -> CatalogEntry {
    let HeaderMetadata {
        title,
        parts,
        composer,
        transcriber,
        instrument,
        track_id,
    } = outcome.into_metadata();
    debug!(path = %path.display(), ?parts, ?instrument, "parsed headers");

    CatalogEntry {
        filepath: relative_dir(scan_root, path),
        filename: abc::file_stem(path),
        tracks: vec![Track {
            id: track_id,
            name: title,
        }],
        transcriber,
        artist: composer,
    }
}

/// Directory of `path` relative to `scan_root`, as `/` or `/A/B/`.
pub fn relative_dir(scan_root: &Path, path: &Path) -> String {
    let parent = path.parent().unwrap_or(Path::new(""));
    let rel = parent.strip_prefix(scan_root).unwrap_or(parent);

    let segments: Vec<String> = rel
        .components()
        .filter_map(|c| match c {
            Component::Normal(s) => Some(s.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect();

    let joined = segments.join("/");
    let joined = joined.trim_matches('/');
    if joined.is_empty() {
        "/".to_string()
    } else {
        format!("/{joined}/")
    }
}
