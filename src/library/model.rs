use std::path::PathBuf;

/// A notation file found under the scan root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotationFile {
    pub path: PathBuf,
}

/// Metadata read from the header lines of one `.abc` file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderMetadata {
    /// First `T:` value, or the file stem when that is missing or empty.
    pub title: String,
    /// `P:`, `V:` and `I:` values in file order, without duplicates.
    pub parts: Vec<String>,
    pub composer: Option<String>,
    pub transcriber: Option<String>,
    pub instrument: Option<String>,
    /// First `X:` value, `"0"` when the file has none.
    pub track_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Track {
    pub id: String,
    pub name: String,
}

/// One song of the catalog. Built once by the catalog builder, never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    /// Containing directory relative to the scan root, e.g. `/` or `/Elves/Rivendell/`.
    pub filepath: String,
    pub filename: String,
    pub tracks: Vec<Track>,
    pub transcriber: Option<String>,
    pub artist: Option<String>,
}

/// Songs in discovery order. Position in `entries` is the only index.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    pub entries: Vec<CatalogEntry>,
}

impl Catalog {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CatalogEntry> {
        self.entries.iter()
    }
}
