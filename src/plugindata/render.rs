use crate::library::{Catalog, CatalogEntry, Track};

use super::tree::{Table, Value, to_chunk};

/// Render the catalog as the Songbook plugin's `SongbookData.plugindata` text.
///
/// Songs are numbered from 1 in catalog order. `Transcriber` and `Artist`
/// are only written when non-empty.
pub fn render(catalog: &Catalog) -> String {
    to_chunk(&songbook_table(catalog))
}

fn songbook_table(catalog: &Catalog) -> Table {
    let directories = Table::list([Value::Str("/".to_string())]);
    let songs = Table::list(catalog.iter().map(|e| Value::Table(song_table(e))));

    Table::new()
        .field("Directories", Value::Table(directories))
        .field("Songs", Value::Table(songs))
}

fn song_table(entry: &CatalogEntry) -> Table {
    let tracks = Table::list(entry.tracks.iter().map(|t| Value::Table(track_table(t))));

    let mut song = Table::new()
        .string("Filepath", &entry.filepath)
        .string("Filename", &entry.filename)
        .field("Tracks", Value::Table(tracks));

    if let Some(t) = non_empty(entry.transcriber.as_deref()) {
        song = song.string("Transcriber", t);
    }
    if let Some(a) = non_empty(entry.artist.as_deref()) {
        song = song.string("Artist", a);
    }
    song
}

fn track_table(track: &Track) -> Table {
    Table::new()
        .string("Id", &track.id)
        .string("Name", &track.name)
        .bare_last()
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.is_empty())
}
