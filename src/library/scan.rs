use std::path::Path;

use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::config::LibrarySettings;

use super::model::NotationFile;

fn is_notation_file(path: &Path, settings: &LibrarySettings) -> bool {
    let Some(name) = path.file_name().and_then(|s| s.to_str()) else {
        return false;
    };
    let name = name.to_ascii_lowercase();

    // Suffix match, so a file named just `.abc` counts too.
    settings
        .extensions
        .iter()
        .map(|e| e.trim().trim_start_matches('.').to_ascii_lowercase())
        .filter(|e| !e.is_empty())
        .any(|e| {
            name.len() > e.len()
                && name.ends_with(&e)
                && name.as_bytes()[name.len() - e.len() - 1] == b'.'
        })
}

/// A symlink whose target no longer exists.
fn is_dangling_link(path: &Path) -> bool {
    path.symlink_metadata()
        .map(|m| m.file_type().is_symlink())
        .unwrap_or(false)
        && !path.exists()
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|s| s.to_str())
        .map(|name| name.starts_with('.'))
        .unwrap_or(false)
}

/// Recursively collect notation files under `dir`.
///
/// The result is sorted by full path string, case-insensitively with an exact
/// comparison as tie-break, so it does not depend on directory-entry order.
/// A missing `dir` yields an empty list.
pub fn collect(dir: &Path, settings: &LibrarySettings) -> Vec<NotationFile> {
    let mut walker = WalkDir::new(dir).follow_links(settings.follow_links);
    if let Some(d) = settings.max_depth {
        walker = walker.max_depth(d);
    }

    let mut files: Vec<NotationFile> = Vec::new();
    for item in walker
        .into_iter()
        .filter_entry(|e| settings.include_hidden || e.depth() == 0 || !is_hidden(e.path()))
    {
        match item {
            Ok(entry) => {
                if !entry.file_type().is_dir() && is_notation_file(entry.path(), settings) {
                    files.push(NotationFile {
                        path: entry.into_path(),
                    });
                }
            }
            // Broken links are kept; the header parser degrades them to
            // filename metadata and logs the read failure.
            Err(err) => match err.path() {
                Some(path) if is_dangling_link(path) && is_notation_file(path, settings) => {
                    files.push(NotationFile {
                        path: path.to_path_buf(),
                    });
                }
                _ => warn!(%err, "skipping unreadable directory entry"),
            },
        }
    }

    files.sort_by_cached_key(|f| {
        let full = f.path.to_string_lossy().into_owned();
        (full.to_lowercase(), full)
    });

    debug!(dir = %dir.display(), count = files.len(), "collected notation files");
    files
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn names(files: &[NotationFile], root: &Path) -> Vec<String> {
        files
            .iter()
            .map(|f| {
                f.path
                    .strip_prefix(root)
                    .unwrap()
                    .to_string_lossy()
                    .replace('\\', "/")
            })
            .collect()
    }

    #[test]
    fn is_notation_file_matches_configured_extensions_case_insensitive() {
        let settings = LibrarySettings::default();
        assert!(is_notation_file(Path::new("/tmp/a.abc"), &settings));
        assert!(is_notation_file(Path::new("/tmp/a.ABC"), &settings));
        assert!(is_notation_file(Path::new("/tmp/a.Abc"), &settings));
        assert!(!is_notation_file(Path::new("/tmp/a.txt"), &settings));
        assert!(!is_notation_file(Path::new("/tmp/abc"), &settings));
        assert!(!is_notation_file(Path::new("/tmp/a"), &settings));
        assert!(!is_notation_file(Path::new("/tmp/a.xabc"), &settings));
    }

    #[test]
    fn bare_extension_file_name_is_a_notation_file() {
        let settings = LibrarySettings::default();
        assert!(is_notation_file(Path::new("/tmp/.abc"), &settings));
        assert!(is_notation_file(Path::new("/tmp/.ABC"), &settings));
    }

    #[test]
    fn configured_extensions_tolerate_leading_dot() {
        let settings = LibrarySettings {
            extensions: vec![".ABC".into(), " txt ".into()],
            ..LibrarySettings::default()
        };
        assert!(is_notation_file(Path::new("/tmp/a.abc"), &settings));
        assert!(is_notation_file(Path::new("/tmp/a.txt"), &settings));
    }

    #[test]
    fn collect_recurses_filters_and_sorts() {
        let dir = tempdir().unwrap();
        let sub = dir.path().join("Sub").join("Deeper");
        fs::create_dir_all(&sub).unwrap();

        fs::write(dir.path().join("b.abc"), b"X:1").unwrap();
        fs::write(dir.path().join("a.ABC"), b"X:1").unwrap();
        fs::write(dir.path().join("notes.txt"), b"ignore me").unwrap();
        fs::write(sub.join("c.abc"), b"X:1").unwrap();

        let settings = LibrarySettings::default();
        let files = collect(dir.path(), &settings);
        assert_eq!(
            names(&files, dir.path()),
            vec!["a.ABC", "b.abc", "Sub/Deeper/c.abc"]
        );
    }

    #[test]
    fn collect_is_stable_for_names_differing_only_in_case() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("song.abc"), b"").unwrap();
        fs::write(dir.path().join("Song.abc"), b"").unwrap();

        let files = collect(dir.path(), &LibrarySettings::default());
        // Case-insensitive filesystems hold only one of the two.
        if files.len() == 2 {
            assert_eq!(names(&files, dir.path()), vec!["Song.abc", "song.abc"]);
        }
    }

    #[test]
    fn collect_keeps_file_named_only_by_extension() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(".abc"), b"T:Hidden Name\n").unwrap();
        fs::write(dir.path().join("a.abc"), b"").unwrap();

        let files = collect(dir.path(), &LibrarySettings::default());
        assert_eq!(names(&files, dir.path()), vec![".abc", "a.abc"]);
    }

    #[cfg(unix)]
    #[test]
    fn collect_keeps_dangling_symlink() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("a.abc"), b"").unwrap();
        std::os::unix::fs::symlink(
            dir.path().join("gone.abc"),
            dir.path().join("dangling.abc"),
        )
        .unwrap();

        for follow_links in [true, false] {
            let settings = LibrarySettings {
                follow_links,
                ..LibrarySettings::default()
            };
            let files = collect(dir.path(), &settings);
            assert_eq!(names(&files, dir.path()), vec!["a.abc", "dangling.abc"]);
        }
    }

    #[test]
    fn collect_on_missing_root_is_empty() {
        let dir = tempdir().unwrap();
        let files = collect(&dir.path().join("missing"), &LibrarySettings::default());
        assert!(files.is_empty());
    }

    #[test]
    fn collect_respects_include_hidden_false() {
        let dir = tempdir().unwrap();
        let hidden_dir = dir.path().join(".cache");
        fs::create_dir_all(&hidden_dir).unwrap();
        fs::write(dir.path().join(".hidden.abc"), b"").unwrap();
        fs::write(hidden_dir.join("inner.abc"), b"").unwrap();
        fs::write(dir.path().join("visible.abc"), b"").unwrap();

        let settings = LibrarySettings {
            include_hidden: false,
            ..LibrarySettings::default()
        };
        let files = collect(dir.path(), &settings);
        assert_eq!(names(&files, dir.path()), vec!["visible.abc"]);

        let all = collect(dir.path(), &LibrarySettings::default());
        assert_eq!(all.len(), 3);
    }

    #[test]
    fn collect_respects_max_depth() {
        let dir = tempdir().unwrap();
        let d1 = dir.path().join("d1");
        let d2 = d1.join("d2");
        fs::create_dir_all(&d2).unwrap();
        fs::write(dir.path().join("root.abc"), b"").unwrap();
        fs::write(d1.join("one.abc"), b"").unwrap();
        fs::write(d2.join("two.abc"), b"").unwrap();

        // WalkDir depth counts root as 0, children as 1, grandchildren as 2.
        let settings = LibrarySettings {
            max_depth: Some(2),
            ..LibrarySettings::default()
        };
        let files = collect(dir.path(), &settings);
        assert_eq!(names(&files, dir.path()), vec!["d1/one.abc", "root.abc"]);
    }
}
