//! ABC header extraction.
//!
//! Only the metadata header lines are interpreted; the tune body is opaque.

use std::fs;
use std::io;
use std::path::Path;

use tracing::warn;

use super::model::HeaderMetadata;

const DEFAULT_TRACK_ID: &str = "0";

/// Result of reading one file's headers.
///
/// Both variants carry usable metadata; `Degraded` additionally records why
/// the file could not be read.
#[derive(Debug)]
pub enum ParseOutcome {
    Parsed(HeaderMetadata),
    Degraded {
        metadata: HeaderMetadata,
        error: io::Error,
    },
}

impl ParseOutcome {
    pub fn into_metadata(self) -> HeaderMetadata {
        match self {
            ParseOutcome::Parsed(metadata) => metadata,
            ParseOutcome::Degraded { metadata, .. } => metadata,
        }
    }

    /// The read error, when the metadata is only a filename fallback.
    pub fn error(&self) -> Option<&io::Error> {
        match self {
            ParseOutcome::Parsed(_) => None,
            ParseOutcome::Degraded { error, .. } => Some(error),
        }
    }
}

/// Single forward pass over header lines. Each optional field is assigned on
/// its first match and never again.
#[derive(Debug, Default)]
pub struct HeaderScanner {
    title: Option<String>,
    parts: Vec<String>,
    composer: Option<String>,
    transcriber: Option<String>,
    instrument: Option<String>,
    track_id: Option<String>,
}

impl HeaderScanner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn feed(&mut self, raw: &str) {
        // `X:` is matched on the untrimmed line.
        if self.track_id.is_none()
            && let Some(id) = raw.strip_prefix("X:")
        {
            self.track_id = Some(id.trim().to_string());
        }

        let line = raw.trim();
        if line.is_empty() || line.starts_with('%') {
            return;
        }

        let Some((tag, value)) = split_field(line) else {
            return;
        };

        match tag {
            'T' => set_once(&mut self.title, value),
            'P' | 'V' => self.push_part(value),
            'I' => {
                if self.instrument.is_none() {
                    self.instrument = Some(value.to_string());
                    self.push_part(value);
                }
            }
            'C' => set_once(&mut self.composer, value),
            'Z' => set_once(&mut self.transcriber, value),
            _ => {}
        }
    }

    /// Close the scan, substituting `fallback_title` for a missing or empty title.
    pub fn finish(self, fallback_title: &str) -> HeaderMetadata {
        let title = match self.title {
            Some(t) if !t.is_empty() => t,
            _ => fallback_title.to_string(),
        };

        HeaderMetadata {
            title,
            parts: self.parts,
            composer: self.composer,
            transcriber: self.transcriber,
            instrument: self.instrument,
            track_id: self
                .track_id
                .unwrap_or_else(|| DEFAULT_TRACK_ID.to_string()),
        }
    }

    fn push_part(&mut self, value: &str) {
        if !value.is_empty() && !self.parts.iter().any(|p| p == value) {
            self.parts.push(value.to_string());
        }
    }
}

fn split_field(line: &str) -> Option<(char, &str)> {
    let mut chars = line.chars();
    let tag = chars.next()?;
    let rest = chars.as_str().strip_prefix(':')?;
    Some((tag, rest.trim()))
}

fn set_once(slot: &mut Option<String>, value: &str) {
    if slot.is_none() {
        *slot = Some(value.to_string());
    }
}

/// Parse headers out of in-memory text.
pub fn parse_text(text: &str, fallback_title: &str) -> HeaderMetadata {
    let mut scanner = HeaderScanner::new();
    for line in text.lines() {
        scanner.feed(line);
    }
    scanner.finish(fallback_title)
}

/// Read `path` and extract its header metadata.
///
/// Invalid UTF-8 is replaced rather than rejected. A file that cannot be read
/// yields filename-only metadata and a logged warning.
pub fn parse_file(path: &Path) -> ParseOutcome {
    let fallback = file_stem(path);

    match fs::read(path) {
        Ok(bytes) => {
            let text = String::from_utf8_lossy(&bytes);
            ParseOutcome::Parsed(parse_text(&text, &fallback))
        }
        Err(error) => {
            warn!(path = %path.display(), %error, "unable to read notation file");
            ParseOutcome::Degraded {
                metadata: HeaderScanner::new().finish(&fallback),
                error,
            }
        }
    }
}

pub(crate) fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}
