use std::fs;
use std::io::{self, Write};
use std::path::Path;

use tempfile::NamedTempFile;
use tracing::warn;

use crate::model::mention::MentionCandidate;

/// Write `content` to `path` atomically using a temp file + rename.
fn atomic_write(path: &Path, content: &[u8]) -> io::Result<()> {
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir)?;
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(content)?;
    tmp.flush()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

/// Read the saved mentions cache. A missing or malformed file reads as empty.
pub fn read_saved_mentions(path: &Path) -> Vec<MentionCandidate> {
    let Ok(content) = fs::read_to_string(path) else {
        return Vec::new();
    };
    match serde_json::from_str(&content) {
        Ok(list) => list,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "ignoring malformed saved mentions");
            Vec::new()
        }
    }
}

/// Write the saved mentions cache.
pub fn write_saved_mentions(path: &Path, list: &[MentionCandidate]) -> io::Result<()> {
    let content = serde_json::to_string_pretty(list)?;
    atomic_write(path, content.as_bytes())
}

/// Append `candidate` unless its username is already saved.
/// Returns whether the cache changed.
pub fn save_mention(path: &Path, candidate: MentionCandidate) -> io::Result<bool> {
    let mut list = read_saved_mentions(path);
    if list.iter().any(|m| m.username == candidate.username) {
        return Ok(false);
    }
    list.push(candidate);
    write_saved_mentions(path, &list)?;
    Ok(true)
}

/// Remove every saved entry with `username`. Returns whether the cache changed.
pub fn remove_saved_mention(path: &Path, username: &str) -> io::Result<bool> {
    let mut list = read_saved_mentions(path);
    let before = list.len();
    list.retain(|m| m.username != username);
    if list.len() == before {
        return Ok(false);
    }
    write_saved_mentions(path, &list)?;
    Ok(true)
}
