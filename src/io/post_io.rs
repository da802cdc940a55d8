use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;

use crate::model::mention::MentionCandidate;
use crate::model::post::Post;

/// Error type for reading input JSON files
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("could not read {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not parse {path}: {source}")]
    ParseError {
        path: PathBuf,
        source: serde_json::Error,
    },
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, InputError> {
    let text = fs::read_to_string(path).map_err(|e| InputError::ReadError {
        path: path.to_path_buf(),
        source: e,
    })?;
    serde_json::from_str(&text).map_err(|e| InputError::ParseError {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Read a post (with its related posts) from a JSON file.
pub fn read_post(path: &Path) -> Result<Post, InputError> {
    read_json(path)
}

/// Read a mention directory (a JSON array of candidates).
pub fn read_mention_directory(path: &Path) -> Result<Vec<MentionCandidate>, InputError> {
    read_json(path)
}
