use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::model::config::ShareConfig;

/// File name looked up in the working directory when no path is given.
pub const CONFIG_FILE_NAME: &str = "postshare.toml";

/// Error type for reading configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not read {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not parse {path}: {source}")]
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Read and parse a config file.
pub fn read_config(path: &Path) -> Result<ShareConfig, ConfigError> {
    let text = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
        path: path.to_path_buf(),
        source: e,
    })?;
    toml::from_str(&text).map_err(|e| ConfigError::ParseError {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Load the config: an explicit path must exist; otherwise
/// `postshare.toml` in `dir` is used when present, else the defaults.
pub fn load_config(explicit: Option<&Path>, dir: &Path) -> Result<ShareConfig, ConfigError> {
    if let Some(path) = explicit {
        return read_config(path);
    }
    let path = dir.join(CONFIG_FILE_NAME);
    if path.is_file() {
        debug!(path = %path.display(), "loading config");
        read_config(&path)
    } else {
        debug!("no config file, using defaults");
        Ok(ShareConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample_config() -> &'static str {
        r#"[share]
site_handle = "campaign"
site_url = "https://campaign.test"
default_locale = "nl"

[limits]
char_limit = 500

[variants]
ranges = [[0, 1], [1, 2]]

[quotes]
nl = "Samen staan we sterk"
"#
    }

    #[test]
    fn explicit_path_is_read() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("custom.toml");
        fs::write(&path, sample_config()).unwrap();

        let config = load_config(Some(&path), tmp.path()).unwrap();
        assert_eq!(config.share.site_handle, "campaign");
        assert_eq!(config.limits.char_limit, 500);
        assert_eq!(config.limits.link_reserved_chars, 23);
        assert_eq!(config.variants.ranges, vec![[0, 1], [1, 2]]);
        assert_eq!(config.quote_for("en"), Some("Samen staan we sterk"));
    }

    #[test]
    fn file_in_dir_is_picked_up() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(CONFIG_FILE_NAME), sample_config()).unwrap();
        let config = load_config(None, tmp.path()).unwrap();
        assert_eq!(config.share.default_locale, "nl");
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let tmp = TempDir::new().unwrap();
        let config = load_config(None, tmp.path()).unwrap();
        assert_eq!(config.share.site_handle, "samenvvv");
    }

    #[test]
    fn missing_explicit_path_is_an_error() {
        let tmp = TempDir::new().unwrap();
        let err = load_config(Some(&tmp.path().join("nope.toml")), tmp.path()).unwrap_err();
        assert!(matches!(err, ConfigError::ReadError { .. }));
    }

    #[test]
    fn malformed_file_is_an_error() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(CONFIG_FILE_NAME), "[limits]\nchar_limit = \"lots\"\n").unwrap();
        let err = load_config(None, tmp.path()).unwrap_err();
        assert!(err.to_string().starts_with("could not parse"));
    }
}
