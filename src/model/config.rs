use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Configuration from postshare.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ShareConfig {
    #[serde(default)]
    pub share: ShareInfo,
    #[serde(default)]
    pub limits: LimitConfig,
    #[serde(default)]
    pub variants: VariantConfig,
    /// Decorative quotation appended to sentence-range variants, by locale
    #[serde(default)]
    pub quotes: HashMap<String, String>,
}

impl ShareConfig {
    /// Quotation for `locale`, falling back to the default locale.
    pub fn quote_for(&self, locale: &str) -> Option<&str> {
        self.quotes
            .get(locale)
            .or_else(|| self.quotes.get(&self.share.default_locale))
            .map(String::as_str)
            .filter(|q| !q.trim().is_empty())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShareInfo {
    /// Mention present at the start of every session. Empty disables it.
    #[serde(default = "default_site_handle")]
    pub site_handle: String,
    /// Base URL used to build share links
    #[serde(default)]
    pub site_url: Option<String>,
    #[serde(default = "default_locale")]
    pub default_locale: String,
}

impl Default for ShareInfo {
    fn default() -> Self {
        ShareInfo {
            site_handle: default_site_handle(),
            site_url: None,
            default_locale: default_locale(),
        }
    }
}

fn default_site_handle() -> String {
    "samenvvv".to_string()
}

fn default_locale() -> String {
    "en".to_string()
}

/// Character budget of the target network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LimitConfig {
    #[serde(default = "default_char_limit")]
    pub char_limit: usize,
    /// Reserved for the auto-shortened link the network appends
    #[serde(default = "default_link_reserved_chars")]
    pub link_reserved_chars: usize,
}

impl Default for LimitConfig {
    fn default() -> Self {
        LimitConfig {
            char_limit: default_char_limit(),
            link_reserved_chars: default_link_reserved_chars(),
        }
    }
}

fn default_char_limit() -> usize {
    280
}

fn default_link_reserved_chars() -> usize {
    23
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariantConfig {
    /// Half-open `[start, end)` sentence ranges to draw share variants from
    #[serde(default = "default_ranges")]
    pub ranges: Vec<[usize; 2]>,
}

impl Default for VariantConfig {
    fn default() -> Self {
        VariantConfig {
            ranges: default_ranges(),
        }
    }
}

fn default_ranges() -> Vec<[usize; 2]> {
    vec![[0, 1], [0, 2], [1, 3], [0, 3], [2, 4]]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_uses_defaults() {
        let config: ShareConfig = toml::from_str("").unwrap();
        assert_eq!(config.share.site_handle, "samenvvv");
        assert_eq!(config.share.default_locale, "en");
        assert_eq!(config.limits.char_limit, 280);
        assert_eq!(config.limits.link_reserved_chars, 23);
        assert_eq!(config.variants.ranges.len(), 5);
        assert!(config.quotes.is_empty());
    }

    #[test]
    fn partial_tables_fill_missing_fields() {
        let config: ShareConfig = toml::from_str(
            r#"
[share]
site_url = "https://example.org"

[limits]
char_limit = 500
"#,
        )
        .unwrap();
        assert_eq!(config.share.site_handle, "samenvvv");
        assert_eq!(config.share.site_url.as_deref(), Some("https://example.org"));
        assert_eq!(config.limits.char_limit, 500);
        assert_eq!(config.limits.link_reserved_chars, 23);
    }

    #[test]
    fn quote_falls_back_to_default_locale() {
        let config: ShareConfig = toml::from_str(
            r#"
[quotes]
en = "Stand with us"
tr = "  "
"#,
        )
        .unwrap();
        assert_eq!(config.quote_for("en"), Some("Stand with us"));
        assert_eq!(config.quote_for("nl"), Some("Stand with us"));
        // blank entries count as absent
        assert_eq!(config.quote_for("tr"), None);
    }
}
