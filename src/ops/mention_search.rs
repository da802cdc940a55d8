use regex::{Regex, RegexBuilder};

use crate::model::draft::TokenSet;
use crate::model::mention::MentionCandidate;
use crate::util::unicode::is_at_least;

/// Search keys shorter than this list the whole directory.
pub const MIN_SEARCH_KEY_CHARS: usize = 2;

/// Result of filtering a mention directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MentionSearch<'a> {
    pub matches: Vec<&'a MentionCandidate>,
    /// The key matched nothing locally; the caller should ask the network's
    /// user directory instead.
    pub needs_remote_lookup: bool,
}

fn key_pattern(key: &str) -> Option<Regex> {
    RegexBuilder::new(&regex::escape(key))
        .case_insensitive(true)
        .build()
        .ok()
}

/// Filter `directory` by `key`, leaving out handles already in `selected`.
pub fn search_mentions<'a>(
    directory: &'a [MentionCandidate],
    key: &str,
    selected: &TokenSet,
) -> MentionSearch<'a> {
    let key = key.trim().trim_start_matches('@');
    let pattern = if is_at_least(key, MIN_SEARCH_KEY_CHARS) {
        key_pattern(key)
    } else {
        None
    };

    let found: Vec<&MentionCandidate> = directory
        .iter()
        .filter(|c| pattern.as_ref().is_none_or(|re| re.is_match(&c.username)))
        .collect();
    let needs_remote_lookup = pattern.is_some() && found.is_empty();

    let matches = found
        .into_iter()
        .filter(|c| c.handle().is_some_and(|h| !selected.contains(&h)))
        .collect();

    MentionSearch {
        matches,
        needs_remote_lookup,
    }
}
