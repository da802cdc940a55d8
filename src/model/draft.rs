use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

/// Sigil every stored mention handle starts with.
pub const MENTION_SIGIL: char = '@';

/// An insertion-ordered set of strings. Membership is an exact,
/// case-sensitive match.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TokenSet(IndexSet<String>);

impl TokenSet {
    pub fn new() -> Self {
        TokenSet(IndexSet::new())
    }

    /// Append `token` unless already present. Returns whether it was added.
    pub fn insert(&mut self, token: String) -> bool {
        self.0.insert(token)
    }

    /// Remove `token`, keeping the order of the rest. Returns whether it was present.
    pub fn remove(&mut self, token: &str) -> bool {
        self.0.shift_remove(token)
    }

    pub fn contains(&self, token: &str) -> bool {
        self.0.contains(token)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }
}

impl<S: Into<String>> FromIterator<S> for TokenSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        TokenSet(iter.into_iter().map(Into::into).collect())
    }
}

/// Normalize a handle to carry exactly one leading `@`.
/// Returns `None` for handles that are blank once the sigil is stripped.
pub fn normalize_handle(handle: &str) -> Option<String> {
    let bare = handle.trim().trim_start_matches(MENTION_SIGIL).trim_start();
    if bare.is_empty() {
        return None;
    }
    Some(format!("{}{}", MENTION_SIGIL, bare))
}

/// The user-editable inputs of one share session.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Draft {
    pub post_text: String,
    pub mention_handles: TokenSet,
    pub trend_names: TokenSet,
}

impl Draft {
    /// A draft holding only the given default mention (if any).
    pub fn with_default_mention(handle: Option<&str>) -> Self {
        let mut draft = Draft::default();
        if let Some(h) = handle.and_then(normalize_handle) {
            draft.mention_handles.insert(h);
        }
        draft
    }
}
