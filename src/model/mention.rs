use serde::{Deserialize, Serialize};

/// A user record from a mention directory or the saved mentions cache.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MentionCandidate {
    /// Network username, without the `@` sigil
    pub username: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_image_url: Option<String>,
}

impl MentionCandidate {
    pub fn new(username: impl Into<String>) -> Self {
        MentionCandidate {
            username: username.into(),
            name: None,
            profile_image_url: None,
        }
    }

    /// The handle this candidate contributes to a draft.
    pub fn handle(&self) -> Option<String> {
        super::draft::normalize_handle(&self.username)
    }
}
