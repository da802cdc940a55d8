use serde::{Deserialize, Serialize};

/// Hashtag data attached to a campaign post.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PostTags {
    /// The campaign hashtag, always emitted first in the tags block
    #[serde(default)]
    pub primary: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary: Option<String>,
    /// URL slug of the hashtag page
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    /// URL slug of the page the hashtag belongs to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_slug: Option<String>,
}

impl PostTags {
    pub fn new(primary: impl Into<String>) -> Self {
        PostTags {
            primary: primary.into(),
            ..Default::default()
        }
    }

    /// Primary then secondary tag, skipping blanks.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.primary.as_str())
            .chain(self.secondary.as_deref())
            .filter(|t| !t.trim().is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRef {
    pub url: String,
}

/// A campaign post as supplied by the content backend. Read-only to the
/// composition engine.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Post {
    #[serde(default)]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(default)]
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<PostTags>,
    /// Other posts of the same campaign
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub related_posts: Vec<Post>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<ImageRef>,
}

impl Post {
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Post {
            id: id.into(),
            text: text.into(),
            ..Default::default()
        }
    }

    pub fn with_tags(mut self, tags: PostTags) -> Self {
        self.tags = Some(tags);
        self
    }

    pub fn with_related(mut self, related: Vec<Post>) -> Self {
        self.related_posts = related;
        self
    }
}
