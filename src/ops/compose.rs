use serde::Serialize;

use crate::model::config::LimitConfig;
use crate::model::draft::Draft;
use crate::model::post::PostTags;
use crate::util::unicode::{char_count, joined_char_count};

/// Character count of a composed share against the network's limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct CharacterBudget {
    pub total_char_count: usize,
    pub is_over_limit: bool,
}

/// Tags in output order: the post's own tags, then the user's trends.
fn tag_lines<'a>(draft: &'a Draft, tags: Option<&'a PostTags>) -> impl Iterator<Item = &'a str> {
    tags.into_iter()
        .flat_map(|t| t.iter())
        .chain(draft.trend_names.iter())
}

/// The text handed to the share target:
/// post text, blank line, one mention per line, blank line, one tag per line.
pub fn compose_content(draft: &Draft, tags: Option<&PostTags>) -> String {
    let mentions: Vec<&str> = draft.mention_handles.iter().collect();
    let tag_block: Vec<&str> = tag_lines(draft, tags).collect();
    format!(
        "{}\n\n{}\n\n{}",
        draft.post_text,
        mentions.join("\n"),
        tag_block.join("\n")
    )
}

/// Count the draft from scratch. Separators between mentions and tags are
/// not counted; the link reserve always is.
pub fn character_budget(draft: &Draft, tags: Option<&PostTags>, limits: &LimitConfig) -> CharacterBudget {
    let total = limits.link_reserved_chars
        + char_count(&draft.post_text)
        + joined_char_count(draft.mention_handles.iter())
        + joined_char_count(tag_lines(draft, tags));
    CharacterBudget {
        total_char_count: total,
        is_over_limit: total > limits.char_limit,
    }
}
