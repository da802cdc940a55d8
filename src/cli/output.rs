use serde::Serialize;

use crate::model::mention::MentionCandidate;
use crate::ops::compose::CharacterBudget;
use crate::ops::mention_search::MentionSearch;

// ---------------------------------------------------------------------------
// JSON output structs
// ---------------------------------------------------------------------------

#[derive(Serialize)]
pub struct BudgetJson {
    pub total_char_count: usize,
    pub char_limit: usize,
    pub is_over_limit: bool,
}

#[derive(Serialize)]
pub struct MentionJson {
    pub username: String,
    pub handle: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[derive(Serialize)]
pub struct MentionSearchJson {
    pub matches: Vec<MentionJson>,
    pub needs_remote_lookup: bool,
}

// ---------------------------------------------------------------------------
// Conversions
// ---------------------------------------------------------------------------

pub fn budget_to_json(budget: CharacterBudget, char_limit: usize) -> BudgetJson {
    BudgetJson {
        total_char_count: budget.total_char_count,
        char_limit,
        is_over_limit: budget.is_over_limit,
    }
}

pub fn mention_to_json(candidate: &MentionCandidate) -> MentionJson {
    MentionJson {
        username: candidate.username.clone(),
        handle: candidate.handle().unwrap_or_default(),
        name: candidate.name.clone(),
    }
}

pub fn search_to_json(search: &MentionSearch<'_>) -> MentionSearchJson {
    MentionSearchJson {
        matches: search.matches.iter().map(|c| mention_to_json(c)).collect(),
        needs_remote_lookup: search.needs_remote_lookup,
    }
}

// ---------------------------------------------------------------------------
// Text formatting
// ---------------------------------------------------------------------------

/// `55/280`, with a marker when the limit is exceeded.
pub fn format_budget(budget: CharacterBudget, char_limit: usize) -> String {
    if budget.is_over_limit {
        format!("{}/{} (over limit)", budget.total_char_count, char_limit)
    } else {
        format!("{}/{}", budget.total_char_count, char_limit)
    }
}

/// One mention per line: handle, then the display name when known.
pub fn format_mention_line(candidate: &MentionCandidate) -> String {
    let handle = candidate.handle().unwrap_or_default();
    match candidate.name.as_deref() {
        Some(name) if !name.is_empty() => format!("{}  {}", handle, name),
        _ => handle,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn budget_text() {
        let ok = CharacterBudget {
            total_char_count: 55,
            is_over_limit: false,
        };
        assert_eq!(format_budget(ok, 280), "55/280");
        let over = CharacterBudget {
            total_char_count: 281,
            is_over_limit: true,
        };
        assert_eq!(format_budget(over, 280), "281/280 (over limit)");
    }

    #[test]
    fn mention_line() {
        let mut c = MentionCandidate::new("alice");
        assert_eq!(format_mention_line(&c), "@alice");
        c.name = Some("Alice A".into());
        assert_eq!(format_mention_line(&c), "@alice  Alice A");
    }

    #[test]
    fn mention_json_skips_missing_name() {
        let json = serde_json::to_string(&mention_to_json(&MentionCandidate::new("bob"))).unwrap();
        assert_eq!(json, r#"{"username":"bob","handle":"@bob"}"#);
    }
}
