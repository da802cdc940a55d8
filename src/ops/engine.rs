use serde::Serialize;
use tracing::{debug, warn};

use crate::model::config::{LimitConfig, ShareConfig};
use crate::model::draft::{Draft, TokenSet, normalize_handle};
use crate::model::post::Post;
use crate::ops::compose::{CharacterBudget, character_budget, compose_content};
use crate::ops::link::share_url;
use crate::ops::random::{self, RandomSource};
use crate::ops::seed::{SeedVariant, VariantPool, seed_text};

/// What a caller needs to render the share box and enable the share action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShareSnapshot {
    pub composed_content: String,
    pub total_char_count: usize,
    pub is_over_limit: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub share_url: Option<String>,
}

/// Owns one share session: the draft inputs, the active post, and the
/// derived composition, which is recomputed after every mutation.
#[derive(Debug, Clone)]
pub struct ComposeEngine {
    draft: Draft,
    post: Option<Post>,
    default_mention: Option<String>,
    limits: LimitConfig,
    composed: String,
    budget: CharacterBudget,
}

impl ComposeEngine {
    /// A fresh session holding only `default_mention` (if any).
    pub fn new(default_mention: Option<&str>, limits: LimitConfig) -> Self {
        let default_mention = default_mention.and_then(normalize_handle);
        let mut engine = ComposeEngine {
            draft: Draft::with_default_mention(default_mention.as_deref()),
            post: None,
            default_mention,
            limits,
            composed: String::new(),
            budget: CharacterBudget::default(),
        };
        engine.refresh();
        engine
    }

    pub fn from_config(config: &ShareConfig) -> Self {
        ComposeEngine::new(Some(config.share.site_handle.as_str()), config.limits)
    }

    /// Drop the active post and all draft inputs, back to session start.
    pub fn reset(&mut self) {
        self.draft = Draft::with_default_mention(self.default_mention.as_deref());
        self.post = None;
        self.refresh();
    }

    // -----------------------------------------------------------------------
    // Mutations
    // -----------------------------------------------------------------------

    /// Make `post` the active post and derive the draft text from it.
    /// Selected mentions and trends are kept.
    pub fn seed_from_post(&mut self, post: Post, variant: Option<&SeedVariant>) {
        self.draft.post_text = seed_text(&post.text, variant);
        debug!(post_id = %post.id, ?variant, "seeded draft from post");
        self.post = Some(post);
        self.refresh();
    }

    /// Seed from `post` using a variant drawn from `pool`, or the full body
    /// when the pool is empty.
    pub fn seed_random_variant(
        &mut self,
        post: Post,
        pool: &VariantPool,
        quotation: Option<&str>,
        rng: &mut dyn RandomSource,
    ) {
        let variant = pool
            .pick(rng)
            .map(|range| SeedVariant::excerpt(range, quotation));
        self.seed_from_post(post, variant.as_ref());
    }

    pub fn add_mention(&mut self, handle: &str) {
        let Some(handle) = normalize_handle(handle) else {
            debug!(handle, "ignoring blank mention");
            return;
        };
        if self.draft.mention_handles.insert(handle) {
            self.refresh();
        }
    }

    pub fn remove_mention(&mut self, handle: &str) {
        let Some(handle) = normalize_handle(handle) else {
            return;
        };
        if self.draft.mention_handles.remove(&handle) {
            self.refresh();
        }
    }

    pub fn add_trend(&mut self, name: &str) {
        if name.trim().is_empty() {
            debug!("ignoring blank trend");
            return;
        }
        if self.draft.trend_names.insert(name.to_string()) {
            self.refresh();
        }
    }

    pub fn remove_trend(&mut self, name: &str) {
        if self.draft.trend_names.remove(name) {
            self.refresh();
        }
    }

    pub fn set_post_text(&mut self, text: &str) {
        self.draft.post_text = text.to_string();
        self.refresh();
    }

    /// Switch to a uniformly chosen related post of the active post and seed
    /// the draft from its full text. The picked post inherits the active
    /// post's tags and related posts when it carries none of its own.
    ///
    /// Returns the new active post, or `None` (changing nothing) when there
    /// is no active post or it has no related posts.
    pub fn pick_random_related_post(&mut self, rng: &mut dyn RandomSource) -> Option<&Post> {
        let Some(current) = self.post.as_ref() else {
            warn!("no active post to pick a related post from");
            return None;
        };
        let Some(picked) = random::pick(&current.related_posts, rng) else {
            debug!(post_id = %current.id, "active post has no related posts");
            return None;
        };

        let mut next = picked.clone();
        if next.tags.is_none() {
            next.tags = current.tags.clone();
        }
        if next.related_posts.is_empty() {
            next.related_posts = current.related_posts.clone();
        }
        self.seed_from_post(next, None);
        self.post.as_ref()
    }

    // -----------------------------------------------------------------------
    // Reads
    // -----------------------------------------------------------------------

    pub fn post_text(&self) -> &str {
        &self.draft.post_text
    }

    pub fn mention_handles(&self) -> &TokenSet {
        &self.draft.mention_handles
    }

    pub fn trend_names(&self) -> &TokenSet {
        &self.draft.trend_names
    }

    pub fn active_post(&self) -> Option<&Post> {
        self.post.as_ref()
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn composed_content(&self) -> &str {
        &self.composed
    }

    pub fn character_budget(&self) -> CharacterBudget {
        self.budget
    }

    pub fn limits(&self) -> &LimitConfig {
        &self.limits
    }

    /// The outbound record; `site_url` enables the share link.
    pub fn snapshot(&self, site_url: Option<&str>, locale: &str) -> ShareSnapshot {
        let share_url = match (site_url, self.post.as_ref()) {
            (Some(base), Some(post)) => share_url(base, locale, post),
            _ => None,
        };
        ShareSnapshot {
            composed_content: self.composed.clone(),
            total_char_count: self.budget.total_char_count,
            is_over_limit: self.budget.is_over_limit,
            share_url,
        }
    }

    fn refresh(&mut self) {
        match self.post.as_ref() {
            Some(post) => {
                let tags = post.tags.as_ref();
                self.composed = compose_content(&self.draft, tags);
                self.budget = character_budget(&self.draft, tags, &self.limits);
            }
            None => {
                self.composed.clear();
                self.budget = CharacterBudget::default();
            }
        }
        debug!(
            total = self.budget.total_char_count,
            over_limit = self.budget.is_over_limit,
            "recomputed composition"
        );
    }
}
