use crate::model::config::VariantConfig;
use crate::ops::random::{self, RandomSource};

/// A half-open `[start, end)` range of sentence indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SentenceRange {
    pub start: usize,
    pub end: usize,
}

impl SentenceRange {
    pub fn new(start: usize, end: usize) -> Self {
        SentenceRange { start, end }
    }

    /// Clamp to `count` available sentences. Always selects at least one
    /// sentence when `count > 0`.
    pub fn clamp(self, count: usize) -> SentenceRange {
        if count == 0 {
            return SentenceRange::new(0, 0);
        }
        let start = self.start.min(count - 1);
        let end = self.end.min(count).max(start + 1);
        SentenceRange::new(start, end)
    }
}

impl From<[usize; 2]> for SentenceRange {
    fn from([start, end]: [usize; 2]) -> Self {
        SentenceRange::new(start, end)
    }
}

/// How the draft text is derived from a post body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeedVariant {
    /// A slice of the body's sentences, followed by an optional quotation
    Excerpt {
        range: SentenceRange,
        quotation: Option<String>,
    },
}

impl SeedVariant {
    pub fn excerpt(range: SentenceRange, quotation: Option<&str>) -> Self {
        SeedVariant::Excerpt {
            range,
            quotation: quotation.map(str::to_string),
        }
    }
}

/// A sentence of a post body. `terminated` is false only for trailing text
/// with no closing `.`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sentence<'a> {
    pub text: &'a str,
    pub terminated: bool,
}

/// Split `body` on `.` delimiters, dropping segments that are blank.
pub fn split_sentences(body: &str) -> Vec<Sentence<'_>> {
    let mut segments: Vec<&str> = body.split('.').collect();
    // split always yields one more segment than there are delimiters
    let tail = segments.pop().unwrap_or("");
    let mut sentences: Vec<Sentence<'_>> = segments
        .into_iter()
        .filter(|s| !s.trim().is_empty())
        .map(|text| Sentence {
            text,
            terminated: true,
        })
        .collect();
    if !tail.trim().is_empty() {
        sentences.push(Sentence {
            text: tail,
            terminated: false,
        });
    }
    sentences
}

/// The draft text for `body` under `variant` (the full body when `None`).
/// Trimmed; never empty when `body` has non-whitespace content.
pub fn seed_text(body: &str, variant: Option<&SeedVariant>) -> String {
    let Some(SeedVariant::Excerpt { range, quotation }) = variant else {
        return body.trim().to_string();
    };

    let sentences = split_sentences(body);
    if sentences.is_empty() {
        return body.trim().to_string();
    }

    let range = range.clamp(sentences.len());
    let mut excerpt = String::new();
    for sentence in &sentences[range.start..range.end] {
        excerpt.push_str(sentence.text);
        if sentence.terminated {
            excerpt.push('.');
        }
    }

    let mut text = excerpt.trim().to_string();
    if let Some(quote) = quotation.as_deref().map(str::trim)
        && !quote.is_empty()
    {
        text.push_str("\n\n");
        text.push_str(quote);
    }
    text
}

/// The configured sentence ranges share variants are drawn from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariantPool {
    ranges: Vec<SentenceRange>,
}

impl VariantPool {
    pub fn new(ranges: Vec<SentenceRange>) -> Self {
        VariantPool { ranges }
    }

    pub fn ranges(&self) -> &[SentenceRange] {
        &self.ranges
    }

    /// Uniform pick over every configured range.
    pub fn pick(&self, rng: &mut dyn RandomSource) -> Option<SentenceRange> {
        random::pick(&self.ranges, rng).copied()
    }
}

impl From<&VariantConfig> for VariantPool {
    fn from(config: &VariantConfig) -> Self {
        VariantPool::new(config.ranges.iter().copied().map(SentenceRange::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    struct Fixed(usize);

    impl RandomSource for Fixed {
        fn next_index(&mut self, _len: usize) -> usize {
            self.0
        }
    }

    fn excerpt(start: usize, end: usize) -> SeedVariant {
        SeedVariant::excerpt(SentenceRange::new(start, end), None)
    }

    #[test]
    fn split_keeps_leading_spaces_and_drops_empty_tail() {
        let sentences = split_sentences("A. B. C. D.");
        let texts: Vec<&str> = sentences.iter().map(|s| s.text).collect();
        assert_eq!(texts, vec!["A", " B", " C", " D"]);
        assert!(sentences.iter().all(|s| s.terminated));
    }

    #[test]
    fn split_marks_unterminated_tail() {
        let sentences = split_sentences("One. Two");
        assert_eq!(sentences.len(), 2);
        assert_eq!(sentences[1].text, " Two");
        assert!(!sentences[1].terminated);
    }

    #[test]
    fn split_skips_ellipsis_segments() {
        let texts: Vec<&str> = split_sentences("Wait... what.")
            .iter()
            .map(|s| s.text)
            .collect();
        assert_eq!(texts, vec!["Wait", " what"]);
    }

    #[test]
    fn full_body_is_trimmed() {
        assert_eq!(seed_text("  Big win today. \n", None), "Big win today.");
    }

    #[test]
    fn excerpt_takes_requested_sentences() {
        assert_eq!(seed_text("A. B. C. D.", Some(&excerpt(0, 2))), "A. B.");
        assert_eq!(seed_text("A. B. C. D.", Some(&excerpt(1, 3))), "B. C.");
    }

    #[test]
    fn excerpt_clamps_to_available_sentences() {
        assert_eq!(seed_text("A. B.", Some(&excerpt(1, 4))), "B.");
        assert_eq!(seed_text("A. B.", Some(&excerpt(5, 9))), "B.");
        assert_eq!(seed_text("A. B.", Some(&excerpt(1, 1))), "B.");
    }

    #[test]
    fn excerpt_without_delimiters_uses_whole_body() {
        assert_eq!(seed_text("No full stop", Some(&excerpt(2, 3))), "No full stop");
        assert_eq!(seed_text("...", Some(&excerpt(0, 1))), "...");
    }

    #[test]
    fn excerpt_appends_quotation() {
        let variant = SeedVariant::excerpt(SentenceRange::new(0, 1), Some(" Stand with us "));
        assert_eq!(
            seed_text("First. Second.", Some(&variant)),
            "First.\n\nStand with us"
        );
    }

    #[test]
    fn blank_quotation_is_ignored() {
        let variant = SeedVariant::excerpt(SentenceRange::new(0, 1), Some("  "));
        assert_eq!(seed_text("First. Second.", Some(&variant)), "First.");
    }

    #[test]
    fn clamp_rules() {
        assert_eq!(SentenceRange::new(0, 2).clamp(0), SentenceRange::new(0, 0));
        assert_eq!(SentenceRange::new(0, 2).clamp(1), SentenceRange::new(0, 1));
        assert_eq!(SentenceRange::new(3, 2).clamp(5), SentenceRange::new(3, 4));
    }

    #[test]
    fn pool_draws_from_every_range() {
        let pool = VariantPool::from(&VariantConfig::default());
        assert_eq!(pool.ranges().len(), 5);
        // the last configured range is reachable
        assert_eq!(pool.pick(&mut Fixed(4)), Some(SentenceRange::new(2, 4)));
        assert_eq!(pool.pick(&mut Fixed(0)), Some(SentenceRange::new(0, 1)));
    }

    #[test]
    fn empty_pool_picks_nothing() {
        let pool = VariantPool::new(Vec::new());
        assert_eq!(pool.pick(&mut Fixed(0)), None);
    }
}
