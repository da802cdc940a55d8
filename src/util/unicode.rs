use unicode_segmentation::UnicodeSegmentation;

/// Number of user-perceived characters (extended grapheme clusters).
pub fn char_count(s: &str) -> usize {
    s.graphemes(true).count()
}

/// Combined character count of `parts` as if concatenated with no separator.
pub fn joined_char_count<I, S>(parts: I) -> usize
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    parts.into_iter().map(|p| char_count(p.as_ref())).sum()
}

/// Whether `s` has at least `n` user-perceived characters.
pub fn is_at_least(s: &str, n: usize) -> bool {
    s.graphemes(true).nth(n.saturating_sub(1)).is_some() || n == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_counts_bytes() {
        assert_eq!(char_count("Big win today."), 14);
        assert_eq!(char_count(""), 0);
    }

    #[test]
    fn combined_emoji_counts_once() {
        // thumbs up + skin tone modifier
        assert_eq!(char_count("\u{1F44D}\u{1F3FD}"), 1);
        // e + combining acute
        assert_eq!(char_count("e\u{301}"), 1);
        assert_eq!(char_count("çok güzel"), 9);
    }

    #[test]
    fn joined_count_ignores_separators() {
        assert_eq!(joined_char_count(["@samenvvv", "@other"]), 15);
        assert_eq!(joined_char_count(Vec::<String>::new()), 0);
    }

    #[test]
    fn at_least() {
        assert!(is_at_least("ab", 2));
        assert!(!is_at_least("a", 2));
        assert!(is_at_least("", 0));
        assert!(!is_at_least("", 1));
    }
}
