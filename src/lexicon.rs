//! Modifier keyword lexicon
//!
//! Keywords match as plain substrings of query text. A keyword counts at most
//! once per query; per-dialog uniqueness is latched until the next reset.

#[derive(Debug, Clone)]
struct Entry {
    keyword: String,
    seen: bool,
}

/// The set of modifier keywords with per-dialog seen flags
#[derive(Debug, Clone, Default)]
pub struct ModifierLexicon {
    entries: Vec<Entry>,
    unique_count: usize,
}

impl ModifierLexicon {
    /// Build a lexicon from file text, one keyword per line. Blank lines are
    /// dropped so they cannot match every query.
    pub fn from_text(text: &str) -> Self {
        let entries = text
            .split('\n')
            .filter(|line| !line.is_empty())
            .map(|line| Entry {
                keyword: line.to_string(),
                seen: false,
            })
            .collect();
        Self {
            entries,
            unique_count: 0,
        }
    }

    /// Number of keywords
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Clear all seen flags. Called once per dialog.
    pub fn reset(&mut self) {
        self.unique_count = 0;
        for entry in &mut self.entries {
            entry.seen = false;
        }
    }

    /// Count the distinct keywords occurring in `query_text` and latch their
    /// seen flags. Repeats of one keyword within the text count once.
    pub fn mark(&mut self, query_text: &str) -> u64 {
        let mut count = 0;
        for entry in &mut self.entries {
            if query_text.contains(entry.keyword.as_str()) {
                count += 1;
                if !entry.seen {
                    entry.seen = true;
                    self.unique_count += 1;
                }
            }
        }
        count
    }

    /// Number of keywords seen since the last reset
    pub fn unique_count(&self) -> usize {
        self.unique_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lexicon() -> ModifierLexicon {
        ModifierLexicon::from_text("levne\ndrahe\nrychle")
    }

    #[test]
    fn test_from_text_counts_keywords() {
        assert_eq!(lexicon().len(), 3);
        assert!(!lexicon().is_empty());
    }

    #[test]
    fn test_from_text_drops_blank_lines() {
        let lex = ModifierLexicon::from_text("levne\n\ndrahe\n");
        assert_eq!(lex.len(), 2);
    }

    #[test]
    fn test_mark_counts_distinct_keywords() {
        let mut lex = lexicon();
        assert_eq!(lex.mark("chci levne a rychle letenky"), 2);
        assert_eq!(lex.unique_count(), 2);
    }

    #[test]
    fn test_mark_counts_repeated_keyword_once_per_query() {
        let mut lex = lexicon();
        assert_eq!(lex.mark("levne levne levne"), 1);
        assert_eq!(lex.unique_count(), 1);
    }

    #[test]
    fn test_mark_matches_inside_words() {
        // Substring semantics: "nejlevnejsi" contains "levne"
        let mut lex = lexicon();
        assert_eq!(lex.mark("nejlevnejsi spoj"), 1);
    }

    #[test]
    fn test_seen_keyword_still_counts_in_later_queries() {
        let mut lex = lexicon();
        assert_eq!(lex.mark("levne letenky"), 1);
        assert_eq!(lex.mark("opravdu levne"), 1);
        // Counted in both queries, unique only once
        assert_eq!(lex.unique_count(), 1);
    }

    #[test]
    fn test_reset_clears_seen_flags() {
        let mut lex = lexicon();
        lex.mark("levne a drahe");
        assert_eq!(lex.unique_count(), 2);

        lex.reset();
        assert_eq!(lex.unique_count(), 0);
        assert_eq!(lex.mark("levne"), 1);
        assert_eq!(lex.unique_count(), 1);
    }

    #[test]
    fn test_no_match_counts_zero() {
        let mut lex = lexicon();
        assert_eq!(lex.mark("dobry den"), 0);
        assert_eq!(lex.unique_count(), 0);
    }

    #[test]
    fn test_empty_lexicon() {
        let mut lex = ModifierLexicon::from_text("");
        assert!(lex.is_empty());
        assert_eq!(lex.mark("anything"), 0);
        assert_eq!(lex.unique_count(), 0);
    }
}
