// WHY: bracket-aware sentence segmentation used to verify quotes against the source text
// Sentences are plain trimmed strings in document order; no spans are tracked

/// Configuration for sentence boundary detection rules
#[derive(Debug, Clone, Copy)]
pub struct SentenceBoundaryRules {
    /// Characters that end a sentence when found at nesting depth zero
    pub end_punctuation: &'static [char],
    /// Characters that increase the nesting depth
    pub opening_brackets: &'static [char],
    /// Characters that decrease the nesting depth
    pub closing_brackets: &'static [char],
    /// Characters that may follow a period for it to still end a sentence
    pub period_followers: &'static [char],
}

/// Default ruleset: `.`, `!`, `?` terminate; `()[]{}` nest; a period ends a
/// sentence only when followed by a space, a newline or the end of input
pub const DEFAULT_RULES: SentenceBoundaryRules = SentenceBoundaryRules {
    end_punctuation: &['.', '!', '?'],
    opening_brackets: &['(', '[', '{'],
    closing_brackets: &[')', ']', '}'],
    period_followers: &[' ', '\n'],
};

impl Default for SentenceBoundaryRules {
    fn default() -> Self {
        DEFAULT_RULES
    }
}

/// Splits text into sentences according to a fixed set of boundary rules
#[derive(Debug, Clone, Copy, Default)]
pub struct SentenceSplitter {
    rules: SentenceBoundaryRules,
}

impl SentenceSplitter {
    /// Create new splitter with custom rules
    pub fn new(rules: SentenceBoundaryRules) -> Self {
        Self { rules }
    }

    /// Create splitter with default rules
    pub fn with_default_rules() -> Self {
        Self::new(DEFAULT_RULES)
    }

    /// Split text into trimmed, non-empty sentences in document order.
    ///
    /// The nesting depth is signed and never clamped: an unmatched closing
    /// bracket drives it negative, and any non-zero depth suppresses every
    /// later boundary in the same text.
    pub fn split(&self, text: &str) -> Vec<String> {
        let mut sentences = Vec::new();
        let mut pending = String::new();
        let mut depth: i64 = 0;
        let mut chars = text.chars().peekable();

        while let Some(ch) = chars.next() {
            pending.push(ch);

            if self.rules.opening_brackets.contains(&ch) {
                depth += 1;
            } else if self.rules.closing_brackets.contains(&ch) {
                depth -= 1;
            }

            if depth != 0 || !self.rules.end_punctuation.contains(&ch) {
                continue;
            }

            // Period glued to the next character: "т.е.", "3.14", "U.S."
            if ch == '.' {
                if let Some(next) = chars.peek() {
                    if !self.rules.period_followers.contains(next) {
                        continue;
                    }
                }
            }

            push_trimmed(&mut sentences, &pending);
            pending.clear();
        }

        push_trimmed(&mut sentences, &pending);
        sentences
    }
}

/// Split text into sentences with the default rules
pub fn split_sentences(text: &str) -> Vec<String> {
    SentenceSplitter::with_default_rules().split(text)
}

fn push_trimmed(sentences: &mut Vec<String>, pending: &str) {
    let trimmed = pending.trim();
    if !trimmed.is_empty() {
        sentences.push(trimmed.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_basic_sentences() {
        let sentences = split_sentences("Hello world. This is a test! How are you?");
        assert_eq!(sentences, vec!["Hello world.", "This is a test!", "How are you?"]);
    }

    #[test]
    fn test_split_empty_and_whitespace() {
        assert!(split_sentences("").is_empty());
        assert!(split_sentences("   \n  ").is_empty());
    }

    #[test]
    fn test_trailing_text_without_terminator() {
        let sentences = split_sentences("First one. And then nothing");
        assert_eq!(sentences, vec!["First one.", "And then nothing"]);
    }

    #[test]
    fn test_period_followed_by_letter_does_not_split() {
        // Only the second period is followed by a space
        let sentences = split_sentences("т.е. далее");
        assert_eq!(sentences, vec!["т.е.", "далее"]);

        let sentences = split_sentences("Pi is 3.14 roughly. Yes.");
        assert_eq!(sentences, vec!["Pi is 3.14 roughly.", "Yes."]);
    }

    #[test]
    fn test_period_followed_by_newline_splits() {
        let sentences = split_sentences("Line one.\nLine two.");
        assert_eq!(sentences, vec!["Line one.", "Line two."]);
    }

    #[test]
    fn test_period_followed_by_tab_does_not_split() {
        let sentences = split_sentences("Tabbed.\tStill the same.");
        assert_eq!(sentences, vec!["Tabbed.\tStill the same."]);
    }

    #[test]
    fn test_exclamation_and_question_ignore_followers() {
        let sentences = split_sentences("Wait!Go?Now");
        assert_eq!(sentences, vec!["Wait!", "Go?", "Now"]);
    }

    #[test]
    fn test_ellipsis_ends_on_last_period() {
        let sentences = split_sentences("Hmm... maybe. Fine.");
        assert_eq!(sentences, vec!["Hmm...", "maybe.", "Fine."]);
    }

    #[test]
    fn test_brackets_suppress_splitting() {
        let sentences = split_sentences("Он сказал (это. правда.) всё.");
        assert_eq!(sentences, vec!["Он сказал (это. правда.) всё."]);

        let sentences = split_sentences("Он сказал (это. правда.) всё. Потом ушёл.");
        assert_eq!(sentences, vec!["Он сказал (это. правда.) всё.", "Потом ушёл."]);
    }

    #[test]
    fn test_nested_brackets() {
        let sentences = split_sentences("A [b {c. d!} e?] f. G.");
        assert_eq!(sentences, vec!["A [b {c. d!} e?] f.", "G."]);
    }

    #[test]
    fn test_unbalanced_opening_bracket_suppresses_rest() {
        let sentences = split_sentences("Open (paren. Never closed. Still one.");
        assert_eq!(sentences, vec!["Open (paren. Never closed. Still one."]);
    }

    #[test]
    fn test_unbalanced_closing_bracket_suppresses_rest() {
        let sentences = split_sentences("a) First point. Second point.");
        assert_eq!(sentences, vec!["a) First point. Second point."]);
    }

    #[test]
    fn test_sentences_are_trimmed_and_in_order() {
        let text = "  One.   Two!  \n  Three?  ";
        let sentences = split_sentences(text);
        assert_eq!(sentences, vec!["One.", "Two!", "Three?"]);
        for sentence in &sentences {
            assert_eq!(sentence.trim(), sentence);
            assert!(!sentence.is_empty());
        }

        let mut last = 0;
        for sentence in &sentences {
            let pos = text[last..]
                .find(sentence.as_str())
                .expect("sentence should occur in order")
                + last;
            last = pos + sentence.len();
        }
    }

    #[test]
    fn test_custom_rules() {
        let rules = SentenceBoundaryRules {
            end_punctuation: &['.', ';'],
            ..DEFAULT_RULES
        };
        let splitter = SentenceSplitter::new(rules);
        assert_eq!(splitter.split("a; b. c"), vec!["a;", "b.", "c"]);
    }
}
