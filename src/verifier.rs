// WHY: model output is untrusted
// A candidate only becomes a Quote once it is found verbatim in a sentence

use crate::quote::Quote;

/// Number of sentences kept on each side of the matched sentence
pub const CONTEXT_WINDOW: usize = 2;

/// Locate `quote` in the first sentence that contains it and capture the
/// surrounding context.
///
/// Matching is a case-sensitive substring search. Returns `None` when no
/// sentence contains the quote, which is the expected outcome for reworded
/// or invented model output.
pub fn verify_and_extract(sentences: &[String], quote: &str, author: &str) -> Option<Quote> {
    let index = sentences.iter().position(|sentence| sentence.contains(quote))?;
    let (before, after) = context_window(sentences, index);

    Some(Quote {
        text: quote.to_string(),
        author: author.to_string(),
        context_before: before.join(" "),
        context_after: after.join(" "),
    })
}

/// Sentences before and after `index`, clamped at both ends of the slice.
/// The sentence at `index` is never part of either side.
pub fn context_window(sentences: &[String], index: usize) -> (&[String], &[String]) {
    let start = index.saturating_sub(CONTEXT_WINDOW);
    let end = (index + CONTEXT_WINDOW + 1).min(sentences.len());
    (&sentences[start..index], &sentences[index + 1..end])
}
