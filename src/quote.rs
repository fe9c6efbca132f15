use serde::{Deserialize, Serialize};

/// A quotation confirmed to occur in the source text, with its surrounding sentences
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Quote {
    /// Exact quote text as returned by the model and matched in the source
    pub text: String,
    /// Author supplied for the run; never inferred
    pub author: String,
    /// Up to two sentences preceding the matched sentence, space-joined
    pub context_before: String,
    /// Up to two sentences following the matched sentence, space-joined
    pub context_after: String,
}

impl Quote {
    /// Fields in storage column order
    pub fn fields(&self) -> [&str; 4] {
        [&self.text, &self.author, &self.context_before, &self.context_after]
    }
}
