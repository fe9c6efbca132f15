// Test fixtures with known texts and their expected sentence segmentation
// WHY: deterministic input/output pairs keep pipeline assertions readable

#![allow(dead_code)]

/// Short text that fits in a single block
pub const SHORT_TEXT: &str = "The night was dark. The sea was calm.
She said nothing. He waited (as always. forever.) alone.
Morning came at last.";

/// Sentences of SHORT_TEXT in document order
pub const SHORT_SENTENCES: &[&str] = &[
    "The night was dark.",
    "The sea was calm.",
    "She said nothing.",
    "He waited (as always. forever.) alone.",
    "Morning came at last.",
];

/// Four lines that split into three blocks with a 30-character threshold
pub const BLOCK_TEXT: &str = "Alpha sentence one. Alpha two.
Beta line here.
Gamma line here.
Delta end.";

/// Russian text with abbreviations glued to the next word
pub const RUSSIAN_TEXT: &str = "Он пришёл, т.е. вернулся домой. Было поздно!
Она спросила: «Зачем?» Никто не ответил.";

pub const RUSSIAN_SENTENCES: &[&str] = &[
    "Он пришёл, т.е.",
    "вернулся домой.",
    "Было поздно!",
    "Она спросила: «Зачем?",
    "» Никто не ответил.",
];
