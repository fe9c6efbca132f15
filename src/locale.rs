// WHY: column headers, model instructions and display labels share one language per run

use clap::ValueEnum;

/// Language used for storage headers, the extraction prompt and sampler output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Locale {
    /// English
    #[default]
    En,
    /// Russian
    Ru,
}

impl Locale {
    /// Header row of the quote file
    pub fn csv_header(self) -> [&'static str; 4] {
        match self {
            Locale::En => ["Quote", "Author", "Context Before", "Context After"],
            Locale::Ru => ["Цитата", "Автор", "Контекст (До)", "Контекст (После)"],
        }
    }

    /// Labels for the plain-text rendering of a quote
    pub fn display_labels(self) -> [&'static str; 4] {
        match self {
            Locale::En => ["Quote", "Author", "Context (Before)", "Context (After)"],
            Locale::Ru => ["Цитата", "Автор", "Контекст (До)", "Контекст (После)"],
        }
    }

    /// Fixed instruction sent ahead of every text block
    pub fn extraction_instructions(self) -> &'static str {
        match self {
            Locale::En => {
                "Extract 3-10 vivid, expressive quotes from the text.\n\
                 Return the answer strictly as a JSON array of strings. Example: [\"quote1\", \"quote2\"].\n\
                 Do not add extra characters, backticks or explanations."
            }
            Locale::Ru => {
                "Извлеки из текста 3-10 ярких, выразительных цитат.\n\
                 Ответ верни строго в формате JSON массива строк. Пример: [\"цитата1\", \"цитата2\"].\n\
                 Не добавляй лишних символов, обратных кавычек или пояснений."
            }
        }
    }

    /// Label introducing the text block in the prompt
    pub fn text_label(self) -> &'static str {
        match self {
            Locale::En => "Text:",
            Locale::Ru => "Текст:",
        }
    }
}
