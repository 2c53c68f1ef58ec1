// Closed catalog of supported languages and user selection parsing.
//
// The table is static configuration: full lowercase name to the two-letter
// code the translation service expects. It never changes at runtime.

use std::collections::HashSet;
use std::fmt;

use thiserror::Error;

/// Minimum number of languages in a comparison.
pub const MIN_SELECTION: usize = 2;
/// Maximum number of languages in a comparison (keeps the graph legible).
pub const MAX_SELECTION: usize = 4;

/// Every supported language, sorted by name.
pub const CATALOG: &[Language] = &[
    Language::new("afrikaans", "af"),
    Language::new("albanian", "sq"),
    Language::new("basque", "eu"),
    Language::new("catalan", "ca"),
    Language::new("croatian", "hr"),
    Language::new("czech", "cs"),
    Language::new("danish", "da"),
    Language::new("dutch", "nl"),
    Language::new("english", "en"),
    Language::new("estonian", "et"),
    Language::new("finnish", "fi"),
    Language::new("french", "fr"),
    Language::new("galician", "gl"),
    Language::new("german", "de"),
    Language::new("hungarian", "hu"),
    Language::new("icelandic", "is"),
    Language::new("indonesian", "id"),
    Language::new("irish", "ga"),
    Language::new("italian", "it"),
    Language::new("latin", "la"),
    Language::new("latvian", "lv"),
    Language::new("lithuanian", "lt"),
    Language::new("malay", "ms"),
    Language::new("maltese", "mt"),
    Language::new("norwegian", "no"),
    Language::new("polish", "pl"),
    Language::new("portuguese", "pt"),
    Language::new("romanian", "ro"),
    Language::new("slovak", "sk"),
    Language::new("slovenian", "sl"),
    Language::new("spanish", "es"),
    Language::new("swahili", "sw"),
    Language::new("swedish", "sv"),
    Language::new("tagalog", "tl"),
    Language::new("turkish", "tr"),
    Language::new("vietnamese", "vi"),
    Language::new("welsh", "cy"),
];

/// A supported language: lowercase full name plus ISO 639-1 code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Language {
    pub name: &'static str,
    pub code: &'static str,
}

impl Language {
    const fn new(name: &'static str, code: &'static str) -> Self {
        Self { name, code }
    }

    /// Capitalized full name, e.g. "Spanish".
    pub fn display_name(&self) -> String {
        let mut chars = self.name.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.display_name(), self.code)
    }
}

/// Case-insensitive lookup by full name.
pub fn lookup(name: &str) -> Option<Language> {
    let name = name.trim().to_lowercase();
    CATALOG.iter().copied().find(|l| l.name == name)
}

/// Reverse lookup by two-letter code.
pub fn by_code(code: &str) -> Option<Language> {
    let code = code.trim().to_lowercase();
    CATALOG.iter().copied().find(|l| l.code == code)
}

/// Why a language selection was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("Please select at least {min} languages (got {0})", min = MIN_SELECTION)]
    TooFew(usize),
    #[error("Please select at most {max} languages (got {0})", max = MAX_SELECTION)]
    TooMany(usize),
    #[error("Unknown language(s): {}", .0.join(", "))]
    Unknown(Vec<String>),
    #[error("Language selected more than once: {0}")]
    Duplicate(String),
}

/// Parse a comma-separated list of language names, e.g. "English, Spanish".
///
/// Input order is kept; it decides which language is the row side of each
/// pairwise matrix.
pub fn select(input: &str) -> Result<Vec<Language>, SelectionError> {
    let names: Vec<&str> = input
        .split(',')
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .collect();

    if names.len() < MIN_SELECTION {
        return Err(SelectionError::TooFew(names.len()));
    }
    if names.len() > MAX_SELECTION {
        return Err(SelectionError::TooMany(names.len()));
    }

    let mut selected = Vec::with_capacity(names.len());
    let mut unknown = Vec::new();
    for name in &names {
        match lookup(name) {
            Some(lang) => selected.push(lang),
            None => unknown.push(name.to_string()),
        }
    }
    if !unknown.is_empty() {
        return Err(SelectionError::Unknown(unknown));
    }

    validate(&selected)?;
    Ok(selected)
}

/// Check an already-resolved selection: 2 to 4 languages, no repeats.
pub fn validate(selected: &[Language]) -> Result<(), SelectionError> {
    if selected.len() < MIN_SELECTION {
        return Err(SelectionError::TooFew(selected.len()));
    }
    if selected.len() > MAX_SELECTION {
        return Err(SelectionError::TooMany(selected.len()));
    }

    let mut seen = HashSet::new();
    for lang in selected {
        if !seen.insert(lang.code) {
            return Err(SelectionError::Duplicate(lang.display_name()));
        }
    }
    Ok(())
}
