// Ordered word lists — one vocabulary entry per line.
//
// Order is the alignment key across languages: entry i of every translated
// list is the translation of entry i of the source list. Nothing here sorts
// or deduplicates.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

/// An ordered list of non-empty, whitespace-trimmed words.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct WordList {
    words: Vec<String>,
}

impl WordList {
    /// Build a list, trimming each entry and dropping blank ones.
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .filter_map(|w| {
                let trimmed = w.as_ref().trim();
                (!trimmed.is_empty()).then(|| trimmed.to_string())
            })
            .collect();
        Self { words }
    }

    /// Parse newline-separated text; blank and whitespace-only lines are ignored.
    pub fn from_text(text: &str) -> Self {
        Self::new(text.lines())
    }

    /// Read a UTF-8 word file.
    pub fn read(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read word file {}", path.display()))?;
        Ok(Self::from_text(&text))
    }

    /// Write one word per line, creating parent directories as needed.
    pub fn write(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }

        let mut text = String::new();
        for word in &self.words {
            text.push_str(word);
            text.push('\n');
        }

        fs::write(path, text)
            .with_context(|| format!("Failed to write word file {}", path.display()))
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.words
    }
}
