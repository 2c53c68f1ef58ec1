// Translator trait and the per-word fallback policy.

use anyhow::Result;
use async_trait::async_trait;
use tracing::warn;

use crate::wordlist::WordList;

/// Trait for translating single words. Implementations are async because
/// real providers are HTTP APIs.
#[async_trait]
pub trait Translator: Send + Sync {
    /// Translate one word into the language identified by `lang` (ISO 639-1).
    async fn translate_word(&self, word: &str, lang: &str) -> Result<String>;

    /// Translate a list serially, keeping order and length.
    ///
    /// Words that fail to translate are kept in their original form.
    async fn translate_words(&self, words: &WordList, lang: &str) -> WordList {
        let mut out = Vec::with_capacity(words.len());
        for word in words.iter() {
            out.push(translate_or_keep(self, word, lang).await);
        }
        WordList::new(out)
    }
}

/// Translate a word, falling back to the original on any failure.
///
/// Results are trimmed and lowercased so casing from the provider doesn't
/// count as an edit. An empty result also falls back.
pub async fn translate_or_keep<T: Translator + ?Sized>(
    translator: &T,
    word: &str,
    lang: &str,
) -> String {
    match translator.translate_word(word, lang).await {
        Ok(translated) => {
            let cleaned = translated.trim().to_lowercase();
            if cleaned.is_empty() {
                warn!(word, lang, "Empty translation, keeping original word");
                word.to_string()
            } else {
                cleaned
            }
        }
        Err(e) => {
            warn!(word, lang, error = %e, "Translation failed, keeping original word");
            word.to_string()
        }
    }
}

/// Translator that returns every word unchanged.
///
/// Used with `--offline`, where the source list is compared against itself
/// under each language label.
pub struct IdentityTranslator;

#[async_trait]
impl Translator for IdentityTranslator {
    async fn translate_word(&self, word: &str, _lang: &str) -> Result<String> {
        Ok(word.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Failing;

    #[async_trait]
    impl Translator for Failing {
        async fn translate_word(&self, _word: &str, _lang: &str) -> Result<String> {
            anyhow::bail!("service unavailable")
        }
    }

    struct Shouting;

    #[async_trait]
    impl Translator for Shouting {
        async fn translate_word(&self, word: &str, _lang: &str) -> Result<String> {
            if word == "blank" {
                return Ok("   ".to_string());
            }
            Ok(format!(" {}_X ", word.to_uppercase()))
        }
    }

    #[tokio::test]
    async fn test_failure_keeps_original_word() {
        assert_eq!(translate_or_keep(&Failing, "hello", "es").await, "hello");
    }

    #[tokio::test]
    async fn test_result_is_trimmed_and_lowercased() {
        assert_eq!(translate_or_keep(&Shouting, "cat", "fr").await, "cat_x");
    }

    #[tokio::test]
    async fn test_empty_result_keeps_original_word() {
        assert_eq!(translate_or_keep(&Shouting, "blank", "fr").await, "blank");
    }

    #[tokio::test]
    async fn test_translate_words_keeps_length_and_order() {
        let words = WordList::new(["hello", "world", "test"]);
        let out = Failing.translate_words(&words, "es").await;
        assert_eq!(out, words);

        let out = IdentityTranslator.translate_words(&words, "de").await;
        assert_eq!(out, words);
    }
}
