// Google Translate (public "gtx" endpoint) implementation.
//
// The endpoint takes a single query string and answers with nested JSON
// arrays rather than an object:
//
//   [[["hola","hello",null,null,10]],null,"en",...]
//
// The first element holds one segment per sentence; the translated text is
// the first field of each segment. Source language is auto-detected.

use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::debug;

use super::rate_limiter::RateLimiter;
use super::traits::Translator;

pub const DEFAULT_TRANSLATE_URL: &str = "https://translate.googleapis.com";

pub struct GoogleTranslator {
    client: Client,
    base_url: String,
    rate_limiter: RateLimiter,
    timeout: Duration,
}

impl GoogleTranslator {
    pub fn new(base_url: &str, requests_per_second: f64, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .user_agent("lexigraph/0.1")
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            rate_limiter: RateLimiter::new(requests_per_second)?,
            timeout,
        })
    }

    async fn request(&self, word: &str, lang: &str) -> Result<String> {
        let url = format!("{}/translate_a/single", self.base_url);

        let response = self
            .client
            .get(&url)
            .query(&[
                ("client", "gtx"),
                ("sl", "auto"),
                ("tl", lang),
                ("dt", "t"),
                ("q", word),
            ])
            .send()
            .await
            .context("Translate API request failed")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Translate API returned {}: {}", status, body);
        }

        let body: Value = response
            .json()
            .await
            .context("Failed to parse Translate API response")?;

        extract_translation(&body)
            .with_context(|| format!("No translation in Translate API response for '{word}'"))
    }
}

#[async_trait]
impl Translator for GoogleTranslator {
    async fn translate_word(&self, word: &str, lang: &str) -> Result<String> {
        self.rate_limiter.acquire().await;

        let translated = tokio::time::timeout(self.timeout, self.request(word, lang))
            .await
            .with_context(|| format!("Translate API timed out after {:?}", self.timeout))??;

        debug!(word, lang, translated = %translated, "Translated word");
        Ok(translated)
    }
}

/// Concatenate the translated text of every segment in a gtx response.
pub fn extract_translation(body: &Value) -> Option<String> {
    let segments = body.get(0)?.as_array()?;

    let text: String = segments
        .iter()
        .filter_map(|segment| segment.get(0).and_then(Value::as_str))
        .collect();

    (!text.trim().is_empty()).then_some(text)
}
