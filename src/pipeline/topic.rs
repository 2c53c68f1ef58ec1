// Topic pipeline: one source word list compared across a set of languages.
//
// Steps, in order:
//   1. Translate the source list into every selected language (serially,
//      one word at a time; failed words stay untranslated).
//   2. Persist each translated list.
//   3. For every unordered language pair (i < j in selection order), build
//      the similarity matrix, persist it, aggregate it to a pair score, and
//      add that score as an edge of the topic's language graph.
//   4. Persist the graph image, titled with the topic and language names.
//
// The graph lives only for the duration of one run.

use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use tracing::{debug, info};

use super::InputError;
use crate::graph::{LanguageGraph, PairScore};
use crate::languages::{self, Language};
use crate::output::ResultSink;
use crate::similarity::aggregate::Aggregator;
use crate::similarity::matrix::SimilarityMatrix;
use crate::translate::traits::Translator;
use crate::wordlist::WordList;

/// Score for one language pair within a topic.
#[derive(Debug, Clone, Serialize)]
pub struct PairResult {
    pub a: String,
    pub b: String,
    pub score: PairScore,
    pub label: String,
}

/// A translated word list for one language.
#[derive(Debug, Clone, Serialize)]
pub struct LanguageWords {
    pub code: String,
    pub name: String,
    pub words: WordList,
}

/// Everything a topic run produced, minus the rendered image.
#[derive(Debug, Clone, Serialize)]
pub struct TopicReport {
    pub topic: String,
    pub aggregator: String,
    pub source_word_count: usize,
    pub translations: Vec<LanguageWords>,
    pub pairs: Vec<PairResult>,
}

impl TopicReport {
    pub fn pair(&self, a: &str, b: &str) -> Option<&PairResult> {
        self.pairs
            .iter()
            .find(|p| (p.a == a && p.b == b) || (p.a == b && p.b == a))
    }
}

/// Wires the collaborators of a topic run together.
pub struct TopicPipeline<'a> {
    translator: &'a dyn Translator,
    aggregator: &'a dyn Aggregator,
    sink: &'a dyn ResultSink,
    show_progress: bool,
}

impl<'a> TopicPipeline<'a> {
    pub fn new(
        translator: &'a dyn Translator,
        aggregator: &'a dyn Aggregator,
        sink: &'a dyn ResultSink,
    ) -> Self {
        Self {
            translator,
            aggregator,
            sink,
            show_progress: false,
        }
    }

    /// Show an indicatif progress bar while translating.
    pub fn with_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    /// Run a topic end to end.
    ///
    /// The language set is validated before any translation is attempted.
    pub async fn run(
        &self,
        topic: &str,
        source: &WordList,
        selected: &[Language],
    ) -> Result<TopicReport> {
        languages::validate(selected).map_err(InputError::from)?;
        if source.is_empty() {
            return Err(InputError::EmptyWordList(topic.to_string()).into());
        }

        info!(
            topic,
            words = source.len(),
            languages = selected.len(),
            aggregator = self.aggregator.name(),
            "Processing topic"
        );

        // Steps 1 + 2: translate and persist each language
        let pb = self.progress_bar(selected.len());
        let mut translations = Vec::with_capacity(selected.len());
        for lang in selected {
            pb.set_message(lang.display_name());
            let words = self.translator.translate_words(source, lang.code).await;
            self.sink.persist_words(topic, lang, &words)?;
            translations.push((*lang, words));
            pb.inc(1);
        }
        pb.finish_and_clear();

        // Step 3: pairwise matrices, scores, and graph edges
        let mut graph = LanguageGraph::new();
        for (lang, _) in &translations {
            graph.add_node(lang.code);
        }

        let mut pairs = Vec::new();
        for i in 0..translations.len() {
            for j in (i + 1)..translations.len() {
                let (a, words_a) = &translations[i];
                let (b, words_b) = &translations[j];

                let matrix = SimilarityMatrix::build(words_a, words_b);
                self.sink
                    .persist_matrix(topic, a, b, words_a, words_b, &matrix)?;

                let score = PairScore(self.aggregator.aggregate(&matrix));
                graph.add_connection(a.code, b.code, score)?;
                debug!(topic, a = a.code, b = b.code, score = %score, "Pair scored");

                pairs.push(PairResult {
                    a: a.code.to_string(),
                    b: b.code.to_string(),
                    score,
                    label: score.to_string(),
                });
            }
        }

        // Step 4: render
        self.sink
            .persist_graph(topic, &graph, &graph_title(topic, selected))?;

        let report = TopicReport {
            topic: topic.to_string(),
            aggregator: self.aggregator.name().to_string(),
            source_word_count: source.len(),
            translations: translations
                .into_iter()
                .map(|(lang, words)| LanguageWords {
                    code: lang.code.to_string(),
                    name: lang.display_name(),
                    words,
                })
                .collect(),
            pairs,
        };
        self.sink.persist_report(&report)?;

        Ok(report)
    }

    fn progress_bar(&self, languages: usize) -> ProgressBar {
        if !self.show_progress {
            return ProgressBar::hidden();
        }
        let pb = ProgressBar::new(languages as u64);
        if let Ok(style) =
            ProgressStyle::default_bar().template("  Translating [{bar:30}] {pos}/{len} {msg}")
        {
            pb.set_style(style);
        }
        pb
    }
}

/// Graph caption, e.g. "animals - Word Similarity (English, Spanish)".
pub fn graph_title(topic: &str, selected: &[Language]) -> String {
    let names: Vec<String> = selected.iter().map(Language::display_name).collect();
    format!("{topic} - Word Similarity ({})", names.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::languages::by_code;

    #[test]
    fn test_graph_title() {
        let langs = [by_code("en").unwrap(), by_code("es").unwrap(), by_code("pl").unwrap()];
        assert_eq!(
            graph_title("animals", &langs),
            "animals - Word Similarity (English, Spanish, Polish)"
        );
    }
}
