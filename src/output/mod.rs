// Output — persistence sinks, graph rendering, and terminal display.
//
// The pipeline never touches the filesystem directly; it hands results to a
// ResultSink. FileSink writes the on-disk layout under the results directory.

pub mod files;
pub mod render;
pub mod terminal;

use anyhow::Result;

use crate::graph::LanguageGraph;
use crate::languages::Language;
use crate::pipeline::topic::TopicReport;
use crate::similarity::matrix::SimilarityMatrix;
use crate::wordlist::WordList;

/// Destination for everything a topic run produces.
///
/// Matrices are persisted before they are aggregated, so a failed render
/// still leaves the raw data on disk.
pub trait ResultSink {
    fn persist_words(&self, topic: &str, lang: &Language, words: &WordList) -> Result<()>;

    /// `rows` labels the matrix rows (language `a`), `cols` its columns (`b`).
    fn persist_matrix(
        &self,
        topic: &str,
        a: &Language,
        b: &Language,
        rows: &WordList,
        cols: &WordList,
        matrix: &SimilarityMatrix,
    ) -> Result<()>;

    fn persist_graph(&self, topic: &str, graph: &LanguageGraph, title: &str) -> Result<()>;

    /// Optional machine-readable summary. Sinks that don't need it skip it.
    fn persist_report(&self, _report: &TopicReport) -> Result<()> {
        Ok(())
    }
}
