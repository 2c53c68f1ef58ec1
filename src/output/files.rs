// On-disk result layout.
//
//   {root}/translations/{topic}_{lang}.txt
//   {root}/similarities/{topic}_{lang1}_{lang2}.csv
//   {root}/{topic}_similarity_graph.png
//   {root}/{topic}_report.json

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{debug, info};

use super::render::render_graph;
use super::ResultSink;
use crate::graph::LanguageGraph;
use crate::languages::Language;
use crate::pipeline::topic::TopicReport;
use crate::similarity::matrix::SimilarityMatrix;
use crate::wordlist::WordList;

pub struct FileSink {
    root: PathBuf,
}

impl FileSink {
    /// Create the results directory tree. This is the one failure that stops
    /// the program: without it nothing can be saved.
    pub fn create(root: &Path) -> Result<Self> {
        for dir in [root.join("translations"), root.join("similarities")] {
            fs::create_dir_all(&dir)
                .with_context(|| format!("Failed to create output directory {}", dir.display()))?;
        }
        info!(root = %root.display(), "Results directory ready");
        Ok(Self {
            root: root.to_path_buf(),
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn words_path(&self, topic: &str, lang: &Language) -> PathBuf {
        self.root
            .join("translations")
            .join(format!("{topic}_{}.txt", lang.code))
    }

    pub fn matrix_path(&self, topic: &str, a: &Language, b: &Language) -> PathBuf {
        self.root
            .join("similarities")
            .join(format!("{topic}_{}_{}.csv", a.code, b.code))
    }

    pub fn graph_path(&self, topic: &str) -> PathBuf {
        self.root.join(format!("{topic}_similarity_graph.png"))
    }

    pub fn report_path(&self, topic: &str) -> PathBuf {
        self.root.join(format!("{topic}_report.json"))
    }
}

impl ResultSink for FileSink {
    fn persist_words(&self, topic: &str, lang: &Language, words: &WordList) -> Result<()> {
        let path = self.words_path(topic, lang);
        words.write(&path)?;
        debug!(path = %path.display(), count = words.len(), "Saved translations");
        Ok(())
    }

    fn persist_matrix(
        &self,
        topic: &str,
        a: &Language,
        b: &Language,
        rows: &WordList,
        cols: &WordList,
        matrix: &SimilarityMatrix,
    ) -> Result<()> {
        let path = self.matrix_path(topic, a, b);
        write_matrix_csv(&path, rows, cols, matrix)?;
        debug!(path = %path.display(), "Saved similarity matrix");
        Ok(())
    }

    fn persist_graph(&self, topic: &str, graph: &LanguageGraph, title: &str) -> Result<()> {
        let path = self.graph_path(topic);
        render_graph(graph, title, &path)?;
        info!(path = %path.display(), "Saved similarity graph");
        Ok(())
    }

    fn persist_report(&self, report: &TopicReport) -> Result<()> {
        let path = self.report_path(&report.topic);
        let json = serde_json::to_string_pretty(report)?;
        fs::write(&path, json)
            .with_context(|| format!("Failed to write report {}", path.display()))
    }
}

/// Render a matrix as CSV text.
///
/// Header is an empty cell followed by the column words; each row starts with
/// its row word followed by scores to two decimals.
pub fn matrix_to_csv(rows: &WordList, cols: &WordList, matrix: &SimilarityMatrix) -> String {
    let mut out = String::new();

    let header: Vec<String> = std::iter::once(String::new())
        .chain(cols.iter().map(csv_field))
        .collect();
    out.push_str(&header.join(","));
    out.push('\n');

    for (word, scores) in rows.iter().zip(matrix.rows()) {
        let line: Vec<String> = std::iter::once(csv_field(word))
            .chain(scores.iter().map(|v| format!("{v:.2}")))
            .collect();
        out.push_str(&line.join(","));
        out.push('\n');
    }

    out
}

pub fn write_matrix_csv(
    path: &Path,
    rows: &WordList,
    cols: &WordList,
    matrix: &SimilarityMatrix,
) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }
    fs::write(path, matrix_to_csv(rows, cols, matrix))
        .with_context(|| format!("Failed to write matrix {}", path.display()))
}

/// Quote a field only when it contains a delimiter, quote, or line break.
fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_csv_layout() {
        let rows = WordList::new(["hello", "world"]);
        let cols = WordList::new(["hola", "mundo"]);
        let m = SimilarityMatrix::from(vec![vec![0.85, 0.32], vec![0.28, 0.911]]);
        let csv = matrix_to_csv(&rows, &cols, &m);
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines, vec![",hola,mundo", "hello,0.85,0.32", "world,0.28,0.91"]);
    }

    #[test]
    fn test_csv_quotes_awkward_words() {
        assert_eq!(csv_field("plain"), "plain");
        assert_eq!(csv_field("a,b"), "\"a,b\"");
        assert_eq!(csv_field("say \"hi\""), "\"say \"\"hi\"\"\"");
    }

    #[test]
    fn test_paths_follow_layout() {
        let dir = tempfile::tempdir().unwrap();
        let sink = FileSink::create(dir.path()).unwrap();
        let en = crate::languages::by_code("en").unwrap();
        let es = crate::languages::by_code("es").unwrap();

        assert!(dir.path().join("translations").is_dir());
        assert!(dir.path().join("similarities").is_dir());
        assert_eq!(
            sink.words_path("animals", &es),
            dir.path().join("translations").join("animals_es.txt")
        );
        assert_eq!(
            sink.matrix_path("animals", &en, &es),
            dir.path().join("similarities").join("animals_en_es.csv")
        );
        assert_eq!(
            sink.graph_path("animals"),
            dir.path().join("animals_similarity_graph.png")
        );
    }
}
