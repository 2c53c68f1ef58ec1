// File and directory entry points around the topic pipeline.
//
// Each file is one topic, named after the file stem. Failures are caught at
// the topic boundary: a bad file is reported and the batch moves on.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use colored::Colorize;
use tracing::{error, info, warn};

use super::topic::{TopicPipeline, TopicReport};
use super::InputError;
use crate::languages::Language;
use crate::wordlist::WordList;

/// How a single topic run ended.
#[derive(Debug)]
pub enum TopicOutcome {
    Completed(TopicReport),
    Failed { topic: String, error: anyhow::Error },
}

impl TopicOutcome {
    pub fn is_completed(&self) -> bool {
        matches!(self, TopicOutcome::Completed(_))
    }

    /// True when the failure was bad input rather than something breaking.
    pub fn is_input_error(&self) -> bool {
        match self {
            TopicOutcome::Failed { error, .. } => error.downcast_ref::<InputError>().is_some(),
            TopicOutcome::Completed(_) => false,
        }
    }
}

/// Result of processing a directory of word files.
#[derive(Debug, Default)]
pub struct BatchSummary {
    pub total: usize,
    pub succeeded: usize,
    pub failed: Vec<String>,
}

/// Topic name for a word file: its stem, e.g. "animals" for "data/animals.txt".
pub fn topic_name(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Process one word file as a topic.
pub async fn process_word_file(
    pipeline: &TopicPipeline<'_>,
    path: &Path,
    selected: &[Language],
) -> TopicOutcome {
    let topic = topic_name(path);
    println!("\n{}", format!("=== Processing topic: {topic} ===").bold());

    match run_file(pipeline, path, &topic, selected).await {
        Ok(report) => TopicOutcome::Completed(report),
        Err(e) => {
            if e.downcast_ref::<InputError>().is_some() {
                warn!(topic, error = %e, "Topic rejected");
            } else {
                error!(topic, error = ?e, "Topic failed");
            }
            println!("  {} {e:#}", "Error:".red());
            TopicOutcome::Failed { topic, error: e }
        }
    }
}

async fn run_file(
    pipeline: &TopicPipeline<'_>,
    path: &Path,
    topic: &str,
    selected: &[Language],
) -> Result<TopicReport> {
    if !path.is_file() {
        return Err(InputError::MissingFile(path.to_path_buf()).into());
    }
    if path.extension().and_then(|e| e.to_str()) != Some("txt") {
        warn!(path = %path.display(), "Word file should be a .txt file, continuing anyway");
    }

    let words = WordList::read(path).map_err(|e| InputError::UnreadableFile {
        path: path.to_path_buf(),
        reason: format!("{e:#}"),
    })?;
    println!("  Loaded {} words from {}", words.len(), path.display());

    pipeline.run(topic, &words, selected).await
}

/// Process every `.txt` file in a directory, in name order.
///
/// Directory-level problems are returned as errors; per-file problems are
/// counted in the summary.
pub async fn process_directory(
    pipeline: &TopicPipeline<'_>,
    dir: &Path,
    selected: &[Language],
) -> Result<BatchSummary> {
    if !dir.exists() {
        return Err(InputError::MissingDirectory(dir.to_path_buf()).into());
    }
    if !dir.is_dir() {
        return Err(InputError::NotADirectory(dir.to_path_buf()).into());
    }

    let mut files = Vec::new();
    for entry in fs::read_dir(dir).with_context(|| format!("Failed to list {}", dir.display()))? {
        let path = entry?.path();
        if path.is_file() && path.extension().and_then(|e| e.to_str()) == Some("txt") {
            files.push(path);
        }
    }
    files.sort();

    if files.is_empty() {
        return Err(InputError::NoWordFiles(dir.to_path_buf()).into());
    }

    info!(dir = %dir.display(), files = files.len(), "Processing directory");
    println!("\nFound {} .txt file(s). Processing...", files.len());

    let mut summary = BatchSummary {
        total: files.len(),
        ..Default::default()
    };

    for path in &files {
        match process_word_file(pipeline, path, selected).await {
            TopicOutcome::Completed(_) => summary.succeeded += 1,
            TopicOutcome::Failed { topic, .. } => summary.failed.push(topic),
        }
    }

    Ok(summary)
}
