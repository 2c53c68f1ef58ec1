// Pipelines — per-topic orchestration and directory batches.

pub mod batch;
pub mod topic;

use std::path::PathBuf;

use thiserror::Error;

use crate::languages::SelectionError;

/// Problems with what the user asked for, as opposed to failures while
/// doing it. These abort one input and are reported, never fatal.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("File '{}' does not exist", .0.display())]
    MissingFile(PathBuf),
    #[error("Could not read '{}': {reason}", path.display())]
    UnreadableFile { path: PathBuf, reason: String },
    #[error("No words found for topic '{0}'")]
    EmptyWordList(String),
    #[error("Directory '{}' does not exist", .0.display())]
    MissingDirectory(PathBuf),
    #[error("'{}' is not a directory", .0.display())]
    NotADirectory(PathBuf),
    #[error("No .txt files found in '{}'", .0.display())]
    NoWordFiles(PathBuf),
    #[error(transparent)]
    Selection(#[from] SelectionError),
}
