// Lexical similarity — edit distance, pairwise matrices, and aggregation.

pub mod aggregate;
pub mod levenshtein;
pub mod matrix;
