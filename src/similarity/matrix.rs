// All-pairs similarity matrix between two ordered word lists.
//
// Rows follow the first list, columns the second. The lists may differ in
// length (a translator can merge or drop entries), so the matrix is
// rectangular rather than square.

use serde::Serialize;

use super::levenshtein::similarity;
use crate::wordlist::WordList;

/// Rectangular grid of similarity scores, each in [0, 1].
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SimilarityMatrix {
    rows: Vec<Vec<f64>>,
}

impl SimilarityMatrix {
    /// Compare every word of `a` against every word of `b`.
    pub fn build(a: &WordList, b: &WordList) -> Self {
        let rows = a
            .iter()
            .map(|wa| b.iter().map(|wb| similarity(wa, wb)).collect())
            .collect();
        Self { rows }
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Column count, taken from the first row (0 for an empty matrix).
    pub fn col_count(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        self.rows.get(row).and_then(|r| r.get(col)).copied()
    }

    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.row_count() == 0 || self.col_count() == 0
    }
}

impl From<Vec<Vec<f64>>> for SimilarityMatrix {
    fn from(rows: Vec<Vec<f64>>) -> Self {
        Self { rows }
    }
}
