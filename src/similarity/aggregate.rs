// Matrix aggregation — the swap-ready abstraction.
//
// A pair of languages is reduced to one score by collapsing its similarity
// matrix. The default policy averages the main diagonal, which only makes
// sense if every translator kept the source order and count one-to-one:
// cell (i, i) then compares the two translations of the same source word.
// RowMaxMean drops that assumption by letting each row pick its best match.

use std::fmt;
use std::str::FromStr;

use super::matrix::SimilarityMatrix;

/// Trait for reducing a similarity matrix to a single pair score.
///
/// Returns `None` when the matrix holds no data, so an empty comparison is
/// never confused with a genuine score of zero.
pub trait Aggregator: Send + Sync {
    fn aggregate(&self, matrix: &SimilarityMatrix) -> Option<f64>;

    /// Short name used in logs and reports.
    fn name(&self) -> &'static str;
}

/// Mean of `matrix[i][i]` for `i < min(rows, cols)`.
///
/// Assumes the two word lists are aligned by index. Translators that reorder
/// or drop entries are penalized, not corrected for.
#[derive(Debug, Clone, Copy, Default)]
pub struct OrderPreservingDiagonal;

impl Aggregator for OrderPreservingDiagonal {
    fn aggregate(&self, matrix: &SimilarityMatrix) -> Option<f64> {
        if matrix.is_empty() {
            return None;
        }

        let n = matrix.row_count().min(matrix.col_count());
        let diagonal: Vec<f64> = (0..n).filter_map(|i| matrix.get(i, i)).collect();

        if diagonal.is_empty() {
            None
        } else {
            Some(diagonal.iter().sum::<f64>() / diagonal.len() as f64)
        }
    }

    fn name(&self) -> &'static str {
        "diagonal"
    }
}

/// Mean over rows of each row's best-matching cell.
#[derive(Debug, Clone, Copy, Default)]
pub struct RowMaxMean;

impl Aggregator for RowMaxMean {
    fn aggregate(&self, matrix: &SimilarityMatrix) -> Option<f64> {
        if matrix.is_empty() {
            return None;
        }

        let maxima: Vec<f64> = matrix
            .rows()
            .iter()
            .filter(|row| !row.is_empty())
            .map(|row| row.iter().copied().fold(0.0_f64, f64::max))
            .collect();

        if maxima.is_empty() {
            None
        } else {
            Some(maxima.iter().sum::<f64>() / maxima.len() as f64)
        }
    }

    fn name(&self) -> &'static str {
        "row-max"
    }
}

/// Diagonal average with the legacy 0.0 sentinel for an empty matrix.
pub fn diagonal_average(matrix: &SimilarityMatrix) -> f64 {
    OrderPreservingDiagonal.aggregate(matrix).unwrap_or(0.0)
}

/// Which aggregation policy to use, selectable from config or the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AggregatorKind {
    #[default]
    Diagonal,
    RowMax,
}

impl AggregatorKind {
    pub fn build(self) -> Box<dyn Aggregator> {
        match self {
            AggregatorKind::Diagonal => Box::new(OrderPreservingDiagonal),
            AggregatorKind::RowMax => Box::new(RowMaxMean),
        }
    }
}

impl FromStr for AggregatorKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "diagonal" => Ok(AggregatorKind::Diagonal),
            "row-max" | "rowmax" => Ok(AggregatorKind::RowMax),
            other => anyhow::bail!("unknown aggregator '{other}' (expected diagonal or row-max)"),
        }
    }
}

impl fmt::Display for AggregatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AggregatorKind::Diagonal => write!(f, "diagonal"),
            AggregatorKind::RowMax => write!(f, "row-max"),
        }
    }
}
