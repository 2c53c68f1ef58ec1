// Unit tests for string similarity, matrix construction, and aggregation.
//
// Property-style checks over a fixed word sample: identity, symmetry, range,
// and the diagonal-alignment contract.

use lexigraph::similarity::aggregate::{
    diagonal_average, Aggregator, OrderPreservingDiagonal, RowMaxMean,
};
use lexigraph::similarity::levenshtein::similarity;
use lexigraph::similarity::matrix::SimilarityMatrix;
use lexigraph::wordlist::WordList;

const SAMPLE: &[&str] = &[
    "hello", "hola", "bonjour", "monde", "mundo", "world", "welt", "café", "Hund", "hund", "a",
];

// ============================================================
// similarity
// ============================================================

#[test]
fn similarity_identity() {
    for w in SAMPLE {
        assert_eq!(similarity(w, w), 1.0, "{w} vs itself");
    }
}

#[test]
fn similarity_is_symmetric() {
    for a in SAMPLE {
        for b in SAMPLE {
            assert_eq!(similarity(a, b), similarity(b, a), "{a} vs {b}");
        }
    }
}

#[test]
fn similarity_stays_in_unit_range() {
    for a in SAMPLE {
        for b in SAMPLE {
            let s = similarity(a, b);
            assert!((0.0..=1.0).contains(&s), "{a} vs {b} = {s}");
        }
    }
}

#[test]
fn similarity_disjoint_equal_length_is_zero() {
    assert_eq!(similarity("abc", "xyz"), 0.0);
}

#[test]
fn similarity_mundo_monde() {
    // One substitution over five characters
    assert!((similarity("mundo", "monde") - 0.6).abs() < 1e-9);
}

// ============================================================
// matrix + aggregation
// ============================================================

#[test]
fn matrix_values_in_range_and_shape() {
    let a = WordList::new(["hello", "world", "cat"]);
    let b = WordList::new(["hola", "mundo"]);
    let m = SimilarityMatrix::build(&a, &b);
    assert_eq!((m.row_count(), m.col_count()), (3, 2));
    for row in m.rows() {
        for v in row {
            assert!((0.0..=1.0).contains(v));
        }
    }
}

#[test]
fn identical_lists_aggregate_to_one() {
    let a = WordList::new(["hello", "world"]);
    let m = SimilarityMatrix::build(&a, &a);
    assert_eq!(diagonal_average(&m), 1.0);
    assert_eq!(RowMaxMean.aggregate(&m), Some(1.0));
}

#[test]
fn diagonal_uses_min_dimension() {
    let m = SimilarityMatrix::from(vec![
        vec![0.8, 0.5, 0.3, 0.2],
        vec![0.5, 0.9, 0.6, 0.1],
        vec![0.3, 0.6, 0.7, 0.4],
    ]);
    assert!((diagonal_average(&m) - 0.8).abs() < 1e-9);
}

#[test]
fn empty_matrix_has_no_score() {
    for m in [SimilarityMatrix::from(vec![]), SimilarityMatrix::from(vec![vec![]])] {
        assert_eq!(diagonal_average(&m), 0.0);
        assert_eq!(OrderPreservingDiagonal.aggregate(&m), None);
        assert_eq!(RowMaxMean.aggregate(&m), None);
    }
}

#[test]
fn dropped_translation_penalizes_diagonal() {
    // The second list lost its middle entry, shifting everything after it
    let a = WordList::new(["red", "green", "blue"]);
    let b = WordList::new(["red", "blue"]);
    let m = SimilarityMatrix::build(&a, &b);
    let diag = diagonal_average(&m);
    let row_max = RowMaxMean.aggregate(&m).unwrap();
    assert!(diag < row_max, "diagonal {diag} should trail row-max {row_max}");
}
