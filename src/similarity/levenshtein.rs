// Normalized Levenshtein similarity between two words.
//
// The similarity is 1 - distance / max(len_a, len_b), measured in Unicode
// scalar values rather than bytes so accented letters count as one edit.
// Comparison is case-sensitive: "Hello" and "hello" differ by one edit.

/// Classic Levenshtein edit distance (insertions, deletions, substitutions).
///
/// Uses a single rolling row, so memory is O(len(b)).
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut row: Vec<usize> = (0..=b.len()).collect();

    for (i, ca) in a.iter().enumerate() {
        // row[0] holds the distance from a[..=i] to the empty prefix of b
        let mut diagonal = row[0];
        row[0] = i + 1;

        for (j, cb) in b.iter().enumerate() {
            let substitution = diagonal + usize::from(ca != cb);
            let deletion = row[j + 1] + 1;
            let insertion = row[j] + 1;
            diagonal = row[j + 1];
            row[j + 1] = substitution.min(deletion).min(insertion);
        }
    }

    row[b.len()]
}

/// Normalized edit-distance similarity in [0, 1].
///
/// Two empty strings are identical and score 1.0.
pub fn similarity(a: &str, b: &str) -> f64 {
    let max_len = a.chars().count().max(b.chars().count());
    if max_len == 0 {
        return 1.0;
    }

    let distance = levenshtein_distance(a, b) as f64;
    (1.0 - distance / max_len as f64).clamp(0.0, 1.0)
}
