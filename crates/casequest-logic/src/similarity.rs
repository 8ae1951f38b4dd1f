//! Normalized edit-distance similarity between answer strings.
//!
//! Used to grade free-text answers leniently: a response close enough to
//! the expected phrasing still counts. Inputs are compared after trimming
//! surrounding whitespace and case folding; no other Unicode normalization
//! is applied, and lengths are counted in `char`s.

/// Unit-cost edit distance (insert, delete, substitute) between `a` and
/// `b`, case-insensitive and whitespace-trimmed.
///
/// Uses two rolling rows of length `len(b) + 1`, so memory is linear in
/// the second argument regardless of input sizes.
pub fn edit_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = normalize(a);
    let b: Vec<char> = normalize(b);

    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr: Vec<usize> = vec![0; b.len() + 1];

    for (i, &ca) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &cb) in b.iter().enumerate() {
            let substitution = prev[j] + usize::from(ca != cb);
            let deletion = prev[j + 1] + 1;
            let insertion = curr[j] + 1;
            curr[j + 1] = substitution.min(deletion).min(insertion);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

/// Similarity in `[0, 1]`: `1.0` for two (effectively) empty strings,
/// otherwise `max(0, 1 - distance / max(len(a), len(b), 1))`.
///
/// Symmetric: `similarity(a, b) == similarity(b, a)`.
pub fn similarity(a: &str, b: &str) -> f64 {
    let len_a = normalize(a).len();
    let len_b = normalize(b).len();
    if len_a == 0 && len_b == 0 {
        return 1.0;
    }

    let longest = len_a.max(len_b).max(1);
    let d = edit_distance(a, b);
    (1.0 - d as f64 / longest as f64).max(0.0)
}

fn normalize(s: &str) -> Vec<char> {
    s.trim().to_lowercase().chars().collect()
}
