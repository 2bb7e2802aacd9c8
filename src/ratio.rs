//! Similarity ratio over strings, and nearest-match selection from a
//! candidate list.

use crate::matcher::sequence_ratio;

/// Decomposes `a` and `b` into their code-point sequences (one entry per
/// Unicode scalar value, not per grapheme cluster) and runs
/// [`sequence_ratio`] over them.
pub fn string_ratio(a: &str, b: &str) -> f64 {
    let a_chars: Vec<String> = a.chars().map(|c| c.to_string()).collect();
    let b_chars: Vec<String> = b.chars().map(|c| c.to_string()).collect();
    sequence_ratio(&a_chars, &b_chars)
}

/// Linear scan over `candidates`, keeping the first one whose ratio
/// strictly exceeds the running best (so ties keep the earliest
/// candidate). Returns `("", 0.0)` when `candidates` is empty.
pub fn closest_match(target: &str, candidates: &[&str]) -> (String, f64) {
    let mut best_ratio = -1.0f64;
    let mut best = String::new();
    for &candidate in candidates {
        let r = string_ratio(target, candidate);
        if r > best_ratio {
            best_ratio = r;
            best = candidate.to_string();
        }
    }
    if best_ratio < 0.0 {
        (String::new(), 0.0)
    } else {
        (best, best_ratio)
    }
}

/// Ranks `candidates` by descending ratio against `target` (stable, so
/// ties keep original order) and truncates to `min(n, candidates.len())`.
pub fn closest_matches(target: &str, candidates: &[&str], n: usize) -> Vec<String> {
    let mut ranked: Vec<(usize, &&str, f64)> = candidates
        .iter()
        .enumerate()
        .map(|(i, c)| (i, c, string_ratio(target, c)))
        .collect();
    ranked.sort_by(|x, y| y.2.partial_cmp(&x.2).unwrap().then(x.0.cmp(&y.0)));
    ranked
        .into_iter()
        .take(n)
        .map(|(_, c, _)| c.to_string())
        .collect()
}

#[cfg(test)]
mod ratio_tests;
