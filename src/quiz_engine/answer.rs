//! Answer normalisation shared by both selection engines.

/// Trim surrounding whitespace and case-fold.
pub fn normalize(answer: &str) -> String {
    answer.trim().to_lowercase()
}

/// Exact equality after [`normalize`] on both sides.
pub fn answers_match(submitted: &str, expected: &str) -> bool {
    normalize(submitted) == normalize(expected)
}
