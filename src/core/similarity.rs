use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use rapidfuzz::distance::indel;

/// String comparison strategy used when scoring two names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Tokens are sorted before comparing, so word order does not matter
    TokenSort,
    /// Shared tokens are factored out, so a subset of words scores high
    TokenSet,
    /// Best-aligned substring of the longer string against the shorter one
    Partial,
}

/// Similarity scoring capability shared by every matcher.
///
/// Implementations must return a score in `[0, 100]` and be deterministic.
pub trait Similarity: Send + Sync {
    fn score(&self, a: &str, b: &str, strategy: Strategy) -> f64;
}

/// Default similarity backend built on InDel ratios
#[derive(Debug, Clone, Copy, Default)]
pub struct FuzzySimilarity;

impl Similarity for FuzzySimilarity {
    fn score(&self, a: &str, b: &str, strategy: Strategy) -> f64 {
        let score = match strategy {
            Strategy::TokenSort => token_sort_ratio(a, b),
            Strategy::TokenSet => token_set_ratio(a, b),
            Strategy::Partial => partial_ratio(a, b),
        };
        score.clamp(0.0, 100.0)
    }
}

/// InDel ratio (0-100): `2 * lcs / (len(a) + len(b))`
#[inline]
pub fn ratio(a: &str, b: &str) -> f64 {
    indel::normalized_similarity(a.chars(), b.chars()) * 100.0
}

/// Ratio over whitespace tokens sorted alphabetically
pub fn token_sort_ratio(a: &str, b: &str) -> f64 {
    ratio(&sorted_tokens(a), &sorted_tokens(b))
}

/// Ratio after separating shared tokens from the leftovers of each side.
///
/// When every token of one side is contained in the other the score is 100.
pub fn token_set_ratio(a: &str, b: &str) -> f64 {
    let tokens_a: BTreeSet<&str> = a.split_whitespace().collect();
    let tokens_b: BTreeSet<&str> = b.split_whitespace().collect();

    if tokens_a.is_empty() || tokens_b.is_empty() {
        return 0.0;
    }

    let shared: Vec<&str> = tokens_a.intersection(&tokens_b).copied().collect();
    let only_a: Vec<&str> = tokens_a.difference(&tokens_b).copied().collect();
    let only_b: Vec<&str> = tokens_b.difference(&tokens_a).copied().collect();

    if !shared.is_empty() && (only_a.is_empty() || only_b.is_empty()) {
        return 100.0;
    }

    let shared_joined = shared.join(" ");
    let with_a = join_non_empty(&shared_joined, &only_a.join(" "));
    let with_b = join_non_empty(&shared_joined, &only_b.join(" "));

    let mut best = ratio(&with_a, &with_b);
    if !shared_joined.is_empty() {
        best = best
            .max(ratio(&shared_joined, &with_a))
            .max(ratio(&shared_joined, &with_b));
    }
    best
}

/// Best ratio of the shorter string against every equally long window of the longer one
pub fn partial_ratio(a: &str, b: &str) -> f64 {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();

    let (shorter, longer) = if a_chars.len() <= b_chars.len() {
        (a_chars, b_chars)
    } else {
        (b_chars, a_chars)
    };

    if shorter.is_empty() {
        return if longer.is_empty() { 100.0 } else { 0.0 };
    }

    let needle: String = shorter.iter().collect();
    if shorter.len() == longer.len() {
        return ratio(&needle, &longer.iter().collect::<String>());
    }

    let mut best = 0.0_f64;
    for window in longer.windows(shorter.len()) {
        let candidate: String = window.iter().collect();
        let score = ratio(&needle, &candidate);
        if score > best {
            best = score;
            if best >= 100.0 {
                break;
            }
        }
    }
    best
}

fn sorted_tokens(s: &str) -> String {
    let mut tokens: Vec<&str> = s.split_whitespace().collect();
    tokens.sort_unstable();
    tokens.join(" ")
}

fn join_non_empty(head: &str, tail: &str) -> String {
    match (head.is_empty(), tail.is_empty()) {
        (true, _) => tail.to_string(),
        (_, true) => head.to_string(),
        _ => format!("{} {}", head, tail),
    }
}
