use std::collections::HashMap;

use serde::Deserialize;
use tracing::debug;

use crate::core::levels::infer_level;
use crate::core::similarity::{FuzzySimilarity, Similarity, Strategy};
use crate::models::TitleResolution;

/// Substitutions applied to catalog keys containing the source word
const TITLE_VARIATIONS: &[(&str, &str)] = &[
    ("senior", "sr"),
    ("junior", "jr"),
    ("lead", "principal"),
];

/// Minimum token-sort score for a fuzzy catalog hit
pub const DEFAULT_RESOLVE_THRESHOLD: f64 = 85.0;

/// Canonical job title with its known aliases
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TitleEntry {
    pub title: String,
    #[serde(default)]
    pub aliases: Vec<String>,
    #[serde(default)]
    pub field: Option<String>,
}

/// Lookup from normalized title keys to canonical catalog entries
#[derive(Debug, Clone)]
pub struct TitleCatalog<S = FuzzySimilarity> {
    entries: Vec<TitleEntry>,
    // key -> index into `entries`, plus insertion order for deterministic fuzzy scans
    lookup: HashMap<String, usize>,
    keys: Vec<String>,
    threshold: f64,
    similarity: S,
}

impl TitleCatalog<FuzzySimilarity> {
    pub fn new(entries: Vec<TitleEntry>) -> Self {
        Self::with_similarity(entries, DEFAULT_RESOLVE_THRESHOLD, FuzzySimilarity)
    }
}

impl Default for TitleCatalog<FuzzySimilarity> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl<S: Similarity> TitleCatalog<S> {
    pub fn with_similarity(entries: Vec<TitleEntry>, threshold: f64, similarity: S) -> Self {
        let mut lookup = HashMap::new();
        let mut keys = Vec::new();

        for (idx, entry) in entries.iter().enumerate() {
            for key in expand_keys(entry) {
                if lookup.insert(key.clone(), idx).is_none() {
                    keys.push(key);
                }
            }
        }

        debug!(entries = entries.len(), keys = keys.len(), "title catalog built");

        Self { entries, lookup, keys, threshold, similarity }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Find the catalog entry for a raw title: exact key first, then the best fuzzy key
    pub fn lookup(&self, raw: &str) -> Option<(&TitleEntry, f64)> {
        let key = raw.trim().to_lowercase();
        if key.is_empty() {
            return None;
        }

        if let Some(&idx) = self.lookup.get(&key) {
            return Some((&self.entries[idx], 100.0));
        }

        let mut best: Option<(&str, f64)> = None;
        for candidate in &self.keys {
            let score = self.similarity.score(&key, candidate, Strategy::TokenSort);
            if best.map_or(true, |(_, best_score)| score > best_score) {
                best = Some((candidate.as_str(), score));
            }
        }

        best.filter(|(_, score)| *score >= self.threshold)
            .and_then(|(candidate, score)| {
                self.lookup.get(candidate).map(|&idx| (&self.entries[idx], score))
            })
    }

    /// Resolve a raw title to its canonical form, field and inferred seniority
    pub fn resolve(&self, raw: &str) -> TitleResolution {
        let level = infer_level(raw);
        match self.lookup(raw) {
            Some((entry, score)) => TitleResolution {
                title: raw.to_string(),
                normalized_title: Some(entry.title.clone()),
                field: entry.field.clone(),
                level,
                score,
            },
            None => TitleResolution {
                title: raw.to_string(),
                normalized_title: None,
                field: None,
                level,
                score: 0.0,
            },
        }
    }
}

/// All lookup keys for an entry: its title, aliases and their table variations
pub fn expand_keys(entry: &TitleEntry) -> Vec<String> {
    let mut keys: Vec<String> = Vec::with_capacity(entry.aliases.len() + 2);
    let base = entry.title.trim().to_lowercase();

    let mut push = |key: String| {
        if !key.is_empty() && !keys.contains(&key) {
            keys.push(key);
        }
    };

    push(base.clone());
    for alias in &entry.aliases {
        push(alias.trim().to_lowercase());
    }
    for (from, to) in TITLE_VARIATIONS {
        if base.contains(from) {
            push(base.replace(from, to));
        }
    }
    keys
}
