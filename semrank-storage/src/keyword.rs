//! Term-overlap keyword relevance.
//!
//! A document matches when it contains every query term. Relevance is the
//! mean saturating term frequency `tf / (tf + 1)` over the query terms, so it
//! lies in [0, 1) and grows with repeated mentions.

use std::collections::{BTreeSet, HashMap};

use semrank_core::models::Document;
use semrank_core::traits::IKeywordScorer;

/// Default keyword scorer over document content.
#[derive(Debug, Clone)]
pub struct TermOverlapScorer {
    min_term_len: usize,
}

impl TermOverlapScorer {
    pub const fn new() -> Self {
        Self { min_term_len: 2 }
    }

    /// Ignore terms shorter than `min_term_len` characters.
    pub fn with_min_term_len(min_term_len: usize) -> Self {
        Self { min_term_len }
    }

    /// Lowercase alphanumeric terms.
    fn tokenize(&self, text: &str) -> Vec<String> {
        text.split(|c: char| !c.is_alphanumeric() && c != '_')
            .filter(|s| s.chars().count() >= self.min_term_len)
            .map(str::to_lowercase)
            .collect()
    }

    fn query_terms(&self, query: &str) -> BTreeSet<String> {
        self.tokenize(query).into_iter().collect()
    }

    fn term_frequencies(&self, text: &str) -> HashMap<String, usize> {
        let mut tf = HashMap::new();
        for term in self.tokenize(text) {
            *tf.entry(term).or_insert(0) += 1;
        }
        tf
    }
}

impl Default for TermOverlapScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl IKeywordScorer for TermOverlapScorer {
    fn relevance(&self, query: &str, document: &Document) -> f64 {
        let terms = self.query_terms(query);
        if terms.is_empty() {
            return 0.0;
        }
        let tf = self.term_frequencies(&document.content);
        let total: f64 = terms
            .iter()
            .map(|t| {
                let n = tf.get(t).copied().unwrap_or(0) as f64;
                n / (n + 1.0)
            })
            .sum();
        total / terms.len() as f64
    }

    fn matches(&self, query: &str, document: &Document) -> bool {
        let terms = self.query_terms(query);
        if terms.is_empty() {
            return false;
        }
        let tf = self.term_frequencies(&document.content);
        terms.iter().all(|t| tf.contains_key(t))
    }
}
