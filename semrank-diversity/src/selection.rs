//! The greedy MMR fold.

use semrank_core::errors::SemrankResult;
use semrank_core::models::Document;
use semrank_scoring::{cosine_similarity, ranked_order};

/// Picks so far plus, for every document, its highest similarity to any pick.
#[derive(Debug, Clone)]
pub struct SelectionState {
    selected: Vec<usize>,
    taken: Vec<bool>,
    max_similarity: Vec<f64>,
}

impl SelectionState {
    pub fn new(candidates: usize) -> Self {
        Self {
            selected: Vec::new(),
            taken: vec![false; candidates],
            max_similarity: vec![f64::NEG_INFINITY; candidates],
        }
    }

    /// Indices picked so far, in order.
    pub fn selected(&self) -> &[usize] {
        &self.selected
    }

    pub fn is_taken(&self, index: usize) -> bool {
        self.taken[index]
    }

    /// Redundancy penalty for `index`; 0 while nothing is selected.
    pub fn penalty(&self, index: usize) -> f64 {
        if self.selected.is_empty() {
            0.0
        } else {
            self.max_similarity[index]
        }
    }

    /// Mark `index` picked and fold its similarity into every remaining
    /// candidate's accumulator.
    pub fn take(&mut self, index: usize, documents: &[Document]) -> SemrankResult<()> {
        self.taken[index] = true;
        self.selected.push(index);
        let picked = documents[index].embedding().unwrap_or(&[]);
        for (j, doc) in documents.iter().enumerate() {
            if self.taken[j] {
                continue;
            }
            let sim = cosine_similarity(picked, doc.embedding().unwrap_or(&[]))?;
            if sim > self.max_similarity[j] {
                self.max_similarity[j] = sim;
            }
        }
        Ok(())
    }
}

/// A selection step: which document, and the terms that won it the slot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pick {
    pub index: usize,
    pub relevance: f64,
    pub max_similarity_to_selected: f64,
    pub mmr_score: f64,
}

/// Greedy MMR over `documents` with precomputed `relevance` (aligned by
/// index). Stops at `limit` picks or when candidates run out. Ties go to the
/// lower id.
pub fn select(
    documents: &[Document],
    relevance: &[f64],
    limit: usize,
    lambda: f64,
) -> SemrankResult<Vec<Pick>> {
    let target = limit.min(documents.len());
    let mut state = SelectionState::new(documents.len());
    let mut picks = Vec::with_capacity(target);

    while picks.len() < target {
        let mut best: Option<Pick> = None;
        for (i, doc) in documents.iter().enumerate() {
            if state.is_taken(i) {
                continue;
            }
            let penalty = state.penalty(i);
            let score = lambda * relevance[i] - (1.0 - lambda) * penalty;
            let better = match &best {
                None => true,
                Some(b) => {
                    ranked_order(score, &doc.id, b.mmr_score, &documents[b.index].id).is_lt()
                }
            };
            if better {
                best = Some(Pick {
                    index: i,
                    relevance: relevance[i],
                    max_similarity_to_selected: penalty,
                    mmr_score: score,
                });
            }
        }
        let Some(pick) = best else { break };
        state.take(pick.index, documents)?;
        picks.push(pick);
    }
    Ok(picks)
}
