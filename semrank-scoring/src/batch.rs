//! Query-to-corpus similarity, fanned out over rayon for large corpora.

use std::borrow::Borrow;

use rayon::prelude::*;

use semrank_core::models::{Candidate, Document};
use semrank_core::SemrankResult;

use crate::similarity::cosine_similarity;

/// Cosine similarity of `query` against every document, in input order.
///
/// Corpora with at least `parallel_threshold` documents are scored in
/// parallel; documents are independent so the result is identical either way.
/// A document without an embedding fails with `DimensionMismatch`.
pub fn similarities_to<D>(
    query: &[f32],
    documents: &[D],
    parallel_threshold: usize,
) -> SemrankResult<Vec<f64>>
where
    D: Borrow<Document> + Sync,
{
    let score = |doc: &D| cosine_similarity(query, doc.borrow().embedding().unwrap_or(&[]));
    if documents.len() >= parallel_threshold.max(1) {
        documents.par_iter().map(score).collect()
    } else {
        documents.iter().map(score).collect()
    }
}

/// Wrap `documents` into candidates scored by cosine similarity to `query`.
pub fn score_candidates(
    query: &[f32],
    documents: Vec<Document>,
    parallel_threshold: usize,
) -> SemrankResult<Vec<Candidate>> {
    let scores = similarities_to(query, &documents, parallel_threshold)?;
    Ok(documents
        .into_iter()
        .zip(scores)
        .map(|(doc, score)| Candidate::new(doc, score))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use semrank_core::SemrankError;

    fn doc(id: &str, v: Vec<f32>) -> Document {
        Document::new(id, "", Utc::now()).with_embedding(v)
    }

    #[test]
    fn parallel_and_sequential_agree() {
        let docs: Vec<Document> = (0..50)
            .map(|i| doc(&format!("d{i}"), vec![i as f32, 1.0, (50 - i) as f32]))
            .collect();
        let q = [1.0, 2.0, 3.0];
        let seq = similarities_to(&q, &docs, usize::MAX).unwrap();
        let par = similarities_to(&q, &docs, 1).unwrap();
        assert_eq!(seq, par);
    }

    #[test]
    fn borrowed_documents_score_the_same() {
        let docs = vec![doc("x", vec![0.0, 1.0]), doc("y", vec![1.0, 1.0])];
        let refs: Vec<&Document> = docs.iter().rev().collect();
        let owned = similarities_to(&[1.0, 0.0], &docs, 256).unwrap();
        let borrowed = similarities_to(&[1.0, 0.0], &refs, 256).unwrap();
        assert_eq!(owned, borrowed.into_iter().rev().collect::<Vec<_>>());
    }

    #[test]
    fn candidates_keep_input_order() {
        let docs = vec![doc("x", vec![0.0, 1.0]), doc("y", vec![1.0, 0.0])];
        let c = score_candidates(&[1.0, 0.0], docs, 256).unwrap();
        assert_eq!(c[0].id(), "x");
        assert!(c[0].score.abs() < 1e-9);
        assert!((c[1].score - 1.0).abs() < 1e-9);
        assert!(c[1].attention_weight.is_none());
    }

    #[test]
    fn missing_embedding_is_a_dimension_mismatch() {
        let docs = vec![Document::new("pending", "", Utc::now())];
        let err = similarities_to(&[1.0, 0.0], &docs, 256).unwrap_err();
        assert!(matches!(err, SemrankError::DimensionMismatch { .. }));
    }
}
