//! Signed feature-hashing embedder.
//!
//! Unigrams and adjacent-word bigrams are hashed with blake3 into a fixed
//! number of buckets. The top hash bit picks the sign, so colliding features
//! cancel in expectation instead of piling up. Term counts are damped with
//! `1 + ln(tf)` and the result is L2-normalized.

use std::collections::BTreeMap;

use semrank_core::errors::EmbeddingError;
use semrank_core::traits::IEmbedder;
use semrank_core::SemrankResult;

/// Bigrams count half as much as the words they are made of.
const BIGRAM_WEIGHT: f32 = 0.5;

/// Deterministic embedder that needs no model files.
#[derive(Debug, Clone)]
pub struct HashingEmbedder {
    dimensions: usize,
    model: String,
}

impl HashingEmbedder {
    pub fn new(dimensions: usize, model: impl Into<String>) -> Self {
        Self {
            dimensions,
            model: model.into(),
        }
    }

    /// Bucket and sign for a feature.
    fn slot(&self, feature: &str) -> (usize, f32) {
        let digest = blake3::hash(feature.as_bytes());
        let mut word = [0u8; 8];
        word.copy_from_slice(&digest.as_bytes()[..8]);
        let h = u64::from_le_bytes(word);
        let sign = if h >> 63 == 0 { 1.0 } else { -1.0 };
        ((h % self.dimensions as u64) as usize, sign)
    }

    fn words(text: &str) -> Vec<String> {
        text.split(|c: char| !(c.is_alphanumeric() || c == '_'))
            .filter(|w| w.chars().count() > 1)
            .map(str::to_lowercase)
            .collect()
    }

    /// Feature counts: words, plus bigrams keyed with a space separator.
    fn features(text: &str) -> BTreeMap<String, (f32, f32)> {
        let words = Self::words(text);
        let mut counts: BTreeMap<String, (f32, f32)> = BTreeMap::new();
        for w in &words {
            counts.entry(w.clone()).or_insert((0.0, 1.0)).0 += 1.0;
        }
        for pair in words.windows(2) {
            let bigram = format!("{} {}", pair[0], pair[1]);
            counts.entry(bigram).or_insert((0.0, BIGRAM_WEIGHT)).0 += 1.0;
        }
        counts
    }

    fn vectorize(&self, text: &str) -> SemrankResult<Vec<f32>> {
        if self.dimensions == 0 {
            return Err(EmbeddingError::InferenceFailed {
                reason: format!("{} has no buckets to hash into", self.model),
            }
            .into());
        }
        let mut out = vec![0.0f32; self.dimensions];
        for (feature, (tf, weight)) in Self::features(text) {
            let (bucket, sign) = self.slot(&feature);
            out[bucket] += sign * weight * (1.0 + tf.ln());
        }
        let norm = out.iter().map(|x| x * x).sum::<f32>().sqrt();
        if norm > f32::EPSILON {
            out.iter_mut().for_each(|x| *x /= norm);
        }
        Ok(out)
    }
}

impl IEmbedder for HashingEmbedder {
    fn embed(&self, text: &str) -> SemrankResult<Vec<f32>> {
        self.vectorize(text)
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}
