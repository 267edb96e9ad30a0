use crate::errors::SemrankResult;

/// Text → vector function for a named model.
///
/// The same text and model always yield the same vector.
pub trait IEmbedder: Send + Sync {
    fn embed(&self, text: &str) -> SemrankResult<Vec<f32>>;

    fn embed_batch(&self, texts: &[String]) -> SemrankResult<Vec<Vec<f32>>> {
        texts.iter().map(|t| self.embed(t)).collect()
    }

    /// The dimensionality of produced vectors.
    fn dimensions(&self) -> usize;

    fn model_name(&self) -> &str;
}
