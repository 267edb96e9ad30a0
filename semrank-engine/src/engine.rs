//! SemrankEngine: the facade over store, index, embedder, and keyword scorer.

use std::sync::Arc;

use semrank_attention::{
    AttentionAggregator, AttentionEdge, AttentionHit, AttentionMatrix, FlashHit, MultiHeadHit,
};
use semrank_core::config::SemrankConfig;
use semrank_core::errors::{SemrankError, SemrankResult};
use semrank_core::models::{Document, MetadataFilter};
use semrank_core::traits::{IAnnIndex, IEmbedder, IEmbeddingStore, IKeywordScorer};
use semrank_diversity::{DiversitySelector, MmrHit};
use semrank_embeddings::{CachedEmbedder, HashingEmbedder};
use semrank_retrieval::{
    Aggregation, ClusterHit, HybridHit, RagHit, RetrievalPipeline, SearchHit, TemporalHit,
};
use semrank_storage::{FlatIndex, MemoryStore, TermOverlapScorer};
use tracing::debug;

use crate::{attention_span, diversity_span, embedding_span, retrieval_span};

/// Shared, cheaply clonable entry point to every semrank operation.
#[derive(Clone)]
pub struct SemrankEngine {
    store: Arc<dyn IEmbeddingStore>,
    ann: Option<Arc<dyn IAnnIndex>>,
    embedder: Arc<dyn IEmbedder>,
    keyword: Arc<dyn IKeywordScorer>,
    config: SemrankConfig,
}

impl SemrankEngine {
    /// Engine over `store` and `embedder`. The embedder must produce vectors
    /// of the configured corpus dimension.
    pub fn new(
        store: Arc<dyn IEmbeddingStore>,
        embedder: Arc<dyn IEmbedder>,
        config: SemrankConfig,
    ) -> SemrankResult<Self> {
        if embedder.dimensions() != config.corpus.dimensions {
            return Err(SemrankError::DimensionMismatch {
                expected: config.corpus.dimensions,
                actual: embedder.dimensions(),
            });
        }
        Ok(Self {
            store,
            ann: None,
            embedder,
            keyword: Arc::new(TermOverlapScorer::new()),
            config,
        })
    }

    /// Self-contained engine: in-memory store, exact flat index, and the
    /// cached hashing embedder. The store handle is returned for ingestion.
    pub fn in_memory(config: SemrankConfig) -> SemrankResult<(Self, Arc<MemoryStore>)> {
        let dims = config.corpus.dimensions;
        let store = Arc::new(MemoryStore::new(dims));
        let embedder = CachedEmbedder::new(
            HashingEmbedder::new(dims, config.embedding.model.clone()),
            config.embedding.cache_size,
        );
        let index = FlatIndex::new(store.clone());
        let engine =
            Self::new(store.clone(), Arc::new(embedder), config)?.with_ann_index(Arc::new(index));
        Ok((engine, store))
    }

    pub fn with_ann_index(mut self, ann: Arc<dyn IAnnIndex>) -> Self {
        self.ann = Some(ann);
        self
    }

    pub fn with_keyword_scorer(mut self, keyword: Arc<dyn IKeywordScorer>) -> Self {
        self.keyword = keyword;
        self
    }

    pub fn config(&self) -> &SemrankConfig {
        &self.config
    }

    // --- components ---

    pub fn retrieval(&self) -> RetrievalPipeline<'_> {
        let pipeline = RetrievalPipeline::new(
            self.store.as_ref(),
            self.config.corpus.dimensions,
            self.config.retrieval.clone(),
        )
        .with_keyword_scorer(self.keyword.as_ref());
        match &self.ann {
            Some(ann) => pipeline.with_ann_index(ann.as_ref()),
            None => pipeline,
        }
    }

    pub fn attention(&self) -> AttentionAggregator<'_> {
        AttentionAggregator::new(
            self.store.as_ref(),
            self.config.corpus.dimensions,
            self.config.attention.clone(),
        )
        .with_parallel_threshold(self.config.retrieval.parallel_threshold)
    }

    pub fn diversity(&self) -> DiversitySelector<'_> {
        DiversitySelector::new(
            self.store.as_ref(),
            self.config.corpus.dimensions,
            self.config.diversity.clone(),
        )
        .with_parallel_threshold(self.config.retrieval.parallel_threshold)
    }

    // --- embedding ---

    /// Embed query text through the configured embedder.
    pub fn embed_query(&self, text: &str) -> SemrankResult<Vec<f32>> {
        let _span =
            embedding_span!(self.embedder.model_name(), self.embedder.dimensions()).entered();
        let vector = self.embedder.embed(text)?;
        debug!(chars = text.len(), "query embedded");
        Ok(vector)
    }

    /// Fill in the embedding of a pending document from its content.
    /// Documents that already carry an embedding are returned unchanged.
    pub fn embed_document(&self, document: Document) -> SemrankResult<Document> {
        if document.is_searchable() {
            return Ok(document);
        }
        let _span =
            embedding_span!(self.embedder.model_name(), self.embedder.dimensions()).entered();
        let vector = self.embedder.embed(&document.content)?;
        Ok(document.with_embedding(vector))
    }

    // --- retrieval ---

    pub fn semantic_search(
        &self,
        query: &[f32],
        k: usize,
        min_similarity: f64,
        filters: &[MetadataFilter],
    ) -> SemrankResult<Vec<SearchHit>> {
        let _span = retrieval_span!("semantic_search", k).entered();
        self.retrieval().semantic_search(query, k, min_similarity, filters)
    }

    pub fn rag_retrieve(
        &self,
        query: &[f32],
        coarse_limit: usize,
        final_limit: usize,
    ) -> SemrankResult<Vec<RagHit>> {
        let _span = retrieval_span!("rag_retrieve", final_limit).entered();
        self.retrieval().rag_retrieve(query, coarse_limit, final_limit)
    }

    pub fn hybrid_search(
        &self,
        query: &[f32],
        keyword_query: &str,
        limit: usize,
        vector_weight: f64,
        keyword_weight: f64,
    ) -> SemrankResult<Vec<HybridHit>> {
        let _span = retrieval_span!("hybrid_search", limit).entered();
        self.retrieval()
            .hybrid_search(query, keyword_query, limit, vector_weight, keyword_weight)
    }

    pub fn temporal_search(
        &self,
        query: &[f32],
        limit: usize,
        decay_days: f64,
        time_weight: f64,
    ) -> SemrankResult<Vec<TemporalHit>> {
        let _span = retrieval_span!("temporal_search", limit).entered();
        self.retrieval().temporal_search(query, limit, decay_days, time_weight)
    }

    pub fn cluster_search(
        &self,
        query_vectors: &[Vec<f32>],
        limit: usize,
        aggregation: Aggregation,
    ) -> SemrankResult<Vec<ClusterHit>> {
        let _span = retrieval_span!("cluster_search", limit).entered();
        self.retrieval().cluster_search(query_vectors, limit, aggregation)
    }

    // --- attention ---

    pub fn attention_scores(
        &self,
        query: &[f32],
        limit: usize,
        temperature: f64,
    ) -> SemrankResult<Vec<AttentionHit>> {
        let _span = attention_span!("attention_scores", temperature).entered();
        self.attention().attention_scores(query, limit, temperature)
    }

    pub fn self_attention(
        &self,
        source_ids: &[String],
        head_count: usize,
        temperature: f64,
    ) -> SemrankResult<Vec<AttentionEdge>> {
        let _span = attention_span!("self_attention", temperature).entered();
        self.attention().self_attention(source_ids, head_count, temperature)
    }

    pub fn cross_attention(
        &self,
        query_ids: &[String],
        key_filters: &[MetadataFilter],
        temperature: f64,
    ) -> SemrankResult<Vec<AttentionEdge>> {
        let _span = attention_span!("cross_attention", temperature).entered();
        self.attention().cross_attention(query_ids, key_filters, temperature)
    }

    pub fn multi_head_attention_aggregate(
        &self,
        query: &[f32],
        num_heads: usize,
        head_dim: usize,
        limit: usize,
    ) -> SemrankResult<Vec<MultiHeadHit>> {
        let temperature = self.config.attention.temperature;
        let _span = attention_span!("multi_head_attention_aggregate", temperature).entered();
        self.attention()
            .multi_head_attention_aggregate(query, num_heads, head_dim, limit)
    }

    pub fn flash_attention_search(
        &self,
        query: &[f32],
        block_size: usize,
        limit: usize,
    ) -> SemrankResult<Vec<FlashHit>> {
        let temperature = self.config.attention.temperature;
        let _span = attention_span!("flash_attention_search", temperature).entered();
        self.attention().flash_attention_search(query, block_size, limit)
    }

    pub fn causal_attention(
        &self,
        source_ids: &[String],
        temperature: f64,
    ) -> SemrankResult<Vec<AttentionEdge>> {
        let _span = attention_span!("causal_attention", temperature).entered();
        self.attention().causal_attention(source_ids, temperature)
    }

    pub fn attention_matrix(
        &self,
        ids: &[String],
        temperature: f64,
    ) -> SemrankResult<AttentionMatrix> {
        let _span = attention_span!("attention_matrix", temperature).entered();
        self.attention().attention_matrix(ids, temperature)
    }

    // --- diversity ---

    pub fn mmr_search(
        &self,
        query: &[f32],
        limit: usize,
        lambda: f64,
    ) -> SemrankResult<Vec<MmrHit>> {
        let _span = diversity_span!("mmr_search", lambda).entered();
        self.diversity().mmr_search(query, limit, lambda)
    }

    pub fn mmr_rerank(
        &self,
        query: &[f32],
        candidate_ids: &[String],
        limit: usize,
        lambda: f64,
    ) -> SemrankResult<Vec<MmrHit>> {
        let _span = diversity_span!("mmr_rerank", lambda).entered();
        self.diversity().mmr_rerank(query, candidate_ids, limit, lambda)
    }

    // --- text entry points ---

    pub fn search_text(
        &self,
        text: &str,
        k: usize,
        min_similarity: f64,
        filters: &[MetadataFilter],
    ) -> SemrankResult<Vec<SearchHit>> {
        let query = self.embed_query(text)?;
        self.semantic_search(&query, k, min_similarity, filters)
    }

    pub fn rag_text(
        &self,
        text: &str,
        coarse_limit: usize,
        final_limit: usize,
    ) -> SemrankResult<Vec<RagHit>> {
        let query = self.embed_query(text)?;
        self.rag_retrieve(&query, coarse_limit, final_limit)
    }

    /// Hybrid search with `text` as both the embedded query and the keyword
    /// query, weighted by the configured vector and keyword weights.
    pub fn hybrid_text(&self, text: &str, limit: usize) -> SemrankResult<Vec<HybridHit>> {
        let query = self.embed_query(text)?;
        let retrieval = &self.config.retrieval;
        self.hybrid_search(&query, text, limit, retrieval.vector_weight, retrieval.keyword_weight)
    }

    /// Temporal search with the configured decay constant and time weight.
    pub fn temporal_text(&self, text: &str, limit: usize) -> SemrankResult<Vec<TemporalHit>> {
        let query = self.embed_query(text)?;
        let retrieval = &self.config.retrieval;
        self.temporal_search(&query, limit, retrieval.decay_days, retrieval.time_weight)
    }

    /// Flash search in blocks of the configured size.
    pub fn flash_text(&self, text: &str, limit: usize) -> SemrankResult<Vec<FlashHit>> {
        let query = self.embed_query(text)?;
        self.flash_attention_search(&query, self.config.attention.block_size, limit)
    }

    /// MMR over the corpus; `lambda` falls back to the configured default.
    pub fn mmr_text(
        &self,
        text: &str,
        limit: usize,
        lambda: Option<f64>,
    ) -> SemrankResult<Vec<MmrHit>> {
        let query = self.embed_query(text)?;
        self.mmr_search(&query, limit, lambda.unwrap_or(self.config.diversity.lambda))
    }

    /// Self-attention with the configured head count and temperature.
    pub fn configured_self_attention(
        &self,
        source_ids: &[String],
    ) -> SemrankResult<Vec<AttentionEdge>> {
        let attention = &self.config.attention;
        self.self_attention(source_ids, attention.head_count, attention.temperature)
    }
}

impl std::fmt::Debug for SemrankEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SemrankEngine")
            .field("model", &self.embedder.model_name())
            .field("dimensions", &self.config.corpus.dimensions)
            .field("ann_index", &self.ann.is_some())
            .finish()
    }
}
