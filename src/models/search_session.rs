use crate::constants::DEFAULT_SCORING_WEIGHTS;
use crate::models::{
    select_top_k, SchoolIndex, ScoredResult, Scorer, ScoringWeights, Tokenizer,
};
use crate::types::SchoolRecord;

/// Serves queries against one immutable dataset load: tokenizes the query,
/// scores every index entry, and returns the ordered top results.
///
/// The index is built once and only read afterward, so a session can answer
/// any number of sequential queries without shared mutable state.
pub struct SearchSession {
    index: SchoolIndex,
    scorer: Scorer,
    query_tokenizer: Tokenizer,
}

impl SearchSession {
    pub fn new(index: SchoolIndex) -> Self {
        Self::with_weights(index, DEFAULT_SCORING_WEIGHTS)
    }

    pub fn with_weights(index: SchoolIndex, weights: ScoringWeights) -> Self {
        Self {
            index,
            scorer: Scorer::new(weights),
            query_tokenizer: Tokenizer::query_parser(),
        }
    }

    /// Returns up to `k` results, descending by score, earlier records first
    /// among equal scores. Zero-scored results are not filtered here; the
    /// presentation layer decides where to stop emitting.
    pub fn search(&self, query: &str, k: usize) -> Vec<ScoredResult> {
        let query_tokens = self.query_tokenizer.tokenize(query);
        select_top_k(&self.scorer, self.index.entries(), &query_tokens, k)
    }

    /// Resolves a result back to the record it ranks.
    pub fn record(&self, result: &ScoredResult) -> &SchoolRecord {
        self.index.record(result.record_position)
    }

    pub fn index(&self) -> &SchoolIndex {
        &self.index
    }
}
