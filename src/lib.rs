mod constants;
pub mod models;
pub mod types;
mod utils;

pub use constants::{
    CITY_COLUMN, DEFAULT_RESULT_LIMIT, DEFAULT_SCORING_WEIGHTS, LOCALE_COLUMN,
    PUNCTUATION_CHARS, SCHOOL_NAME_COLUMN, STATE_ABBREVIATIONS, STATE_COLUMN, STOP_WORDS,
};
pub use models::{
    count_by_column, select_top_k, DirectorySummary, Error, IndexEntry, SchoolIndex,
    SchoolRecordLoader, ScoredResult, Scorer, ScoringWeights, SearchSession, Tokenizer,
};
pub use types::{RecordPosition, SchoolRecord, Token, TokenSet};

/// Ranks the indexed schools against a free-text query with the default
/// scoring weights, returning at most `k` results in descending relevance
/// order.
pub fn search_schools(index: &SchoolIndex, query: &str, k: usize) -> Vec<ScoredResult> {
    search_schools_with_custom_weights(index, query, DEFAULT_SCORING_WEIGHTS, k)
}

pub fn search_schools_with_custom_weights(
    index: &SchoolIndex,
    query: &str,
    weights: ScoringWeights,
    k: usize,
) -> Vec<ScoredResult> {
    let query_tokens = Tokenizer::query_parser().tokenize(query);
    let scorer = Scorer::new(weights);

    select_top_k(&scorer, index.entries(), &query_tokens, k)
}
