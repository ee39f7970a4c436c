pub mod directory_summary;
pub use directory_summary::{count_by_column, DirectorySummary};

pub mod error;
pub use error::Error;

pub mod school_index;
pub use school_index::{IndexEntry, SchoolIndex};

pub mod school_record_loader;
pub use school_record_loader::SchoolRecordLoader;

pub mod scorer;
pub use scorer::{Scorer, ScoringWeights};

pub mod search_session;
pub use search_session::SearchSession;

pub mod tokenizer;
pub use tokenizer::Tokenizer;

pub mod top_k_selector;
pub use top_k_selector::{select_top_k, ScoredResult};
