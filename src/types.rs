use std::collections::{HashMap, HashSet};

// Types listed here are either shared across multiple files and/or exposed via the library.

/// Represents a token as an owned `String`. Tokens are the basic units used for matching.
pub type Token = String;

/// The distinct tokens produced by one tokenization pass. Scoring measures set
/// containment and counts of distinct matched keywords, never frequency, so
/// duplicates collapse at this level.
pub type TokenSet = HashSet<Token>;

/// One row of the school dataset: a mapping from column name to raw string value.
/// Every record of a load shares the same header schema.
pub type SchoolRecord = HashMap<String, String>;

/// The zero-based position of a record within the loaded dataset. Used to
/// resolve an index entry back to its record, and as the tie-break key when
/// two results carry equal scores.
pub type RecordPosition = usize;
