use crate::constants::{CITY_COLUMN, SCHOOL_NAME_COLUMN, STATE_COLUMN};
use crate::models::{Error, Tokenizer};
use crate::types::{RecordPosition, SchoolRecord, TokenSet};

/// Precomputed token sets for one record, one per ranked field. Built once at
/// load time and never mutated afterward.
pub struct IndexEntry {
    pub name_tokens: TokenSet,
    pub city_tokens: TokenSet,
    pub state_tokens: TokenSet,
    pub record_position: RecordPosition,
}

/// The read-only search index over one dataset load. Owns the records and the
/// derived entries; entries are stored in record order, which is also the
/// tie-break order for equal-scored results.
pub struct SchoolIndex {
    entries: Vec<IndexEntry>,
    records: Vec<SchoolRecord>,
}

impl SchoolIndex {
    /// Tokenizes every ranked field of every record in a single batch pass.
    ///
    /// A record lacking one of the ranked columns fails the whole build; the
    /// loader is expected to have produced schema-complete records.
    pub fn build(records: Vec<SchoolRecord>) -> Result<Self, Error> {
        let tokenizer = Tokenizer::field_parser();
        let mut entries = Vec::with_capacity(records.len());

        for (record_position, record) in records.iter().enumerate() {
            let name = ranked_field(record, SCHOOL_NAME_COLUMN)?;
            let city = ranked_field(record, CITY_COLUMN)?;
            let state = ranked_field(record, STATE_COLUMN)?;

            entries.push(IndexEntry {
                name_tokens: tokenizer.tokenize(name),
                city_tokens: tokenizer.tokenize(city),
                state_tokens: tokenizer.tokenize(state),
                record_position,
            });
        }

        Ok(Self { entries, records })
    }

    pub fn entries(&self) -> &[IndexEntry] {
        &self.entries
    }

    /// Resolves an entry's position back to its record. Positions held by
    /// entries are in bounds by construction.
    pub fn record(&self, position: RecordPosition) -> &SchoolRecord {
        &self.records[position]
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

fn ranked_field<'a>(record: &'a SchoolRecord, column: &str) -> Result<&'a str, Error> {
    record
        .get(column)
        .map(String::as_str)
        .ok_or_else(|| Error::MissingColumn(column.to_string()))
}
