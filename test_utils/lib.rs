use csv::Reader;
use school_search::{SchoolRecord, CITY_COLUMN, SCHOOL_NAME_COLUMN, STATE_COLUMN};
use std::error::Error;

/// Utility to load school records from a CSV file for testing and benchmarking.
pub fn load_schools_from_file(file_path: &str) -> Result<Vec<SchoolRecord>, Box<dyn Error>> {
    let mut reader = Reader::from_path(file_path)?;
    let headers = reader.headers()?.clone();

    let mut records = Vec::new();
    for record in reader.records() {
        let record = record?;
        let entry: SchoolRecord = headers
            .iter()
            .map(String::from)
            .zip(record.iter().map(String::from))
            .collect();
        records.push(entry);
    }

    Ok(records)
}

/// Builds an in-memory record from the three ranked fields, for tests that
/// do not need a fixture file.
pub fn school_record(name: &str, city: &str, state: &str) -> SchoolRecord {
    let mut record = SchoolRecord::new();
    record.insert(SCHOOL_NAME_COLUMN.to_string(), name.to_string());
    record.insert(CITY_COLUMN.to_string(), city.to_string());
    record.insert(STATE_COLUMN.to_string(), state.to_string());
    record
}
