use std::fs;
use std::path::Path;

use csv::ReaderBuilder;
use encoding_rs::WINDOWS_1252;
use log::info;

use crate::models::Error;
use crate::types::SchoolRecord;

pub struct SchoolRecordLoader {}

impl SchoolRecordLoader {
    /// Reads the NCES directory CSV from disk into one record per row.
    ///
    /// The published file is encoded Windows-1252, not UTF-8, so fields are
    /// decoded from raw byte records.
    pub fn read_records_from_path(path: &Path) -> Result<Vec<SchoolRecord>, Error> {
        let bytes = fs::read(path)?;
        let records = Self::read_records_from_bytes(&bytes)?;

        info!("Loaded {} records from {}", records.len(), path.display());

        Ok(records)
    }

    pub fn read_records_from_bytes(bytes: &[u8]) -> Result<Vec<SchoolRecord>, Error> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(bytes);

        // Extract column headers
        let headers: Vec<String> = reader
            .byte_headers()
            .map_err(|e| Error::LoaderError(format!("Failed to read headers: {}", e)))?
            .iter()
            .map(decode_field)
            .collect();

        let mut records = Vec::new();

        for (line, byte_record) in reader.byte_records().enumerate() {
            let byte_record = byte_record.map_err(|e| {
                Error::LoaderError(format!("Failed to read record #{}: {}", line, e))
            })?;

            // A row with the wrong number of columns cannot be mapped onto
            // the header schema; surface it here rather than indexing short.
            if byte_record.len() != headers.len() {
                return Err(Error::LoaderError(format!(
                    "Record #{} has {} columns where the schema has {}",
                    line,
                    byte_record.len(),
                    headers.len()
                )));
            }

            let record: SchoolRecord = headers
                .iter()
                .cloned()
                .zip(byte_record.iter().map(decode_field))
                .collect();

            records.push(record);
        }

        Ok(records)
    }
}

fn decode_field(bytes: &[u8]) -> String {
    let (decoded, _, _) = WINDOWS_1252.decode(bytes);
    decoded.into_owned()
}
