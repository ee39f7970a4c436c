use std::collections::{HashMap, HashSet};

use crate::constants::{CITY_COLUMN, LOCALE_COLUMN, SCHOOL_NAME_COLUMN, STATE_COLUMN};
use crate::models::Error;
use crate::types::SchoolRecord;

/// Aggregate counts over one dataset load, the reporting companion to search.
///
/// Every figure counts distinct school names, not rows: a school listed on
/// several rows of a group contributes once to that group.
pub struct DirectorySummary {
    pub total_schools: usize,
    pub schools_per_state: HashMap<String, usize>,
    pub schools_per_locale: HashMap<String, usize>,
    pub schools_per_city: HashMap<String, usize>,
}

impl DirectorySummary {
    pub fn from_records(records: &[SchoolRecord]) -> Result<Self, Error> {
        let mut distinct_schools = HashSet::new();
        for record in records {
            distinct_schools.insert(school_name(record)?);
        }

        Ok(Self {
            total_schools: distinct_schools.len(),
            schools_per_state: count_by_column(records, STATE_COLUMN)?,
            schools_per_locale: count_by_column(records, LOCALE_COLUMN)?,
            schools_per_city: count_by_column(records, CITY_COLUMN)?,
        })
    }

    /// The city holding the most schools, with its count. Ties go to the
    /// lexicographically smaller city name so output stays deterministic.
    pub fn city_with_most_schools(&self) -> Option<(&str, usize)> {
        self.schools_per_city
            .iter()
            .max_by(|a, b| a.1.cmp(b.1).then_with(|| b.0.cmp(a.0)))
            .map(|(city, count)| (city.as_str(), *count))
    }

    pub fn distinct_city_count(&self) -> usize {
        self.schools_per_city.len()
    }
}

/// Counts the distinct school names per value of one column. Unknown columns
/// are a caller error, reported rather than treated as zero.
pub fn count_by_column(
    records: &[SchoolRecord],
    column: &str,
) -> Result<HashMap<String, usize>, Error> {
    let mut distinct_schools: HashMap<String, HashSet<&str>> = HashMap::new();

    for record in records {
        let value = record
            .get(column)
            .ok_or_else(|| Error::MissingColumn(column.to_string()))?;

        distinct_schools
            .entry(value.clone())
            .or_default()
            .insert(school_name(record)?);
    }

    Ok(distinct_schools
        .into_iter()
        .map(|(value, schools)| (value, schools.len()))
        .collect())
}

fn school_name(record: &SchoolRecord) -> Result<&str, Error> {
    record
        .get(SCHOOL_NAME_COLUMN)
        .map(String::as_str)
        .ok_or_else(|| Error::MissingColumn(SCHOOL_NAME_COLUMN.to_string()))
}
