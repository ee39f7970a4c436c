use crate::models::ScoringWeights;

/// Dataset column holding the school name (`SCHNAM05` in the NCES layout).
pub const SCHOOL_NAME_COLUMN: &str = "SCHNAM05";

/// Dataset column holding the location city name.
pub const CITY_COLUMN: &str = "LCITY05";

/// Dataset column holding the USPS state abbreviation.
pub const STATE_COLUMN: &str = "LSTATE05";

/// Dataset column holding the metro-centric locale code.
pub const LOCALE_COLUMN: &str = "MLOCALE";

/// Words so common in this domain that they would dominate every match and
/// therefore must not discriminate between records.
pub const STOP_WORDS: &[&str] = &["school", "academy", "institute"];

/// Characters replaced with a single space before tokenization. Any other
/// non-alphanumeric, non-whitespace character is dropped outright afterward.
pub const PUNCTUATION_CHARS: &[char] = &['.', ',', '-', '\'', '(', ')', '/', '&', '#', '"'];

// Multi-word names come first so that e.g. "west virginia" is consumed before
// the bare "virginia" entry can see it.
//
/// Long-form state names mapped to the USPS abbreviations the dataset stores.
/// Applied to query text only; users type full names, the data does not.
pub const STATE_ABBREVIATIONS: &[(&str, &str)] = &[
    ("district of columbia", "dc"),
    ("new hampshire", "nh"),
    ("new jersey", "nj"),
    ("new mexico", "nm"),
    ("new york", "ny"),
    ("north carolina", "nc"),
    ("north dakota", "nd"),
    ("rhode island", "ri"),
    ("south carolina", "sc"),
    ("south dakota", "sd"),
    ("west virginia", "wv"),
    ("alabama", "al"),
    ("alaska", "ak"),
    ("arizona", "az"),
    ("arkansas", "ar"),
    ("california", "ca"),
    ("colorado", "co"),
    ("connecticut", "ct"),
    ("delaware", "de"),
    ("florida", "fl"),
    ("georgia", "ga"),
    ("hawaii", "hi"),
    ("idaho", "id"),
    ("illinois", "il"),
    ("indiana", "in"),
    ("iowa", "ia"),
    ("kansas", "ks"),
    ("kentucky", "ky"),
    ("louisiana", "la"),
    ("maine", "me"),
    ("maryland", "md"),
    ("massachusetts", "ma"),
    ("michigan", "mi"),
    ("minnesota", "mn"),
    ("mississippi", "ms"),
    ("missouri", "mo"),
    ("montana", "mt"),
    ("nebraska", "ne"),
    ("nevada", "nv"),
    ("ohio", "oh"),
    ("oklahoma", "ok"),
    ("oregon", "or"),
    ("pennsylvania", "pa"),
    ("tennessee", "tn"),
    ("texas", "tx"),
    ("utah", "ut"),
    ("vermont", "vt"),
    ("virginia", "va"),
    ("washington", "wa"),
    ("wisconsin", "wi"),
    ("wyoming", "wy"),
];

/// Default number of results returned per query.
pub const DEFAULT_RESULT_LIMIT: usize = 3;

pub const DEFAULT_SCORING_WEIGHTS: ScoringWeights = ScoringWeights {
    exact_match: 0.5,
    partial_match: 0.3,
    city_match: 0.05,
    state_match: 0.01,
};
