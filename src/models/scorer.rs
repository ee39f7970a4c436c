use std::fmt;

use crate::models::IndexEntry;
use crate::types::TokenSet;

/// Weights for the four relevance sub-signals. They need not sum to 1, but
/// should be chosen so the maximum attainable score stays at or below 1 to
/// keep scores comparable across configurations.
#[derive(Debug, Clone, Copy)]
pub struct ScoringWeights {
    pub exact_match: f32,
    pub partial_match: f32,
    pub city_match: f32,
    pub state_match: f32,
}

impl fmt::Display for ScoringWeights {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ScoringWeights (\n\texact_match: {},\n\tpartial_match: {},\n\tcity_match: {},\n\tstate_match: {}\n)",
            self.exact_match, self.partial_match, self.city_match, self.state_match
        )
    }
}

pub struct Scorer {
    weights: ScoringWeights,
}

impl Scorer {
    pub fn new(weights: ScoringWeights) -> Self {
        Self { weights }
    }

    /// Combined relevance of one index entry for a query, in [0, 1].
    ///
    /// Full containment of the query within a single field is the strongest
    /// indicator; token overlap across all fields is a secondary broad
    /// signal; city and state fractions only nudge ties, since those fields
    /// repeat heavily across records. An empty query scores 0 everywhere;
    /// without the guard it would vacuously "contain" in every field.
    pub fn score(&self, entry: &IndexEntry, query_tokens: &TokenSet) -> f32 {
        if query_tokens.is_empty() {
            return 0.0;
        }

        self.weights.exact_match * exact_signal(entry, query_tokens)
            + self.weights.partial_match * partial_signal(entry, query_tokens)
            + self.weights.city_match * field_fraction(&entry.city_tokens, query_tokens)
            + self.weights.state_match * field_fraction(&entry.state_tokens, query_tokens)
    }
}

/// 1.0 when every query token falls within one single field's token set.
fn exact_signal(entry: &IndexEntry, query_tokens: &TokenSet) -> f32 {
    let contained = query_tokens.is_subset(&entry.name_tokens)
        || query_tokens.is_subset(&entry.city_tokens)
        || query_tokens.is_subset(&entry.state_tokens);

    if contained {
        1.0
    } else {
        0.0
    }
}

/// Fraction of query tokens found anywhere across the three ranked fields.
fn partial_signal(entry: &IndexEntry, query_tokens: &TokenSet) -> f32 {
    let matched = query_tokens
        .iter()
        .filter(|token| {
            entry.name_tokens.contains(*token)
                || entry.city_tokens.contains(*token)
                || entry.state_tokens.contains(*token)
        })
        .count();

    matched as f32 / query_tokens.len() as f32
}

fn field_fraction(field_tokens: &TokenSet, query_tokens: &TokenSet) -> f32 {
    let matched = query_tokens
        .iter()
        .filter(|token| field_tokens.contains(*token))
        .count();

    matched as f32 / query_tokens.len() as f32
}
