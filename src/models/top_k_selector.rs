use crate::models::{IndexEntry, Scorer};
use crate::types::{RecordPosition, TokenSet};

/// One ranked hit: the matching record's position and its relevance score.
/// Lives only for the duration of one query's ranking and display.
#[derive(Debug, Clone, Copy)]
pub struct ScoredResult {
    pub record_position: RecordPosition,
    pub score: f32,
}

/// Selects the `k` highest-scoring entries in a single pass, without sorting
/// the whole dataset and without scoring any entry twice.
///
/// A candidate buffer holds at most `k` scored entries. Once full, each new
/// score is compared against the buffer's left-most strictly-smallest slot
/// and replaces it when greater or equal, so among equal scores at the
/// eviction boundary the later entry wins. The final ordering is descending
/// by score with ties going to the earlier record position.
///
/// O(n * k); the linear re-scan per insertion beats a heap for the
/// single-digit `k` this engine serves.
pub fn select_top_k(
    scorer: &Scorer,
    entries: &[IndexEntry],
    query_tokens: &TokenSet,
    k: usize,
) -> Vec<ScoredResult> {
    if k == 0 {
        return Vec::new();
    }

    let mut candidates: Vec<ScoredResult> = Vec::with_capacity(k.min(entries.len()));

    for entry in entries {
        let result = ScoredResult {
            record_position: entry.record_position,
            score: scorer.score(entry, query_tokens),
        };

        if candidates.len() < k {
            candidates.push(result);
            continue;
        }

        let mut min_slot = 0;
        for (slot, candidate) in candidates.iter().enumerate().skip(1) {
            if candidate.score < candidates[min_slot].score {
                min_slot = slot;
            }
        }

        if result.score >= candidates[min_slot].score {
            candidates[min_slot] = result;
        }
    }

    candidates.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.record_position.cmp(&b.record_position))
    });

    candidates
}
