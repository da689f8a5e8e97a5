//! Ranking stage
//!
//! Scores every candidate against each configured field, keeps the best
//! per-record score, drops records below the threshold, sorts descending
//! (stable, so ties keep store order) and truncates to the result cap.

use super::score::subsequence_score;
use super::SearchOptions;
use crate::models::{Book, SearchField};
use tracing::debug;

/// Score of one field of one record against the query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldMatch {
    pub field: SearchField,
    pub score: i64,
}

/// A record paired with its best field match.
#[derive(Debug, Clone)]
pub struct ScoredBook {
    pub book: Book,
    pub best: FieldMatch,
}

/// Ordered search output: records in non-increasing score order, plus the
/// number of records that cleared the threshold before truncation.
#[derive(Debug, Clone)]
pub struct RankedResults {
    pub results: Vec<Book>,
    pub total_matches: usize,
}

/// Best match across a record's configured fields, or `None` when no field
/// aligns with the query.
fn best_field_match(query: &str, fields: &[SearchField], book: &Book) -> Option<FieldMatch> {
    let mut best: Option<FieldMatch> = None;
    for &field in fields {
        if let Some(score) = subsequence_score(query, book.field_text(field)) {
            if best.map_or(true, |b| score > b.score) {
                best = Some(FieldMatch { field, score });
            }
        }
    }
    best
}

/// Rank candidates by their best field score.
///
/// Scoring never fails: a record with no matching field contributes no
/// score and is dropped, and malformed (empty) fields score as no match.
pub fn rank_matches(
    query: &str,
    fields: &[SearchField],
    candidates: Vec<Book>,
    options: &SearchOptions,
) -> RankedResults {
    let mut scored: Vec<ScoredBook> = candidates
        .into_iter()
        .filter_map(|book| {
            best_field_match(query, fields, &book)
                .filter(|m| m.score >= options.score_threshold)
                .map(|best| ScoredBook { book, best })
        })
        .collect();

    let total_matches = scored.len();

    // Stable sort: ties preserve the order the store returned them in.
    scored.sort_by(|a, b| b.best.score.cmp(&a.best.score));
    scored.truncate(options.max_results);

    debug!(
        "ranked {} matches for query '{}', returning {}",
        total_matches,
        query,
        scored.len()
    );
    if let Some(top) = scored.first() {
        debug!(
            "top match '{}' on {} (score {})",
            top.book.title,
            top.best.field.as_str(),
            top.best.score
        );
    }

    RankedResults {
        results: scored.into_iter().map(|s| s.book).collect(),
        total_matches,
    }
}
