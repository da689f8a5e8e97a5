//! Subsequence alignment scoring
//!
//! Aligns every query character, in order, to distinct positions in a field
//! value (case-insensitively) and scores the best alignment: a reward per
//! matched character, a penalty per skipped character between consecutive
//! matches, a bonus for landing on the field start or just after a word
//! boundary, and a bonus for consecutive runs. `None` means no alignment
//! exists and the field does not match.
//!
//! The exact constants are a tuning choice; what matters is the ordering
//! they produce: an exact, contiguous, start-of-field match scores highest,
//! word-starting matches outrank mid-word ones, contiguous runs outrank
//! scattered ones.

/// Reward per matched query character.
pub const SCORE_MATCH: i64 = 4;
/// Bonus when the first matched character is the field's first character.
pub const BONUS_FIELD_START: i64 = 16;
/// Bonus when a matched character follows a non-alphanumeric character.
pub const BONUS_BOUNDARY: i64 = 8;
/// Bonus when adjacent query characters align to adjacent field characters.
pub const BONUS_CONSECUTIVE: i64 = 8;
/// Penalty per field character skipped between two consecutive matches.
pub const PENALTY_GAP: i64 = 1;

const NEG_INF: i64 = i64::MIN / 4;

/// Case-insensitive character comparison. Multi-character lowercase
/// expansions are compared in full and simply fail to match on length.
fn chars_eq_fold(a: char, b: char) -> bool {
    a == b || a.to_lowercase().eq(b.to_lowercase())
}

/// Positional bonus for a match landing on index `j` of the field.
fn position_bonus(value: &[char], j: usize) -> i64 {
    if j == 0 {
        BONUS_FIELD_START
    } else if !value[j - 1].is_alphanumeric() {
        BONUS_BOUNDARY
    } else {
        0
    }
}

/// Score `query` against `value`, maximizing over all valid alignments.
///
/// Returns `None` when `query` is not a case-insensitive subsequence of
/// `value` (or either side is empty). Never fails for well-formed strings.
pub fn subsequence_score(query: &str, value: &str) -> Option<i64> {
    let q: Vec<char> = query.chars().collect();
    let v: Vec<char> = value.chars().collect();

    if q.is_empty() || v.is_empty() || q.len() > v.len() {
        return None;
    }

    let n = v.len();

    // prev[j] = best score with q[i-1] matched exactly at v[j].
    let mut prev = vec![NEG_INF; n];
    let mut curr = vec![NEG_INF; n];

    for (j, &c) in v.iter().enumerate() {
        if chars_eq_fold(q[0], c) {
            // No charge for characters before the first match.
            prev[j] = SCORE_MATCH + position_bonus(&v, j);
        }
    }

    for &qc in &q[1..] {
        curr.fill(NEG_INF);

        // Gap transition: max over k < j of prev[k] - PENALTY_GAP*(j-k-1),
        // kept as a running maximum of prev[k] + PENALTY_GAP*(k+1).
        let mut best_prefix = NEG_INF;

        for j in 0..n {
            if j > 0 && prev[j - 1] != NEG_INF {
                best_prefix = best_prefix.max(prev[j - 1] + PENALTY_GAP * j as i64);
            }

            if !chars_eq_fold(qc, v[j]) {
                continue;
            }

            let mut best = NEG_INF;
            if best_prefix != NEG_INF {
                best = best_prefix - PENALTY_GAP * j as i64;
            }
            if j > 0 && prev[j - 1] != NEG_INF {
                best = best.max(prev[j - 1] + BONUS_CONSECUTIVE);
            }

            if best != NEG_INF {
                curr[j] = best + SCORE_MATCH + position_bonus(&v, j);
            }
        }

        std::mem::swap(&mut prev, &mut curr);
    }

    let best = prev.into_iter().max()?;
    (best > NEG_INF).then_some(best)
}
