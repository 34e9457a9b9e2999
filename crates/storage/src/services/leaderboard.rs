//! Leaderboard aggregation over stored submissions.
//!
//! Append-only semantics: the aggregate is recomputed from the stored rows
//! on every read, so past submissions are never edited in place and the
//! board stays re-auditable.

use std::collections::HashMap;

use crate::models::{LeaderboardEntry, StoredSubmission};

/// Rank the best submission per participant for one round's rows.
///
/// Higher score wins; an earlier submission breaks ties, both within one
/// participant's attempts and between participants.
pub fn compute(rows: &[StoredSubmission]) -> Vec<LeaderboardEntry> {
    let mut best: HashMap<&str, &StoredSubmission> = HashMap::new();
    for row in rows {
        best.entry(row.participant.as_str())
            .and_modify(|current| {
                if (row.score, std::cmp::Reverse(row.submitted_at))
                    > (current.score, std::cmp::Reverse(current.submitted_at))
                {
                    *current = row;
                }
            })
            .or_insert(row);
    }

    let mut ranked: Vec<&StoredSubmission> = best.into_values().collect();
    ranked.sort_by(|a, b| {
        b.score
            .cmp(&a.score)
            .then(a.submitted_at.cmp(&b.submitted_at))
            .then(a.participant.cmp(&b.participant))
    });

    ranked
        .into_iter()
        .enumerate()
        .map(|(i, row)| LeaderboardEntry {
            rank: i as u32 + 1,
            participant: row.participant.clone(),
            scenario: row.scenario.clone(),
            score: row.score,
            max_score: row.max_score,
            submitted_at: row.submitted_at,
        })
        .collect()
}
