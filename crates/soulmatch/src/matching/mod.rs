//! Ranking a pool of candidates for one user and shaping the resulting match
//! records. Quota bookkeeping and persistence live with the caller.

pub mod domain;

pub use domain::{Candidate, MatchRecord, MatchStatus, RankedCandidate, UserId};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::compatibility::CompatibilityEngine;
use crate::questionnaire::QuestionnaireAnswers;

/// Limits applied when selecting candidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankingOptions {
    pub limit: usize,
    pub min_score: u8,
}

impl Default for RankingOptions {
    fn default() -> Self {
        Self {
            limit: 3,
            min_score: 0,
        }
    }
}

/// Score every candidate against `answers`, best first.
///
/// The requesting user's answers drive each comparison. Equal scores are
/// ordered by user id so repeated runs propose the same people.
pub fn rank_candidates<'a>(
    engine: &CompatibilityEngine,
    answers: &QuestionnaireAnswers,
    candidates: impl IntoIterator<Item = &'a Candidate>,
    options: RankingOptions,
) -> Vec<RankedCandidate> {
    let mut pool = 0usize;
    let mut ranked: Vec<RankedCandidate> = candidates
        .into_iter()
        .inspect(|_| pool += 1)
        .map(|candidate| RankedCandidate {
            user_id: candidate.user_id.clone(),
            compatibility: engine.score(answers, &candidate.answers),
        })
        .filter(|ranked| ranked.compatibility.score >= options.min_score)
        .collect();

    ranked.sort_by(|left, right| {
        right
            .compatibility
            .score
            .cmp(&left.compatibility.score)
            .then_with(|| left.user_id.cmp(&right.user_id))
    });
    ranked.truncate(options.limit);

    debug!(
        pool,
        selected = ranked.len(),
        top_score = ranked.first().map(|ranked| ranked.compatibility.score),
        "ranked match candidates"
    );

    ranked
}

/// Pending match records for the best candidates of the given week. The
/// requesting user is never proposed to themselves.
pub fn propose_matches(
    engine: &CompatibilityEngine,
    user_id: &UserId,
    answers: &QuestionnaireAnswers,
    candidates: &[Candidate],
    options: RankingOptions,
    week_start: &str,
) -> Vec<MatchRecord> {
    let others = candidates
        .iter()
        .filter(|candidate| candidate.user_id != *user_id);

    rank_candidates(engine, answers, others, options)
        .into_iter()
        .map(|ranked| MatchRecord::pending(user_id.clone(), ranked, week_start))
        .collect()
}
