use serde::{Deserialize, Serialize};

use crate::compatibility::CompatibilityResult;
use crate::questionnaire::QuestionnaireAnswers;

/// Identifier wrapper for registered users.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub String);

/// A user eligible to be proposed, with their completed questionnaire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    pub user_id: UserId,
    pub answers: QuestionnaireAnswers,
}

/// Candidate scored against the requesting user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedCandidate {
    pub user_id: UserId,
    pub compatibility: CompatibilityResult,
}

/// Lifecycle of a proposed match as tracked by the matching service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStatus {
    Pending,
    Accepted,
    Rejected,
}

impl MatchStatus {
    pub fn label(&self) -> &'static str {
        match self {
            MatchStatus::Pending => "pending",
            MatchStatus::Accepted => "accepted",
            MatchStatus::Rejected => "rejected",
        }
    }
}

/// Match as handed to persistence: who, how compatible, why, and for which week.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRecord {
    pub user_id: UserId,
    pub matched_user_id: UserId,
    pub compatibility_score: u8,
    pub match_reason: Vec<String>,
    pub status: MatchStatus,
    pub week_start: String,
}

impl MatchRecord {
    pub fn pending(user_id: UserId, ranked: RankedCandidate, week_start: impl Into<String>) -> Self {
        Self {
            user_id,
            matched_user_id: ranked.user_id,
            compatibility_score: ranked.compatibility.score,
            match_reason: ranked.compatibility.reasons,
            status: MatchStatus::Pending,
            week_start: week_start.into(),
        }
    }
}
