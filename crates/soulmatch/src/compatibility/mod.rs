//! Questionnaire compatibility scoring.
//!
//! Scoring is directional: the first answer set decides which questions are
//! compared and which reason phrases are offered, so swapping the arguments
//! can change the result.

pub mod reasons;
mod rules;
pub mod weights;

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};

use crate::questionnaire::QuestionnaireAnswers;
use rules::{distinct_reasons, percentage, score_answers};

/// Thresholds applied when turning per-question weights into a result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringPolicy {
    /// Minimum pairwise weight for a question to contribute a reason phrase.
    pub reason_threshold: f64,
    pub max_reasons: usize,
}

impl Default for ScoringPolicy {
    fn default() -> Self {
        Self {
            reason_threshold: 0.8,
            max_reasons: 3,
        }
    }
}

/// Score plus the phrases explaining it, as persisted on a match record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompatibilityResult {
    pub score: u8,
    pub reasons: Vec<String>,
}

/// Contribution of one question, kept for audits and debugging.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionScore {
    pub question: String,
    pub answer: String,
    pub other_answer: Option<String>,
    pub weight: f64,
    pub shared: bool,
}

/// Result together with the per-question trail that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompatibilityBreakdown {
    pub result: CompatibilityResult,
    pub compared_questions: u32,
    pub components: Vec<QuestionScore>,
}

/// Stateless scorer applying a [`ScoringPolicy`] to pairs of answer sets.
#[derive(Debug, Clone, Default)]
pub struct CompatibilityEngine {
    policy: ScoringPolicy,
}

impl CompatibilityEngine {
    pub fn new(policy: ScoringPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &ScoringPolicy {
        &self.policy
    }

    pub fn evaluate(
        &self,
        first: &QuestionnaireAnswers,
        second: &QuestionnaireAnswers,
    ) -> CompatibilityBreakdown {
        let (components, tally) = score_answers(first, second, &self.policy);

        let result = CompatibilityResult {
            score: percentage(tally.total, tally.max_possible),
            reasons: distinct_reasons(tally.reasons, self.policy.max_reasons),
        };

        CompatibilityBreakdown {
            result,
            compared_questions: tally.max_possible,
            components,
        }
    }

    pub fn score(
        &self,
        first: &QuestionnaireAnswers,
        second: &QuestionnaireAnswers,
    ) -> CompatibilityResult {
        self.evaluate(first, second).result
    }
}

/// Compatibility of `first` towards `second` under the default policy.
///
/// Returns a score of 0 with no reasons when none of `first`'s questions can
/// be compared.
pub fn calculate_compatibility(
    first: &QuestionnaireAnswers,
    second: &QuestionnaireAnswers,
) -> CompatibilityResult {
    CompatibilityEngine::default().score(first, second)
}
