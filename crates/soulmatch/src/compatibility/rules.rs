use super::reasons::reason_for;
use super::weights::answer_weights;
use super::{QuestionScore, ScoringPolicy};
use crate::questionnaire::QuestionnaireAnswers;

pub(crate) struct ScoreTally {
    pub total: f64,
    pub max_possible: u32,
    pub reasons: Vec<String>,
}

/// Walk the first user's answers in order and accumulate per-question weights.
///
/// Questions the table does not know, and answers without a similarity row,
/// are left out of both the total and the denominator.
pub(crate) fn score_answers(
    first: &QuestionnaireAnswers,
    second: &QuestionnaireAnswers,
    policy: &ScoringPolicy,
) -> (Vec<QuestionScore>, ScoreTally) {
    let mut components = Vec::new();
    let mut tally = ScoreTally {
        total: 0.0,
        max_possible: 0,
        reasons: Vec::new(),
    };

    for (question, answer) in first.iter() {
        let Some(row) = answer_weights(question, answer) else {
            continue;
        };

        let other = second.get(question);
        let weight = other.map(|other| row.weight_to(other)).unwrap_or(0.0);
        tally.total += weight;
        tally.max_possible += 1;

        let shared = weight >= policy.reason_threshold;
        if shared {
            tally.reasons.push(reason_for(question, answer).to_string());
        }

        components.push(QuestionScore {
            question: question.to_string(),
            answer: answer.to_string(),
            other_answer: other.map(str::to_string),
            weight,
            shared,
        });
    }

    (components, tally)
}

/// Rounded percentage of achieved over possible weight; zero when nothing was comparable.
pub(crate) fn percentage(total: f64, max_possible: u32) -> u8 {
    if max_possible == 0 {
        return 0;
    }
    let pct = (total / f64::from(max_possible) * 100.0).round();
    pct.clamp(0.0, 100.0) as u8
}

/// First occurrence wins; at most `limit` phrases survive.
pub(crate) fn distinct_reasons(reasons: Vec<String>, limit: usize) -> Vec<String> {
    let mut unique: Vec<String> = Vec::with_capacity(limit.min(reasons.len()));
    for reason in reasons {
        if unique.len() == limit {
            break;
        }
        if !unique.contains(&reason) {
            unique.push(reason);
        }
    }
    unique
}
