use crate::compatibility::CompatibilityEngine;
use crate::questionnaire::{answer_codes, QuestionId, QuestionnaireAnswers};

pub(super) fn answers(pairs: &[(&str, &str)]) -> QuestionnaireAnswers {
    pairs.iter().copied().collect()
}

/// Complete questionnaire picking the `index`-th option of every question.
pub(super) fn uniform(index: usize) -> QuestionnaireAnswers {
    QuestionId::ordered()
        .into_iter()
        .map(|question| (question.key(), answer_codes(question)[index]))
        .collect()
}

pub(super) fn engine() -> CompatibilityEngine {
    CompatibilityEngine::default()
}
