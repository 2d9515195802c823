//! Questionnaire answers as submitted by users, plus the optional strict
//! validation applied at the service boundary before scoring.

pub mod domain;

pub use domain::{QuestionId, QuestionnaireAnswers};

use crate::compatibility::weights::weights_for;

/// Rejection raised when an answer set is not a complete, recognized questionnaire.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QuestionnaireError {
    #[error("missing answer for {0}")]
    MissingAnswer(QuestionId),
    #[error("unknown question key '{0}'")]
    UnknownQuestion(String),
    #[error("answer '{answer}' is not an option for {question}")]
    UnknownAnswer { question: QuestionId, answer: String },
}

/// Recognized answer codes for a question, in questionnaire order.
pub fn answer_codes(question: QuestionId) -> Vec<&'static str> {
    weights_for(question.key())
        .map(|rows| rows.iter().map(|row| row.answer).collect())
        .unwrap_or_default()
}

/// Check that every question is answered with a recognized code and that no
/// foreign keys are present. Scoring never requires this.
pub fn validate(answers: &QuestionnaireAnswers) -> Result<(), QuestionnaireError> {
    if let Some(unknown) = answers.keys().find(|key| QuestionId::parse(key).is_none()) {
        return Err(QuestionnaireError::UnknownQuestion(unknown.to_string()));
    }

    for question in QuestionId::ordered() {
        let answer = answers
            .answer(question)
            .ok_or(QuestionnaireError::MissingAnswer(question))?;
        if !answer_codes(question).iter().any(|code| *code == answer) {
            return Err(QuestionnaireError::UnknownAnswer {
                question,
                answer: answer.to_string(),
            });
        }
    }

    Ok(())
}
