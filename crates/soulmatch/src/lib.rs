//! Compatibility scoring for SoulMatch questionnaires, weekly partition keys,
//! and the ambient configuration, telemetry, and error types shared by the
//! service binaries.

pub mod compatibility;
pub mod config;
pub mod error;
pub mod matching;
pub mod questionnaire;
pub mod telemetry;
pub mod week;

pub use compatibility::{calculate_compatibility, CompatibilityEngine, CompatibilityResult};
pub use questionnaire::{QuestionId, QuestionnaireAnswers};
pub use week::week_start;
