use chrono::{DateTime, FixedOffset};
use metrics_exporter_prometheus::PrometheusHandle;
use soulmatch::compatibility::CompatibilityEngine;
use soulmatch::config::MatchingConfig;
use soulmatch::error::AppError;
use soulmatch::questionnaire::QuestionnaireAnswers;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Shared, read-only state for the scoring endpoints.
#[derive(Clone)]
pub(crate) struct ApiState {
    pub(crate) engine: Arc<CompatibilityEngine>,
    pub(crate) matching: MatchingConfig,
}

impl ApiState {
    pub(crate) fn new(matching: MatchingConfig) -> Self {
        Self {
            engine: Arc::new(CompatibilityEngine::default()),
            matching,
        }
    }
}

pub(crate) fn parse_instant(raw: &str) -> Result<DateTime<FixedOffset>, String> {
    DateTime::parse_from_rfc3339(raw.trim())
        .map_err(|err| format!("failed to parse '{raw}' as an RFC 3339 timestamp ({err})"))
}

/// Decode answers given inline as JSON, or from a file when prefixed with `@`.
pub(crate) fn load_answers(raw: &str) -> Result<QuestionnaireAnswers, AppError> {
    let json = match raw.strip_prefix('@') {
        Some(path) => std::fs::read_to_string(path)?,
        None => raw.to_string(),
    };
    Ok(serde_json::from_str(&json)?)
}
