use crate::infra::{ApiState, AppState};
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use serde::{Deserialize, Serialize};
use serde_json::json;
use soulmatch::compatibility::QuestionScore;
use soulmatch::error::AppError;
use soulmatch::matching::{propose_matches, Candidate, MatchRecord, UserId};
use soulmatch::questionnaire::{validate, QuestionnaireAnswers};
use soulmatch::week::week_start;
use tracing::{info, warn};

#[derive(Debug, Deserialize)]
pub(crate) struct CompatibilityRequest {
    pub(crate) answers_a: QuestionnaireAnswers,
    pub(crate) answers_b: QuestionnaireAnswers,
    #[serde(default)]
    pub(crate) validate: bool,
}

#[derive(Debug, Serialize)]
pub(crate) struct CompatibilityResponse {
    pub(crate) score: u8,
    pub(crate) reasons: Vec<String>,
    pub(crate) compared_questions: u32,
    pub(crate) breakdown: Vec<QuestionScore>,
}

#[derive(Debug, Serialize)]
pub(crate) struct WeekStartResponse {
    pub(crate) week_start: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RankRequest {
    pub(crate) user_id: UserId,
    pub(crate) answers: QuestionnaireAnswers,
    pub(crate) candidates: Vec<Candidate>,
    #[serde(default)]
    pub(crate) limit: Option<usize>,
    #[serde(default)]
    pub(crate) validate: bool,
}

#[derive(Debug, Serialize)]
pub(crate) struct RankResponse {
    pub(crate) week_start: String,
    pub(crate) matches: Vec<MatchRecord>,
}

pub(crate) fn router(state: ApiState) -> Router {
    Router::new()
        .route("/api/v1/compatibility", post(compatibility_endpoint))
        .route("/api/v1/week-start", get(week_start_endpoint))
        .route("/api/v1/matches/rank", post(rank_endpoint))
        .with_state(state)
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn compatibility_endpoint(
    State(state): State<ApiState>,
    payload: Result<Json<CompatibilityRequest>, JsonRejection>,
) -> Result<Json<CompatibilityResponse>, AppError> {
    let Json(payload) = payload?;
    let CompatibilityRequest {
        answers_a,
        answers_b,
        validate: strict,
    } = payload;

    if strict {
        validate(&answers_a)?;
        validate(&answers_b)?;
    }

    let breakdown = state.engine.evaluate(&answers_a, &answers_b);

    Ok(Json(CompatibilityResponse {
        score: breakdown.result.score,
        reasons: breakdown.result.reasons,
        compared_questions: breakdown.compared_questions,
        breakdown: breakdown.components,
    }))
}

pub(crate) async fn week_start_endpoint() -> Json<WeekStartResponse> {
    Json(WeekStartResponse {
        week_start: week_start(),
    })
}

pub(crate) async fn rank_endpoint(
    State(state): State<ApiState>,
    payload: Result<Json<RankRequest>, JsonRejection>,
) -> Result<Json<RankResponse>, AppError> {
    let Json(payload) = payload?;
    let RankRequest {
        user_id,
        answers,
        candidates,
        limit,
        validate: strict,
    } = payload;

    if strict {
        validate(&answers)?;
        for candidate in &candidates {
            validate(&candidate.answers).inspect_err(|err| {
                warn!(candidate = %candidate.user_id.0, %err, "rejected candidate answers");
            })?;
        }
    }

    let mut options = state.matching.ranking_options();
    if let Some(limit) = limit {
        options.limit = limit.min(options.limit);
    }

    let week_start = week_start();
    let matches = propose_matches(
        &state.engine,
        &user_id,
        &answers,
        &candidates,
        options,
        &week_start,
    );

    info!(
        user = %user_id.0,
        pool = candidates.len(),
        proposed = matches.len(),
        %week_start,
        "proposed weekly matches"
    );

    Ok(Json(RankResponse {
        week_start,
        matches,
    }))
}
