use crate::infra::{AppState, IntakeState};
use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use cabinet_offer::error::AppError;
use cabinet_offer::workflows::intake::{
    render_proposal, rule_guide, CatalogEntry, IntakeEvaluation, ProfileSubmission,
    RuleExplanation,
};
use chrono::Local;
use serde_json::json;
use tracing::{debug, warn};

/// Intake endpoints plus the operational probes.
pub(crate) fn with_intake_routes(state: IntakeState) -> Router {
    intake_router(state)
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
}

pub(crate) fn intake_router(state: IntakeState) -> Router {
    Router::new()
        .route("/api/v1/intake/evaluate", post(evaluate_endpoint))
        .route("/api/v1/intake/proposal", post(proposal_endpoint))
        .route("/api/v1/intake/export", post(export_endpoint))
        .route("/api/v1/catalog", get(catalog_endpoint))
        .route("/api/v1/rules", get(rules_endpoint))
        .with_state(state)
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

fn evaluate_submission(
    state: &IntakeState,
    submission: ProfileSubmission,
) -> Result<IntakeEvaluation, AppError> {
    let profile = state
        .guard
        .profile_from_submission(submission)
        .map_err(|violation| {
            warn!(error = %violation, "intake submission rejected");
            violation
        })?;

    let evaluation = IntakeEvaluation::evaluate(profile, &state.catalog);
    debug!(
        client = %evaluation.profile.client_name,
        segment = %evaluation.segment.segment,
        risk_flags = evaluation.segment.risk_flags.len(),
        offers = evaluation.offers.offers.len(),
        total_ht = evaluation.offers.total_ht,
        "intake evaluated"
    );
    Ok(evaluation)
}

pub(crate) async fn evaluate_endpoint(
    State(state): State<IntakeState>,
    Json(submission): Json<ProfileSubmission>,
) -> Result<Json<IntakeEvaluation>, AppError> {
    evaluate_submission(&state, submission).map(Json)
}

pub(crate) async fn proposal_endpoint(
    State(state): State<IntakeState>,
    Json(submission): Json<ProfileSubmission>,
) -> Result<impl IntoResponse, AppError> {
    let evaluation = evaluate_submission(&state, submission)?;
    let document = render_proposal(
        &evaluation.profile,
        &evaluation.segment,
        &evaluation.offers,
        Local::now().date_naive(),
    );

    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/markdown; charset=utf-8")],
        document,
    ))
}

pub(crate) async fn export_endpoint(
    State(state): State<IntakeState>,
    Json(submission): Json<ProfileSubmission>,
) -> Result<impl IntoResponse, AppError> {
    let evaluation = evaluate_submission(&state, submission)?;
    let path = state.exporter.export(
        &evaluation.profile,
        &evaluation.segment,
        &evaluation.offers,
        Local::now().date_naive(),
    )?;

    Ok((
        StatusCode::CREATED,
        Json(json!({ "path": path.display().to_string() })),
    ))
}

pub(crate) async fn catalog_endpoint(State(state): State<IntakeState>) -> Json<Vec<CatalogEntry>> {
    Json(state.catalog.entries().to_vec())
}

pub(crate) async fn rules_endpoint() -> Json<&'static [RuleExplanation]> {
    Json(rule_guide())
}
