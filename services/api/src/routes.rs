use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use outreach_ai::error::AppError;
use outreach_ai::workflows::catalog::CatalogImporter;
use outreach_ai::workflows::outreach::domain::{Formation, Prospect, Template};
use outreach_ai::workflows::outreach::report::views::CoverageSummary;
use outreach_ai::workflows::outreach::report::OutreachCoverage;
use outreach_ai::workflows::outreach::{
    RecommendationEngine, RecommendationRequest, ScriptRecommendation,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::io::Cursor;

#[derive(Debug, Serialize)]
pub(crate) struct RecommendationsResponse {
    pub(crate) company_name: String,
    pub(crate) recommendations: Vec<ScriptRecommendation>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CoverageRequest {
    #[serde(default)]
    pub(crate) prospects: Vec<Prospect>,
    #[serde(default)]
    pub(crate) prospects_csv: Option<String>,
    #[serde(default)]
    pub(crate) formations: Vec<Formation>,
    #[serde(default)]
    pub(crate) templates: Vec<Template>,
    #[serde(default)]
    pub(crate) top: Option<usize>,
}

#[derive(Debug, Serialize)]
pub(crate) struct CoverageResponse {
    pub(crate) data_source: ProspectDataSource,
    pub(crate) summary: CoverageSummary,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub(crate) enum ProspectDataSource {
    Csv,
    Inline,
}

pub(crate) fn with_outreach_routes() -> axum::Router {
    axum::Router::new()
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
        .route(
            "/api/v1/outreach/recommendations",
            axum::routing::post(recommendations_endpoint),
        )
        .route(
            "/api/v1/outreach/coverage",
            axum::routing::post(coverage_endpoint),
        )
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

pub(crate) async fn recommendations_endpoint(
    Extension(state): Extension<AppState>,
    Json(payload): Json<RecommendationRequest>,
) -> Json<RecommendationsResponse> {
    Json(recommend_response(
        &state.engine,
        state.default_top,
        payload,
    ))
}

pub(crate) async fn coverage_endpoint(
    Extension(state): Extension<AppState>,
    Json(payload): Json<CoverageRequest>,
) -> Result<Json<CoverageResponse>, AppError> {
    coverage_response(&state.engine, state.default_top, payload).map(Json)
}

fn recommend_response(
    engine: &RecommendationEngine,
    default_top: usize,
    mut payload: RecommendationRequest,
) -> RecommendationsResponse {
    payload.top = payload.top.or(Some(default_top));
    let recommendations = engine.recommend(&payload);

    RecommendationsResponse {
        company_name: payload.prospect.company_name,
        recommendations,
    }
}

fn coverage_response(
    engine: &RecommendationEngine,
    default_top: usize,
    payload: CoverageRequest,
) -> Result<CoverageResponse, AppError> {
    let CoverageRequest {
        prospects,
        prospects_csv,
        formations,
        templates,
        top,
    } = payload;

    let (prospects, data_source) = if let Some(csv) = prospects_csv {
        let imported = CatalogImporter::prospects_from_reader(Cursor::new(csv.into_bytes()))?;
        (imported, ProspectDataSource::Csv)
    } else {
        (prospects, ProspectDataSource::Inline)
    };

    let top = top.or(Some(default_top));
    let coverage = OutreachCoverage::compute(engine, &prospects, &formations, &templates, top);

    Ok(CoverageResponse {
        data_source,
        summary: coverage.summary(),
    })
}
