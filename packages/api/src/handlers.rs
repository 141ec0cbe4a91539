use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use nyaya_assistant::nearby::{self as places, GeoLocation, Place, DEFAULT_SEARCH_LIMIT};
use nyaya_assistant::{
    AgreementRequest, AnalysisRequest, AnalysisResponse, AssistantError, CaseAnalysisRequest,
    CaseAnalysisResponse, ParsedResult,
};
use serde::{Deserialize, Serialize};

use crate::state::AppState;

pub const NEARBY_USAGE: &str = "Provide q or q+lat+lon";

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

type ApiError = (StatusCode, Json<ErrorBody>);

/// Model-call failures have no recovery path; report them as a bad gateway.
fn upstream_error(route: &'static str, e: AssistantError) -> ApiError {
    tracing::error!(route, error = %e, "model request failed");
    (
        StatusCode::BAD_GATEWAY,
        Json(ErrorBody {
            error: e.to_string(),
        }),
    )
}

pub async fn health() -> &'static str {
    "OK"
}

pub async fn analyze(
    State(state): State<AppState>,
    Json(request): Json<AnalysisRequest>,
) -> Result<Json<AnalysisResponse>, ApiError> {
    state
        .assistant
        .analyze(&request)
        .await
        .map(Json)
        .map_err(|e| upstream_error("analyze", e))
}

pub async fn agreement(
    State(state): State<AppState>,
    Json(request): Json<AgreementRequest>,
) -> Result<Json<ParsedResult>, ApiError> {
    state
        .assistant
        .analyze_agreement(&request)
        .await
        .map(Json)
        .map_err(|e| upstream_error("agreement", e))
}

pub async fn case_analysis(
    State(state): State<AppState>,
    Json(request): Json<CaseAnalysisRequest>,
) -> Result<Json<CaseAnalysisResponse>, ApiError> {
    state
        .assistant
        .analyze_case(&request)
        .await
        .map(Json)
        .map_err(|e| upstream_error("case-analysis", e))
}

// --- Nearby ---

#[derive(Deserialize)]
pub struct NearbyQuery {
    #[serde(default)]
    pub q: String,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    pub limit: Option<i64>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum NearbyResponse {
    Hits { hits: Vec<Place> },
    Geo { geo: GeoLocation },
    Error { error: String },
}

pub async fn nearby(Query(params): Query<NearbyQuery>) -> Json<NearbyResponse> {
    let query = params.q.as_str();

    let response = match (query.trim().is_empty(), params.lat, params.lon) {
        (false, Some(lat), Some(lon)) => NearbyResponse::Hits {
            hits: places::search(query, lat, lon, search_limit(params.limit)),
        },
        (false, _, _) => NearbyResponse::Geo {
            geo: places::geocode(query),
        },
        (true, _, _) => NearbyResponse::Error {
            error: NEARBY_USAGE.to_string(),
        },
    };

    Json(response)
}

/// Non-positive limits fall back to the default.
fn search_limit(limit: Option<i64>) -> usize {
    limit
        .and_then(|l| usize::try_from(l).ok())
        .filter(|&l| l > 0)
        .unwrap_or(DEFAULT_SEARCH_LIMIT)
}
