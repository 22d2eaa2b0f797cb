use axum::{
    extract::{
        rejection::{PathRejection, QueryRejection},
        Path, Query, State,
    },
    Extension, Json,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::error::AppResult;
use crate::middleware::RequestId;
use crate::models::{HistoryEntry, ProfileSummary, RecommendationResult, UserId, Variant};
use crate::services::{history, profile, recommendations};

use super::AppState;

// Request/Response types

#[derive(Debug, Deserialize)]
pub struct RecommendQuery {
    /// Raw variant name; unknown values degrade to baseline
    pub variant: Option<String>,
    pub limit: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct HistoryResponse {
    pub user_id: UserId,
    pub history: Vec<HistoryEntry>,
}

// Handlers

/// Service banner
pub async fn root() -> Json<Value> {
    Json(json!({ "status": "online", "service": "RecSys API v1" }))
}

/// Health check endpoint with snapshot sizes
pub async fn health_check(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "items": state.store.items().len(),
        "users": state.store.user_count(),
        "interactions": state.store.interaction_count(),
    }))
}

/// Recommend unseen items for a user
pub async fn recommend(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    path: Result<Path<UserId>, PathRejection>,
    query: Result<Query<RecommendQuery>, QueryRejection>,
) -> AppResult<Json<RecommendationResult>> {
    let Path(user_id) = path?;
    let Query(params) = query?;
    let variant = Variant::parse_lenient(params.variant.as_deref());
    let limit = params.limit.unwrap_or(state.config.default_limit);

    tracing::info!(
        request_id = %request_id,
        user_id,
        variant = %variant,
        limit,
        "Processing recommendation request"
    );

    let mut rng = state.random.rng();
    let result = recommendations::recommend(&state.store, user_id, variant, limit, &mut rng);

    tracing::info!(
        request_id = %request_id,
        user_id,
        applied_variant = %result.applied_variant,
        count = result.count,
        "Recommendation completed"
    );

    Ok(Json(result))
}

/// Most recent ratings of a user, newest first
pub async fn get_history(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    path: Result<Path<UserId>, PathRejection>,
) -> AppResult<Json<HistoryResponse>> {
    let Path(user_id) = path?;
    let history = history::recent_history(&state.store, user_id, state.config.history_limit);

    tracing::info!(
        request_id = %request_id,
        user_id,
        entries = history.len(),
        "History served"
    );

    Ok(Json(HistoryResponse { user_id, history }))
}

/// Profile summary for analytics views
pub async fn get_profile(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    path: Result<Path<UserId>, PathRejection>,
) -> AppResult<Json<ProfileSummary>> {
    let Path(user_id) = path?;
    let summary = profile::profile_summary(&state.store, user_id, state.config.top_genres)
        .inspect_err(|e| {
            tracing::info!(request_id = %request_id, user_id, error = %e, "Profile lookup failed");
        })?;

    Ok(Json(summary))
}
