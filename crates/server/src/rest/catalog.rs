use axum::{
    extract::{Query, State},
    Json,
};
use shared_types::{
    AppError, CollectionSearchRequest, ContributorLists, ModelSummary, SuggestionRequest,
};

use crate::db::AppState;
use crate::error_convert::ValidateRequest;

/// GET /api/suggestions?q=
pub async fn suggestions(
    State(state): State<AppState>,
    Query(req): Query<SuggestionRequest>,
) -> Result<Json<Vec<String>>, AppError> {
    req.validate_request()?;
    if req.q.trim().is_empty() {
        return Ok(Json(Vec::new()));
    }
    let limit = crate::config::catalog().suggestion_limit;
    let names = state.directory.suggestions(&req.q, limit).await?;
    Ok(Json(names))
}

/// GET /api/contributors
pub async fn contributors(
    State(state): State<AppState>,
) -> Result<Json<ContributorLists>, AppError> {
    Ok(Json(state.directory.contributors().await?))
}

/// GET /api/collections?q=&modeler=&annotator=
pub async fn search_collection(
    State(state): State<AppState>,
    Query(req): Query<CollectionSearchRequest>,
) -> Result<Json<Vec<ModelSummary>>, AppError> {
    req.validate_request()?;
    Ok(Json(state.directory.search_models(&req).await?))
}
