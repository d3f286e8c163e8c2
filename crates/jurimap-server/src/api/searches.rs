use axum::{
    extract::{Path, State},
    http::StatusCode,
    Extension, Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use jurimap_search::{SearchError, SearchResult};

use crate::middleware::RequestId;

use super::{ApiError, ApiResponse, AppState, ResponseMeta};

#[derive(Debug, Deserialize)]
pub(super) struct CreateSearchRequest {
    pub location: String,
    pub radius_km: Option<f64>,
}

#[derive(Debug, Serialize)]
pub(super) struct DeletedData {
    pub deleted: bool,
}

/// Runs a full search and stores the result for later retrieval.
pub(super) async fn create_search(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Json(body): Json<CreateSearchRequest>,
) -> Result<(StatusCode, Json<ApiResponse<SearchResult>>), ApiError> {
    let result = state
        .service
        .run(&body.location, body.radius_km)
        .await
        .map_err(|e| map_search_error(req_id.0.clone(), &e))?;

    state.store.insert(result.clone()).await;
    tracing::info!(
        id = %result.id,
        total_found = result.total_found,
        "search stored"
    );

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse {
            data: result,
            meta: ResponseMeta::new(req_id.0),
        }),
    ))
}

/// Re-reads a stored result so the caller can re-render without re-querying.
pub(super) async fn get_search(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<SearchResult>>, ApiError> {
    let Some(result) = state.store.get(id).await else {
        return Err(ApiError::new(
            req_id.0,
            "not_found",
            format!("no stored search result with id {id}"),
        ));
    };

    Ok(Json(ApiResponse {
        data: result,
        meta: ResponseMeta::new(req_id.0),
    }))
}

/// Clears a stored result.
pub(super) async fn delete_search(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<DeletedData>>, ApiError> {
    if !state.store.remove(id).await {
        return Err(ApiError::new(
            req_id.0,
            "not_found",
            format!("no stored search result with id {id}"),
        ));
    }

    Ok(Json(ApiResponse {
        data: DeletedData { deleted: true },
        meta: ResponseMeta::new(req_id.0),
    }))
}

fn map_search_error(request_id: String, error: &SearchError) -> ApiError {
    let code = match error {
        SearchError::EmptyQuery | SearchError::InvalidRadius { .. } => "validation_error",
        SearchError::LocationNotFound { .. } => "location_not_found",
    };
    ApiError::new(request_id, code, error.to_string())
}
