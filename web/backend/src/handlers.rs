use crate::models::{ErrorResponse, HealthResponse, PathQuery, PathResponse, StatsResponse};
use crate::state::AppState;
use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use sixdegrees_core::string_normalization::clean_str;
use sixdegrees_core::{ConnectionError, SearchConfig, find_connection};
use std::sync::Arc;
use tracing::{debug, error, info};

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Unavailable(String),

    #[error("search task failed: {0}")]
    Internal(String),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Unavailable(_) => StatusCode::BAD_GATEWAY,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            ApiError::BadRequest(_) => "bad_request",
            ApiError::NotFound(_) => "not_found",
            ApiError::Unavailable(_) => "unavailable",
            ApiError::Internal(_) => "internal",
        }
    }
}

impl From<ConnectionError> for ApiError {
    fn from(error: ConnectionError) -> Self {
        match error {
            ConnectionError::StartNotFound(_) | ConnectionError::TargetNotFound(_) => {
                ApiError::NotFound(error.to_string())
            }
            ConnectionError::StartUnavailable { .. } | ConnectionError::TargetUnavailable { .. } => {
                ApiError::Unavailable(error.to_string())
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            error: self.to_string(),
            kind: self.kind().to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}

pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        message: "sixdegrees API is running".to_string(),
    })
}

pub async fn find_path(
    State(state): State<Arc<AppState>>,
    Query(params): Query<PathQuery>,
) -> Result<Json<PathResponse>, ApiError> {
    let start = params.start.trim().to_string();
    let target = params.target.trim().to_string();
    if start.is_empty() || target.is_empty() {
        return Err(ApiError::BadRequest(
            "Both start and target artists are required".to_string(),
        ));
    }

    let config = request_config(&state.config, &params);
    let cache_key = format!(
        "{}|{}|{:?}|{:?}",
        clean_str(&start),
        clean_str(&target),
        config.max_depth,
        config.rank
    );

    if let Some(cached) = state.responses.get(&cache_key).await {
        debug!(start = %start, target = %target, "serving memoised path response");
        return Ok(Json(cached));
    }

    let search_state = Arc::clone(&state);
    let report = tokio::task::spawn_blocking(move || {
        find_connection(
            search_state.catalog.as_ref(),
            &search_state.album_cache,
            &start,
            &target,
            &config,
        )
    })
    .await
    .map_err(|join_error| {
        error!(error = %join_error, "search task panicked");
        ApiError::Internal(join_error.to_string())
    })??;

    state.record_search();
    info!(
        start = %report.start,
        target = %report.target,
        found = report.found(),
        catalog_calls = report.search.catalog_calls,
        "path search completed"
    );

    let response = PathResponse::from(&report);
    if report.search.degraded {
        debug!(start = %report.start, target = %report.target, "not memoising a degraded search");
    } else {
        state.responses.insert(cache_key, response.clone()).await;
    }
    Ok(Json(response))
}

pub async fn get_stats(State(state): State<Arc<AppState>>) -> Json<StatsResponse> {
    state.responses.run_pending_tasks().await;
    Json(StatsResponse {
        cached_albums: state.album_cache.len(),
        album_fetches: state.album_cache.fetch_count(),
        cached_responses: state.responses.entry_count(),
        searches_run: state.searches_run(),
    })
}

fn request_config(base: &SearchConfig, params: &PathQuery) -> SearchConfig {
    let mut config = base.clone();
    if let Some(hops) = params.max_depth {
        config = config.with_max_depth(SearchConfig::max_depth_from_hops(hops));
    }
    if params.rank.is_some() {
        config = config.with_rank(params.rank);
    }
    config
}
