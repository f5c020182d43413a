//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::state::AppState;

/// Returns service health with per-component checks.
///
/// # Endpoint
///
/// `GET /health` (public)
///
/// # Response Codes
///
/// - **200 OK**: all components healthy
/// - **503 Service Unavailable**: one or more components degraded
///
/// Components checked: database connectivity, click queue, cache backend.
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let db_check = check_database(&state).await;
    let queue_check = check_click_queue(&state);
    let cache_check = check_cache(&state).await;

    let all_healthy =
        db_check.status == "ok" && queue_check.status == "ok" && cache_check.status == "ok";

    let response = HealthResponse {
        status: if all_healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks {
            database: db_check,
            click_queue: queue_check,
            cache: cache_check,
        },
    };

    if all_healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

/// Checks database connectivity with a trivial query.
async fn check_database(state: &AppState) -> CheckStatus {
    match sqlx::query_scalar::<_, i32>("SELECT 1")
        .fetch_one(state.db.as_ref())
        .await
    {
        Ok(_) => CheckStatus {
            status: "ok".to_string(),
            message: Some("Connected".to_string()),
        },
        Err(e) => CheckStatus {
            status: "error".to_string(),
            message: Some(format!("Database error: {}", e)),
        },
    }
}

/// Checks if the click tracking queue is operational.
fn check_click_queue(state: &AppState) -> CheckStatus {
    if state.click_sender.is_closed() {
        CheckStatus {
            status: "error".to_string(),
            message: Some("Click queue is closed".to_string()),
        }
    } else {
        CheckStatus {
            status: "ok".to_string(),
            message: Some(format!("Capacity: {}", state.click_sender.capacity())),
        }
    }
}

/// Checks cache backend reachability.
async fn check_cache(state: &AppState) -> CheckStatus {
    if state.cache.health_check().await {
        CheckStatus {
            status: "ok".to_string(),
            message: Some("Cache reachable".to_string()),
        }
    } else {
        CheckStatus {
            status: "error".to_string(),
            message: Some("Cache connection failed".to_string()),
        }
    }
}
