//! Handlers for click analytics.

use std::collections::HashMap;

use axum::{
    Extension, Json,
    extract::{Path, Query, State},
};
use chrono::NaiveDate;
use serde_json::json;

use crate::api::dto::analytics::{
    AnalyticsQueryParams, DailyClicksResponse, TotalClicksQueryParams,
};
use crate::api::middleware::auth::CurrentAccount;
use crate::error::AppError;
use crate::state::AppState;

/// Returns per-day click counts for one of the caller's links.
///
/// # Endpoint
///
/// `GET /links/{code}/analytics?start=&end=` (authenticated)
///
/// Bounds are ISO 8601 date-times, inclusive on both ends. Only dates with
/// at least one click appear; the order of the returned pairs is
/// unspecified.
///
/// # Errors
///
/// Returns 400 if either bound is missing or malformed, 404 if the code
/// does not exist or belongs to another account.
pub async fn link_analytics_handler(
    State(state): State<AppState>,
    Extension(CurrentAccount(account)): Extension<CurrentAccount>,
    Path(code): Path<String>,
    Query(params): Query<AnalyticsQueryParams>,
) -> Result<Json<Vec<DailyClicksResponse>>, AppError> {
    let (Some(start), Some(end)) = (params.start, params.end) else {
        return Err(AppError::bad_request(
            "Both start and end query parameters are required",
            json!({ "format": "ISO 8601 date-time" }),
        ));
    };

    let daily = state
        .analytics_service
        .clicks_by_date(&code, &account, start, end)
        .await?;

    Ok(Json(daily.into_iter().map(Into::into).collect()))
}

/// Returns per-day click totals across all of the caller's links.
///
/// # Endpoint
///
/// `GET /my-links/analytics?start=&end=` (authenticated)
///
/// Bounds are calendar dates (`YYYY-MM-DD`); the range covers the start of
/// `start` through the end of `end`. The response is a date-to-count map.
///
/// # Errors
///
/// Returns 400 if either bound is missing or malformed.
pub async fn total_clicks_handler(
    State(state): State<AppState>,
    Extension(CurrentAccount(account)): Extension<CurrentAccount>,
    Query(params): Query<TotalClicksQueryParams>,
) -> Result<Json<HashMap<NaiveDate, i64>>, AppError> {
    let (Some(start), Some(end)) = (params.start, params.end) else {
        return Err(AppError::bad_request(
            "Both start and end query parameters are required",
            json!({ "format": "YYYY-MM-DD" }),
        ));
    };

    let totals = state
        .analytics_service
        .total_clicks_by_owner(&account, start, end)
        .await?;

    Ok(Json(totals))
}
