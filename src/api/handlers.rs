use axum::{extract::State, Json};

use crate::{
    db::{Row, SqlParam},
    error::{AppError, AppResult},
};

use super::{queries, AppState};

/// Runs one fixed query and serializes every row, or fails with `label`
///
/// The result set is returned whole or not at all.
pub async fn execute_query(
    state: &AppState,
    sql: &str,
    params: &[SqlParam],
    label: &'static str,
) -> AppResult<Json<Vec<Row>>> {
    let rows = state
        .db
        .execute(sql, params)
        .await
        .map_err(|e| AppError::query_failure(label, e))?;

    Ok(Json(rows))
}

/// # GET /api/teams
pub async fn list_teams(State(state): State<AppState>) -> AppResult<Json<Vec<Row>>> {
    execute_query(&state, queries::TEAMS, &[], "Failed to fetch teams data").await
}

/// # GET /api/calendar
pub async fn list_calendar(State(state): State<AppState>) -> AppResult<Json<Vec<Row>>> {
    execute_query(&state, queries::CALENDAR, &[], "Failed to fetch calendar data").await
}

/// # GET /api/standings
pub async fn list_standings(State(state): State<AppState>) -> AppResult<Json<Vec<Row>>> {
    execute_query(&state, queries::STANDINGS, &[], "Failed to fetch standings data").await
}

/// # GET /api/results
pub async fn list_results(State(state): State<AppState>) -> AppResult<Json<Vec<Row>>> {
    execute_query(&state, queries::RESULTS, &[], "Failed to fetch all session results").await
}
