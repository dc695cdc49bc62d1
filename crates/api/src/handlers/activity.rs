//! Handlers for the read-only activity feed.

use axum::extract::{Path, Query, State};
use axum::Json;
use tripdesk_core::types::DbId;
use tripdesk_db::models::activity::{Activity, ActivityQuery};
use tripdesk_db::repositories::ActivityRepo;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /api/activities?group_id=&limit=&offset=
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ActivityQuery>,
) -> AppResult<Json<Vec<Activity>>> {
    let activities = ActivityRepo::list(&state.pool, &params).await?;
    Ok(Json(activities))
}

/// GET /api/groups/{group_id}/activities?limit=&offset=
pub async fn list_by_group(
    State(state): State<AppState>,
    Path(group_id): Path<DbId>,
    Query(params): Query<ActivityQuery>,
) -> AppResult<Json<Vec<Activity>>> {
    let params = ActivityQuery {
        group_id: Some(group_id),
        ..params
    };
    let activities = ActivityRepo::list(&state.pool, &params).await?;
    Ok(Json(activities))
}
