//! Handlers for drop-off records. Drop-offs are created only by roster
//! deletion; the API can read and purge them.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use tripdesk_core::error::CoreError;
use tripdesk_core::types::DbId;
use tripdesk_db::models::drop_off::DropOff;
use tripdesk_db::repositories::DropOffRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /api/groups/{group_id}/dropped
pub async fn list_by_group(
    State(state): State<AppState>,
    Path(group_id): Path<DbId>,
) -> AppResult<Json<Vec<DropOff>>> {
    let drop_offs = DropOffRepo::list(&state.pool, Some(group_id)).await?;
    Ok(Json(drop_offs))
}

/// GET /api/drop-offs/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DropOff>> {
    let drop_off = DropOffRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "DropOff",
            id,
        }))?;
    Ok(Json(drop_off))
}

/// DELETE /api/drop-offs/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    if DropOffRepo::delete(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "DropOff",
            id,
        }))
    }
}
