//! Handlers for the `/waiting-list` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use tripdesk_core::error::CoreError;
use tripdesk_core::types::DbId;
use tripdesk_db::models::roster::RosterEntry;
use tripdesk_db::models::waiting_list::{
    CreateWaitingListEntry, UpdateWaitingListEntry, WaitingListEntry,
};
use tripdesk_db::repositories::WaitingListRepo;

use crate::error::{AppError, AppResult};
use crate::extract::ValidatedJson;
use crate::middleware::actor::Actor;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "WaitingListEntry",
        id,
    })
}

/// POST /api/waiting-list
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateWaitingListEntry>,
) -> AppResult<(StatusCode, Json<WaitingListEntry>)> {
    let entry = WaitingListRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(entry)))
}

/// GET /api/groups/{group_id}/waiting-list
pub async fn list_by_group(
    State(state): State<AppState>,
    Path(group_id): Path<DbId>,
) -> AppResult<Json<Vec<WaitingListEntry>>> {
    let entries = WaitingListRepo::list(&state.pool, Some(group_id)).await?;
    Ok(Json(entries))
}

/// GET /api/waiting-list/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<WaitingListEntry>> {
    let entry = WaitingListRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(entry))
}

/// PUT /api/waiting-list/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    ValidatedJson(input): ValidatedJson<UpdateWaitingListEntry>,
) -> AppResult<Json<WaitingListEntry>> {
    let entry = WaitingListRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(entry))
}

/// DELETE /api/waiting-list/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    if WaitingListRepo::delete(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(id))
    }
}

/// POST /api/waiting-list/{id}/promote
///
/// Returns the roster entry created from the waiting-list entry.
pub async fn promote(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    actor: Actor,
) -> AppResult<(StatusCode, Json<RosterEntry>)> {
    let entry = WaitingListRepo::promote(&state.pool, id, actor.user_id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok((StatusCode::CREATED, Json(entry)))
}
