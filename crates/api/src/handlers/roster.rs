//! Handlers for the `/roster` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use tripdesk_core::error::CoreError;
use tripdesk_core::types::DbId;
use tripdesk_db::models::roster::{CreateRosterEntry, RosterEntry, UpdateRosterEntry};
use tripdesk_db::repositories::RosterRepo;

use crate::error::{AppError, AppResult};
use crate::extract::ValidatedJson;
use crate::middleware::actor::Actor;
use crate::state::AppState;

/// POST /api/roster
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateRosterEntry>,
) -> AppResult<(StatusCode, Json<RosterEntry>)> {
    let entry = RosterRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(entry)))
}

/// GET /api/groups/{group_id}/roster
pub async fn list_by_group(
    State(state): State<AppState>,
    Path(group_id): Path<DbId>,
) -> AppResult<Json<Vec<RosterEntry>>> {
    let entries = RosterRepo::list(&state.pool, Some(group_id)).await?;
    Ok(Json(entries))
}

/// GET /api/roster/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<RosterEntry>> {
    let entry = RosterRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "RosterEntry",
            id,
        }))?;
    Ok(Json(entry))
}

/// PUT /api/roster/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    ValidatedJson(input): ValidatedJson<UpdateRosterEntry>,
) -> AppResult<Json<RosterEntry>> {
    let entry = RosterRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "RosterEntry",
            id,
        }))?;
    Ok(Json(entry))
}

/// DELETE /api/roster/{id}
///
/// Moves the traveler to drop-offs rather than discarding them.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    actor: Actor,
) -> AppResult<StatusCode> {
    let dropped = RosterRepo::delete_with_drop_off(&state.pool, id, actor.user_id).await?;
    if dropped {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "RosterEntry",
            id,
        }))
    }
}
