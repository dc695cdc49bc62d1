//! Handlers for the `/rooming` resource.
//!
//! Occupants must be roster entries of the room's group, and there may be
//! no more of them than the room's occupancy when one is set.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use tripdesk_core::error::CoreError;
use tripdesk_core::types::DbId;
use tripdesk_core::validation::FieldError;
use tripdesk_db::models::rooming::{CreateRoom, RoomWithOccupants, UpdateRoom};
use tripdesk_db::repositories::RoomingRepo;

use crate::error::{AppError, AppResult};
use crate::extract::ValidatedJson;
use crate::handlers::check_roster_members;
use crate::query::GroupFilter;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Room",
        id,
    })
}

fn check_capacity(occupancy: Option<i32>, occupants: usize) -> Result<(), FieldError> {
    match occupancy {
        Some(cap) if occupants > cap.max(0) as usize => Err(FieldError::new(
            "occupant_ids",
            format!("exceeds room occupancy of {cap}"),
        )),
        _ => Ok(()),
    }
}

/// POST /api/rooming
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(mut input): ValidatedJson<CreateRoom>,
) -> AppResult<(StatusCode, Json<RoomWithOccupants>)> {
    input.occupant_ids =
        check_roster_members(&state.pool, input.group_id, "occupant_ids", &input.occupant_ids)
            .await?;
    check_capacity(input.occupancy, input.occupant_ids.len())?;

    let room = RoomingRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(room)))
}

/// GET /api/rooming
pub async fn list(
    State(state): State<AppState>,
    Query(filter): Query<GroupFilter>,
) -> AppResult<Json<Vec<RoomWithOccupants>>> {
    let rooms = RoomingRepo::list(&state.pool, filter.group_id).await?;
    Ok(Json(rooms))
}

/// GET /api/groups/{group_id}/rooming
pub async fn list_by_group(
    State(state): State<AppState>,
    Path(group_id): Path<DbId>,
) -> AppResult<Json<Vec<RoomWithOccupants>>> {
    let rooms = RoomingRepo::list(&state.pool, Some(group_id)).await?;
    Ok(Json(rooms))
}

/// GET /api/rooming/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<RoomWithOccupants>> {
    let room = RoomingRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(room))
}

/// PUT /api/rooming/{id}
///
/// A supplied `occupant_ids` replaces the room's occupants.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    ValidatedJson(mut input): ValidatedJson<UpdateRoom>,
) -> AppResult<Json<RoomWithOccupants>> {
    let existing = RoomingRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;

    if let Some(ids) = &input.occupant_ids {
        let checked =
            check_roster_members(&state.pool, existing.room.group_id, "occupant_ids", ids).await?;
        input.occupant_ids = Some(checked);
    }

    let occupants = input
        .occupant_ids
        .as_ref()
        .map_or(existing.occupant_ids.len(), Vec::len);
    check_capacity(input.occupancy.or(existing.room.occupancy), occupants)?;

    let room = RoomingRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(room))
}

/// DELETE /api/rooming/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    if RoomingRepo::delete(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(id))
    }
}
