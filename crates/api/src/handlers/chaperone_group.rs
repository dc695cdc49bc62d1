//! Handlers for the `/chaperone-groups` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use tripdesk_core::error::CoreError;
use tripdesk_core::types::DbId;
use tripdesk_db::models::chaperone_group::{
    ChaperoneGroupWithStudents, CreateChaperoneGroup, UpdateChaperoneGroup,
};
use tripdesk_db::repositories::ChaperoneGroupRepo;

use crate::error::{AppError, AppResult};
use crate::extract::ValidatedJson;
use crate::handlers::check_roster_members;
use crate::query::GroupFilter;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "ChaperoneGroup",
        id,
    })
}

/// POST /api/chaperone-groups
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(mut input): ValidatedJson<CreateChaperoneGroup>,
) -> AppResult<(StatusCode, Json<ChaperoneGroupWithStudents>)> {
    if let Some(chaperone_id) = input.chaperone_id {
        check_roster_members(&state.pool, input.group_id, "chaperone_id", &[chaperone_id]).await?;
    }
    input.student_ids =
        check_roster_members(&state.pool, input.group_id, "student_ids", &input.student_ids)
            .await?;

    let group = ChaperoneGroupRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(group)))
}

/// GET /api/chaperone-groups
pub async fn list(
    State(state): State<AppState>,
    Query(filter): Query<GroupFilter>,
) -> AppResult<Json<Vec<ChaperoneGroupWithStudents>>> {
    let groups = ChaperoneGroupRepo::list(&state.pool, filter.group_id).await?;
    Ok(Json(groups))
}

/// GET /api/groups/{group_id}/chaperone-groups
pub async fn list_by_group(
    State(state): State<AppState>,
    Path(group_id): Path<DbId>,
) -> AppResult<Json<Vec<ChaperoneGroupWithStudents>>> {
    let groups = ChaperoneGroupRepo::list(&state.pool, Some(group_id)).await?;
    Ok(Json(groups))
}

/// GET /api/chaperone-groups/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ChaperoneGroupWithStudents>> {
    let group = ChaperoneGroupRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(group))
}

/// PUT /api/chaperone-groups/{id}
///
/// A supplied `student_ids` replaces the membership set.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    ValidatedJson(mut input): ValidatedJson<UpdateChaperoneGroup>,
) -> AppResult<Json<ChaperoneGroupWithStudents>> {
    let existing = ChaperoneGroupRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    let group_id = existing.chaperone_group.group_id;

    if let Some(chaperone_id) = input.chaperone_id {
        check_roster_members(&state.pool, group_id, "chaperone_id", &[chaperone_id]).await?;
    }
    if let Some(ids) = &input.student_ids {
        let checked = check_roster_members(&state.pool, group_id, "student_ids", ids).await?;
        input.student_ids = Some(checked);
    }

    let group = ChaperoneGroupRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(group))
}

/// DELETE /api/chaperone-groups/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    if ChaperoneGroupRepo::delete(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(id))
    }
}
