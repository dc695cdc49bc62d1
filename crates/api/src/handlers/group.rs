//! Handlers for the `/groups` resource.
//!
//! Every response carries `derived_status`, computed on read from the
//! milestone flags. The stored `status` column is returned as-is.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use tripdesk_core::error::CoreError;
use tripdesk_core::group_status::GroupStatus;
use tripdesk_core::types::DbId;
use tripdesk_core::validation::check_date_range;
use tripdesk_db::models::group::{CreateGroup, GroupWithStatus, UpdateGroup};
use tripdesk_db::repositories::GroupRepo;

use crate::error::{AppError, AppResult};
use crate::extract::ValidatedJson;
use crate::handlers::today;
use crate::middleware::actor::Actor;
use crate::query::GroupListParams;
use crate::state::AppState;

/// POST /api/groups
pub async fn create(
    State(state): State<AppState>,
    actor: Actor,
    ValidatedJson(input): ValidatedJson<CreateGroup>,
) -> AppResult<(StatusCode, Json<GroupWithStatus>)> {
    check_date_range(Some(input.start_date), Some(input.end_date))?;

    let group = GroupRepo::create(&state.pool, &input, actor.user_id).await?;
    Ok((StatusCode::CREATED, Json(group.with_status(today()))))
}

/// GET /api/groups
///
/// Optional `?status=` filters by derived status.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<GroupListParams>,
) -> AppResult<Json<Vec<GroupWithStatus>>> {
    let wanted = params
        .status
        .as_deref()
        .map(|s| {
            GroupStatus::parse(s).ok_or_else(|| {
                let allowed: Vec<&str> = GroupStatus::ALL.iter().map(|s| s.as_str()).collect();
                AppError::BadRequest(format!(
                    "Unknown status '{s}'. Expected one of: {}",
                    allowed.join(", ")
                ))
            })
        })
        .transpose()?;

    let today = today();
    let groups = GroupRepo::list(&state.pool)
        .await?
        .into_iter()
        .map(|g| g.with_status(today))
        .filter(|g| wanted.map_or(true, |s| g.derived_status == s))
        .collect();
    Ok(Json(groups))
}

/// GET /api/groups/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<GroupWithStatus>> {
    let group = GroupRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Group", id }))?;
    Ok(Json(group.with_status(today())))
}

/// PUT /api/groups/{id}
///
/// The resulting range (supplied value or stored value) must still have
/// `end_date >= start_date`. The stored row is checked under the update's
/// row lock.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    actor: Actor,
    ValidatedJson(input): ValidatedJson<UpdateGroup>,
) -> AppResult<Json<GroupWithStatus>> {
    let group = GroupRepo::update_guarded(&state.pool, id, &input, actor.user_id, |existing| {
        check_date_range(
            Some(input.start_date.unwrap_or(existing.start_date)),
            Some(input.end_date.unwrap_or(existing.end_date)),
        )
        .map_err(AppError::from)
    })
    .await?
    .ok_or(AppError::Core(CoreError::NotFound { entity: "Group", id }))?;
    Ok(Json(group.with_status(today())))
}

/// DELETE /api/groups/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    actor: Actor,
) -> AppResult<StatusCode> {
    let deleted = GroupRepo::delete(&state.pool, id, actor.user_id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound { entity: "Group", id }))
    }
}
