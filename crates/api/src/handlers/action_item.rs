//! Handlers for the `/action-items` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use tripdesk_core::action_items::{priorities, statuses};
use tripdesk_core::error::CoreError;
use tripdesk_core::types::DbId;
use tripdesk_core::validation::{check_one_of, FieldError};
use tripdesk_db::models::action_item::{ActionItem, CreateActionItem, UpdateActionItem};
use tripdesk_db::repositories::ActionItemRepo;

use crate::error::{AppError, AppResult};
use crate::extract::ValidatedJson;
use crate::query::GroupFilter;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "ActionItem",
        id,
    })
}

/// Check the optional vocabulary fields, collecting every failure.
fn check_vocabulary(priority: Option<&str>, status: Option<&str>) -> AppResult<()> {
    let errors: Vec<FieldError> = [
        priority.map(|p| check_one_of("priority", p, priorities::ALL)),
        status.map(|s| check_one_of("status", s, statuses::ALL)),
    ]
    .into_iter()
    .flatten()
    .filter_map(Result::err)
    .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(AppError::Core(CoreError::InvalidFields(errors)))
    }
}

/// POST /api/action-items
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateActionItem>,
) -> AppResult<(StatusCode, Json<ActionItem>)> {
    check_vocabulary(input.priority.as_deref(), input.status.as_deref())?;

    let item = ActionItemRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(item)))
}

/// GET /api/action-items
pub async fn list(
    State(state): State<AppState>,
    Query(filter): Query<GroupFilter>,
) -> AppResult<Json<Vec<ActionItem>>> {
    let items = ActionItemRepo::list(&state.pool, filter.group_id).await?;
    Ok(Json(items))
}

/// GET /api/groups/{group_id}/action-items
pub async fn list_by_group(
    State(state): State<AppState>,
    Path(group_id): Path<DbId>,
) -> AppResult<Json<Vec<ActionItem>>> {
    let items = ActionItemRepo::list(&state.pool, Some(group_id)).await?;
    Ok(Json(items))
}

/// GET /api/action-items/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ActionItem>> {
    let item = ActionItemRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(item))
}

/// PUT /api/action-items/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    ValidatedJson(input): ValidatedJson<UpdateActionItem>,
) -> AppResult<Json<ActionItem>> {
    check_vocabulary(input.priority.as_deref(), input.status.as_deref())?;

    let item = ActionItemRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(item))
}

/// DELETE /api/action-items/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    if ActionItemRepo::delete(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(id))
    }
}
