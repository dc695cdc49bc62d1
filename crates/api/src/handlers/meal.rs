//! Handlers for the `/meals` resource. Responses include `total_meals`.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use tripdesk_core::error::CoreError;
use tripdesk_core::types::DbId;
use tripdesk_db::models::meal::{CreateMeal, MealWithTotal, UpdateMeal};
use tripdesk_db::repositories::MealRepo;

use crate::error::{AppError, AppResult};
use crate::extract::ValidatedJson;
use crate::query::GroupFilter;
use crate::state::AppState;

/// POST /api/meals
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateMeal>,
) -> AppResult<(StatusCode, Json<MealWithTotal>)> {
    let meal = MealRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(meal.with_total())))
}

/// GET /api/meals
pub async fn list(
    State(state): State<AppState>,
    Query(filter): Query<GroupFilter>,
) -> AppResult<Json<Vec<MealWithTotal>>> {
    let meals = MealRepo::list(&state.pool, filter.group_id).await?;
    Ok(Json(meals.into_iter().map(|m| m.with_total()).collect()))
}

/// GET /api/groups/{group_id}/meals
pub async fn list_by_group(
    State(state): State<AppState>,
    Path(group_id): Path<DbId>,
) -> AppResult<Json<Vec<MealWithTotal>>> {
    let meals = MealRepo::list(&state.pool, Some(group_id)).await?;
    Ok(Json(meals.into_iter().map(|m| m.with_total()).collect()))
}

/// GET /api/meals/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<MealWithTotal>> {
    let meal = MealRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Meal", id }))?;
    Ok(Json(meal.with_total()))
}

/// PUT /api/meals/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    ValidatedJson(input): ValidatedJson<UpdateMeal>,
) -> AppResult<Json<MealWithTotal>> {
    let meal = MealRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Meal", id }))?;
    Ok(Json(meal.with_total()))
}

/// DELETE /api/meals/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    if MealRepo::delete(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound { entity: "Meal", id }))
    }
}
