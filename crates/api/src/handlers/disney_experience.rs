//! Handlers for the `/disney-experience` resource (one record per traveler).

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use tripdesk_core::error::CoreError;
use tripdesk_core::types::DbId;
use tripdesk_db::models::disney_experience::{
    CreateDisneyExperience, DisneyExperience, UpdateDisneyExperience,
};
use tripdesk_db::repositories::DisneyExperienceRepo;

use crate::error::{AppError, AppResult};
use crate::extract::ValidatedJson;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "DisneyExperience",
        id,
    })
}

/// POST /api/disney-experience
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateDisneyExperience>,
) -> AppResult<(StatusCode, Json<DisneyExperience>)> {
    let record = DisneyExperienceRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(record)))
}

/// GET /api/groups/{group_id}/disney-experience
pub async fn list_by_group(
    State(state): State<AppState>,
    Path(group_id): Path<DbId>,
) -> AppResult<Json<Vec<DisneyExperience>>> {
    let records = DisneyExperienceRepo::list(&state.pool, Some(group_id)).await?;
    Ok(Json(records))
}

/// GET /api/disney-experience/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DisneyExperience>> {
    let record = DisneyExperienceRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(record))
}

/// PUT /api/disney-experience/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    ValidatedJson(input): ValidatedJson<UpdateDisneyExperience>,
) -> AppResult<Json<DisneyExperience>> {
    let record = DisneyExperienceRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(record))
}

/// DELETE /api/disney-experience/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    if DisneyExperienceRepo::delete(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(id))
    }
}
