//! Handlers for the `/itineraries` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use tripdesk_core::error::CoreError;
use tripdesk_core::types::DbId;
use tripdesk_db::models::itinerary::{CreateItinerary, Itinerary, UpdateItinerary};
use tripdesk_db::repositories::ItineraryRepo;

use crate::error::{AppError, AppResult};
use crate::extract::ValidatedJson;
use crate::query::GroupFilter;
use crate::state::AppState;

/// POST /api/itineraries
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateItinerary>,
) -> AppResult<(StatusCode, Json<Itinerary>)> {
    let itinerary = ItineraryRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(itinerary)))
}

/// GET /api/itineraries
pub async fn list(
    State(state): State<AppState>,
    Query(filter): Query<GroupFilter>,
) -> AppResult<Json<Vec<Itinerary>>> {
    let itineraries = ItineraryRepo::list(&state.pool, filter.group_id).await?;
    Ok(Json(itineraries))
}

/// GET /api/groups/{group_id}/itineraries
pub async fn list_by_group(
    State(state): State<AppState>,
    Path(group_id): Path<DbId>,
) -> AppResult<Json<Vec<Itinerary>>> {
    let itineraries = ItineraryRepo::list(&state.pool, Some(group_id)).await?;
    Ok(Json(itineraries))
}

/// GET /api/itineraries/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Itinerary>> {
    let itinerary = ItineraryRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Itinerary",
            id,
        }))?;
    Ok(Json(itinerary))
}

/// PUT /api/itineraries/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    ValidatedJson(input): ValidatedJson<UpdateItinerary>,
) -> AppResult<Json<Itinerary>> {
    let itinerary = ItineraryRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Itinerary",
            id,
        }))?;
    Ok(Json(itinerary))
}

/// DELETE /api/itineraries/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = ItineraryRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Itinerary",
            id,
        }))
    }
}
