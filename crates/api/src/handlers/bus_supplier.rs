//! Handlers for the `/bus-suppliers` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use tripdesk_core::error::CoreError;
use tripdesk_core::types::DbId;
use tripdesk_db::models::bus_supplier::{BusSupplier, CreateBusSupplier, UpdateBusSupplier};
use tripdesk_db::models::group::GroupWithStatus;
use tripdesk_db::repositories::{BusSupplierRepo, GroupRepo};

use crate::error::{AppError, AppResult};
use crate::extract::ValidatedJson;
use crate::handlers::today;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "BusSupplier",
        id,
    })
}

/// POST /api/bus-suppliers
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateBusSupplier>,
) -> AppResult<(StatusCode, Json<BusSupplier>)> {
    let supplier = BusSupplierRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(supplier)))
}

/// GET /api/bus-suppliers
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<BusSupplier>>> {
    let suppliers = BusSupplierRepo::list(&state.pool).await?;
    Ok(Json(suppliers))
}

/// GET /api/bus-suppliers/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<BusSupplier>> {
    let supplier = BusSupplierRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(supplier))
}

/// GET /api/bus-suppliers/{id}/groups
///
/// Groups currently booked with this supplier.
pub async fn list_groups(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Vec<GroupWithStatus>>> {
    BusSupplierRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;

    let today = today();
    let groups = GroupRepo::list_by_bus_supplier(&state.pool, id)
        .await?
        .into_iter()
        .map(|g| g.with_status(today))
        .collect();
    Ok(Json(groups))
}

/// PUT /api/bus-suppliers/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    ValidatedJson(input): ValidatedJson<UpdateBusSupplier>,
) -> AppResult<Json<BusSupplier>> {
    let supplier = BusSupplierRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(supplier))
}

/// DELETE /api/bus-suppliers/{id}
///
/// Groups that used the supplier keep their row with `bus_supplier_id` cleared.
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    if BusSupplierRepo::delete(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(id))
    }
}
