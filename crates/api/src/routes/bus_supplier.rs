use axum::routing::get;
use axum::Router;

use crate::handlers::bus_supplier;
use crate::state::AppState;

/// Routes mounted at `/bus-suppliers`.
///
/// ```text
/// GET    /                 -> list
/// POST   /                 -> create
/// GET    /{id}             -> get_by_id
/// PUT    /{id}             -> update
/// DELETE /{id}             -> delete
/// GET    /{id}/groups      -> list_groups
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(bus_supplier::list).post(bus_supplier::create))
        .route(
            "/{id}",
            get(bus_supplier::get_by_id)
                .put(bus_supplier::update)
                .delete(bus_supplier::delete),
        )
        .route("/{id}/groups", get(bus_supplier::list_groups))
}
