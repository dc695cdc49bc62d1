use axum::routing::get;
use axum::Router;

use crate::handlers::itinerary;
use crate::state::AppState;

/// Routes mounted at `/itineraries`.
///
/// ```text
/// GET    /                 -> list
/// POST   /                 -> create
/// GET    /{id}             -> get_by_id
/// PUT    /{id}             -> update
/// DELETE /{id}             -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(itinerary::list).post(itinerary::create))
        .route(
            "/{id}",
            get(itinerary::get_by_id).put(itinerary::update).delete(itinerary::delete),
        )
}
