use axum::routing::{get, post};
use axum::Router;

use crate::handlers::roster;
use crate::state::AppState;

/// Routes mounted at `/roster`. Per-group listing lives under `/groups`.
///
/// ```text
/// POST   /                 -> create
/// GET    /{id}             -> get_by_id
/// PUT    /{id}             -> update
/// DELETE /{id}             -> delete (moves the traveler to drop-offs)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", post(roster::create)).route(
        "/{id}",
        get(roster::get_by_id)
            .put(roster::update)
            .delete(roster::delete),
    )
}
