use axum::routing::get;
use axum::Router;

use crate::handlers::meal;
use crate::state::AppState;

/// Routes mounted at `/meals`.
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
        .route("/", get(meal::list).post(meal::create))
        .route(
            "/{id}",
            get(meal::get_by_id).put(meal::update).delete(meal::delete),
        )
}
