use axum::routing::get;
use axum::Router;

use crate::handlers::rooming;
use crate::state::AppState;

/// Routes mounted at `/rooming`.
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
        .route("/", get(rooming::list).post(rooming::create))
        .route(
            "/{id}",
            get(rooming::get_by_id).put(rooming::update).delete(rooming::delete),
        )
}
