use axum::routing::get;
use axum::Router;

use crate::handlers::chaperone_group;
use crate::state::AppState;

/// Routes mounted at `/chaperone-groups`.
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
        .route("/", get(chaperone_group::list).post(chaperone_group::create))
        .route(
            "/{id}",
            get(chaperone_group::get_by_id).put(chaperone_group::update).delete(chaperone_group::delete),
        )
}
