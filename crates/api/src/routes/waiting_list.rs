use axum::routing::{get, post};
use axum::Router;

use crate::handlers::waiting_list;
use crate::state::AppState;

/// Routes mounted at `/waiting-list`.
///
/// ```text
/// POST   /                 -> create
/// GET    /{id}             -> get_by_id
/// PUT    /{id}             -> update
/// DELETE /{id}             -> delete
/// POST   /{id}/promote     -> promote
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(waiting_list::create))
        .route(
            "/{id}",
            get(waiting_list::get_by_id)
                .put(waiting_list::update)
                .delete(waiting_list::delete),
        )
        .route("/{id}/promote", post(waiting_list::promote))
}
