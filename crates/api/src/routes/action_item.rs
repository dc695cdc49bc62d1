use axum::routing::get;
use axum::Router;

use crate::handlers::action_item;
use crate::state::AppState;

/// Routes mounted at `/action-items`.
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
        .route("/", get(action_item::list).post(action_item::create))
        .route(
            "/{id}",
            get(action_item::get_by_id).put(action_item::update).delete(action_item::delete),
        )
}
