use axum::routing::{get, post};
use axum::Router;

use crate::handlers::disney_experience;
use crate::state::AppState;

/// Routes mounted at `/disney-experience`.
///
/// ```text
/// POST   /                 -> create
/// GET    /{id}             -> get_by_id
/// PUT    /{id}             -> update
/// DELETE /{id}             -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", post(disney_experience::create)).route(
        "/{id}",
        get(disney_experience::get_by_id)
            .put(disney_experience::update)
            .delete(disney_experience::delete),
    )
}
