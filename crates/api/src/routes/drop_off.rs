use axum::routing::get;
use axum::Router;

use crate::handlers::drop_off;
use crate::state::AppState;

/// Routes mounted at `/drop-offs`.
///
/// ```text
/// GET    /{id}             -> get_by_id
/// DELETE /{id}             -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/{id}", get(drop_off::get_by_id).delete(drop_off::delete))
}
