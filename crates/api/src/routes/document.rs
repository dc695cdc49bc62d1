use axum::routing::{get, post};
use axum::Router;

use crate::handlers::document;
use crate::state::AppState;

/// Document routes, merged at the `/api` root.
///
/// ```text
/// POST   /upload/document          -> upload (multipart)
/// GET    /documents/{id}           -> get_by_id
/// DELETE /documents/{id}           -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/upload/document", post(document::upload))
        .route(
            "/documents/{id}",
            get(document::get_by_id).delete(document::delete),
        )
}
