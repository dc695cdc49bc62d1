use axum::routing::get;
use axum::Router;

use crate::handlers::dashboard;
use crate::state::AppState;

/// ```text
/// GET    /dashboard                -> summary
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/dashboard", get(dashboard::summary))
}
