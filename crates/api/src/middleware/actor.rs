//! Acting-user extractor for Axum handlers.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use tripdesk_core::types::DbId;

use crate::error::AppError;
use crate::state::AppState;

/// Header carrying the id of the user performing the request.
pub const USER_ID_HEADER: &str = "x-user-id";

/// The user a write is attributed to in the activity trail.
///
/// The header is optional; when absent, activities are recorded without a
/// user. A present but non-numeric value is rejected with 400.
///
/// ```ignore
/// async fn my_handler(actor: Actor) -> AppResult<StatusCode> {
///     tracing::info!(user_id = ?actor.user_id, "handling request");
///     Ok(StatusCode::NO_CONTENT)
/// }
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Actor {
    pub user_id: Option<DbId>,
}

impl FromRequestParts<AppState> for Actor {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let Some(value) = parts.headers.get(USER_ID_HEADER) else {
            return Ok(Actor::default());
        };

        let user_id = value
            .to_str()
            .ok()
            .and_then(|v| v.trim().parse::<DbId>().ok())
            .ok_or_else(|| {
                AppError::BadRequest(format!("{USER_ID_HEADER} header must be a numeric user id"))
            })?;

        Ok(Actor {
            user_id: Some(user_id),
        })
    }
}
