//! Disney experience (per-traveler vendor account) model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use tripdesk_core::types::{DbId, Timestamp};
use validator::Validate;

/// A row from the `disney_experiences` table. One per roster entry.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct DisneyExperience {
    pub id: DbId,
    pub roster_id: DbId,
    pub login: Option<String>,
    pub account_password: Option<String>,
    pub avatar: Option<String>,
    pub is_linked: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateDisneyExperience {
    pub roster_id: DbId,
    pub login: Option<String>,
    pub account_password: Option<String>,
    pub avatar: Option<String>,
    /// Defaults to `false` if omitted.
    pub is_linked: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateDisneyExperience {
    pub login: Option<String>,
    pub account_password: Option<String>,
    pub avatar: Option<String>,
    pub is_linked: Option<bool>,
}
