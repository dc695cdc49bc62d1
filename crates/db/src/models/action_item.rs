//! Action item (todo) model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use tripdesk_core::types::{Date, DbId, Timestamp};
use validator::Validate;

/// A row from the `action_items` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ActionItem {
    pub id: DbId,
    pub group_id: Option<DbId>,
    pub title: String,
    pub description: Option<String>,
    pub due_date: Option<Date>,
    pub priority: String,
    pub status: String,
    pub assigned_to: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating an action item. `priority` defaults to `"medium"`,
/// `status` to `"open"`.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateActionItem {
    pub group_id: Option<DbId>,
    #[validate(length(min = 1))]
    pub title: String,
    pub description: Option<String>,
    pub due_date: Option<Date>,
    pub priority: Option<String>,
    pub status: Option<String>,
    pub assigned_to: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateActionItem {
    pub group_id: Option<DbId>,
    #[validate(length(min = 1))]
    pub title: Option<String>,
    pub description: Option<String>,
    pub due_date: Option<Date>,
    pub priority: Option<String>,
    pub status: Option<String>,
    pub assigned_to: Option<String>,
}
