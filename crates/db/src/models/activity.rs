//! Activity (audit trail) model.
//!
//! Activities are immutable once written and have no `updated_at`.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use tripdesk_core::types::{DbId, Timestamp};

/// A row from the `activities` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Activity {
    pub id: DbId,
    pub group_id: Option<DbId>,
    pub activity_type: String,
    pub description: String,
    pub user_id: Option<DbId>,
    pub created_at: Timestamp,
}

/// A new activity to append. Only built internally by repositories.
#[derive(Debug, Clone)]
pub struct CreateActivity {
    pub group_id: Option<DbId>,
    pub activity_type: &'static str,
    pub description: String,
    pub user_id: Option<DbId>,
}

/// Filter and pagination parameters for the activity feed.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ActivityQuery {
    pub group_id: Option<DbId>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}
