//! Drop-off model.
//!
//! Drop-offs are written only by roster deletion, so there are no create or
//! update DTOs exposed to the API.

use serde::Serialize;
use sqlx::FromRow;
use tripdesk_core::types::{DbId, Timestamp};

/// A row from the `drop_offs` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct DropOff {
    pub id: DbId,
    pub group_id: DbId,
    pub traveler_type: String,
    pub first_name: String,
    pub last_name: String,
    pub reason: String,
    pub dropped_at: Timestamp,
}
