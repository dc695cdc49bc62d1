//! Rooming list model and DTOs.
//!
//! Room membership is stored one row per occupant in `room_occupants`; the
//! API surface flattens it to an `occupant_ids` list.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use tripdesk_core::types::{DbId, Timestamp};
use validator::Validate;

/// A row from the `rooming_list` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Room {
    pub id: DbId,
    pub group_id: DbId,
    pub room_number: String,
    pub room_type: Option<String>,
    pub occupancy: Option<i32>,
    pub gender: Option<String>,
    pub notes: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A room together with the roster ids assigned to it.
#[derive(Debug, Clone, Serialize)]
pub struct RoomWithOccupants {
    #[serde(flatten)]
    pub room: Room,
    pub occupant_ids: Vec<DbId>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateRoom {
    pub group_id: DbId,
    #[validate(length(min = 1))]
    pub room_number: String,
    pub room_type: Option<String>,
    #[validate(range(min = 1, message = "must be at least 1"))]
    pub occupancy: Option<i32>,
    pub gender: Option<String>,
    pub notes: Option<String>,
    #[serde(default)]
    pub occupant_ids: Vec<DbId>,
}

/// DTO for updating a room. A supplied `occupant_ids` replaces the whole set.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateRoom {
    #[validate(length(min = 1))]
    pub room_number: Option<String>,
    pub room_type: Option<String>,
    #[validate(range(min = 1, message = "must be at least 1"))]
    pub occupancy: Option<i32>,
    pub gender: Option<String>,
    pub notes: Option<String>,
    pub occupant_ids: Option<Vec<DbId>>,
}
