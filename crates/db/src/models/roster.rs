//! Roster (traveler) model and DTOs.
//!
//! Every roster row is an active traveler. Waiting-list entries and
//! drop-offs live in their own tables.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use tripdesk_core::types::{Date, DbId, Timestamp};
use validator::Validate;

/// A row from the `roster` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct RosterEntry {
    pub id: DbId,
    pub group_id: DbId,
    pub traveler_type: String,
    pub first_name: String,
    pub last_name: String,
    pub gender: Option<String>,
    pub date_of_birth: Option<Date>,
    pub grade: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub emergency_contact_name: Option<String>,
    pub emergency_contact_phone: Option<String>,
    pub magic_band_color: Option<String>,
    pub tshirt_size: Option<String>,
    pub meal_choice: Option<String>,
    pub has_insurance: Option<bool>,
    pub room_occupancy: Option<String>,
    pub requested_roommate: Option<String>,
    pub notes: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateRosterEntry {
    pub group_id: DbId,
    #[validate(length(min = 1))]
    pub traveler_type: String,
    #[validate(length(min = 1))]
    pub first_name: String,
    #[validate(length(min = 1))]
    pub last_name: String,
    pub gender: Option<String>,
    pub date_of_birth: Option<Date>,
    pub grade: Option<String>,
    #[validate(email)]
    pub email: Option<String>,
    pub phone: Option<String>,
    pub emergency_contact_name: Option<String>,
    pub emergency_contact_phone: Option<String>,
    pub magic_band_color: Option<String>,
    pub tshirt_size: Option<String>,
    pub meal_choice: Option<String>,
    pub has_insurance: Option<bool>,
    pub room_occupancy: Option<String>,
    pub requested_roommate: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateRosterEntry {
    #[validate(length(min = 1))]
    pub traveler_type: Option<String>,
    #[validate(length(min = 1))]
    pub first_name: Option<String>,
    #[validate(length(min = 1))]
    pub last_name: Option<String>,
    pub gender: Option<String>,
    pub date_of_birth: Option<Date>,
    pub grade: Option<String>,
    #[validate(email)]
    pub email: Option<String>,
    pub phone: Option<String>,
    pub emergency_contact_name: Option<String>,
    pub emergency_contact_phone: Option<String>,
    pub magic_band_color: Option<String>,
    pub tshirt_size: Option<String>,
    pub meal_choice: Option<String>,
    pub has_insurance: Option<bool>,
    pub room_occupancy: Option<String>,
    pub requested_roommate: Option<String>,
    pub notes: Option<String>,
}
