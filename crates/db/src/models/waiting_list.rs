//! Waiting-list entry model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use tripdesk_core::activity::PROMOTION_NOTE;
use tripdesk_core::types::{Date, DbId, Timestamp};
use validator::Validate;

use crate::models::roster::CreateRosterEntry;

/// A row from the `waiting_list` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct WaitingListEntry {
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
    pub notes: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl WaitingListEntry {
    /// Build the roster insert used when this entry is promoted.
    ///
    /// Identity, demographic and contact fields carry over; trip logistics
    /// start empty and the notes record where the traveler came from.
    pub fn to_roster_entry(&self) -> CreateRosterEntry {
        CreateRosterEntry {
            group_id: self.group_id,
            traveler_type: self.traveler_type.clone(),
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            gender: self.gender.clone(),
            date_of_birth: self.date_of_birth,
            grade: self.grade.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            emergency_contact_name: self.emergency_contact_name.clone(),
            emergency_contact_phone: self.emergency_contact_phone.clone(),
            magic_band_color: None,
            tshirt_size: None,
            meal_choice: None,
            has_insurance: None,
            room_occupancy: None,
            requested_roommate: None,
            notes: Some(PROMOTION_NOTE.to_string()),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateWaitingListEntry {
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
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateWaitingListEntry {
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
    pub notes: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn promotion_copies_identity_and_clears_logistics() {
        let now = Utc::now();
        let entry = WaitingListEntry {
            id: 9,
            group_id: 3,
            traveler_type: "Student".into(),
            first_name: "Ana".into(),
            last_name: "Ruiz".into(),
            gender: Some("F".into()),
            date_of_birth: Date::from_ymd_opt(2010, 4, 2),
            grade: Some("9".into()),
            email: Some("ana@example.com".into()),
            phone: Some("555-0100".into()),
            emergency_contact_name: Some("Maria Ruiz".into()),
            emergency_contact_phone: Some("555-0101".into()),
            notes: Some("asked twice".into()),
            created_at: now,
            updated_at: now,
        };

        let roster = entry.to_roster_entry();
        assert_eq!(roster.group_id, 3);
        assert_eq!(roster.first_name, "Ana");
        assert_eq!(roster.email.as_deref(), Some("ana@example.com"));
        assert_eq!(roster.emergency_contact_phone.as_deref(), Some("555-0101"));
        assert!(roster.tshirt_size.is_none());
        assert!(roster.has_insurance.is_none());
        assert!(roster.requested_roommate.is_none());
        assert_eq!(roster.notes.as_deref(), Some(PROMOTION_NOTE));
    }
}
