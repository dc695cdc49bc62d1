//! Group (school trip) entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use tripdesk_core::group_status::{derive_status, GroupStatus, Milestones};
use tripdesk_core::types::{Date, DbId, Timestamp};
use validator::Validate;

/// A row from the `groups` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Group {
    pub id: DbId,
    pub school_name: String,
    pub group_name: String,
    pub location: String,
    pub start_date: Date,
    pub end_date: Date,
    pub registration_date: Option<Date>,
    pub director_name: Option<String>,
    pub director_email: Option<String>,
    pub bus_supplier_id: Option<DbId>,
    pub bus_count: Option<i32>,
    pub charter_number: Option<String>,
    pub transportation_cost_cents: Option<i64>,
    pub deposit_amount_cents: Option<i64>,
    pub deposit_due_date: Option<Date>,
    pub deposit_paid: bool,
    pub contract_sent: bool,
    pub contract_signed: bool,
    pub workshop_registered: bool,
    pub insurance_purchased: bool,
    pub money_collection_started: bool,
    /// Manually-set label. Display status comes from [`Group::derived_status`].
    pub status: String,
    pub notes: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Group {
    pub fn milestones(&self) -> Milestones {
        Milestones {
            contract_signed: self.contract_signed,
            contract_sent: self.contract_sent,
            money_collection_started: self.money_collection_started,
            registration_date: self.registration_date,
        }
    }

    pub fn derived_status(&self, today: Date) -> GroupStatus {
        derive_status(&self.milestones(), today)
    }

    /// Attach the status derived as of `today`.
    pub fn with_status(self, today: Date) -> GroupWithStatus {
        let derived_status = self.derived_status(today);
        GroupWithStatus {
            group: self,
            derived_status,
        }
    }
}

/// A group as returned by the API: the stored row plus its derived status.
#[derive(Debug, Clone, Serialize)]
pub struct GroupWithStatus {
    #[serde(flatten)]
    pub group: Group,
    pub derived_status: GroupStatus,
}

/// DTO for creating a new group.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateGroup {
    #[validate(length(min = 1))]
    pub school_name: String,
    #[validate(length(min = 1))]
    pub group_name: String,
    #[validate(length(min = 1))]
    pub location: String,
    pub start_date: Date,
    pub end_date: Date,
    pub registration_date: Option<Date>,
    pub director_name: Option<String>,
    #[validate(email)]
    pub director_email: Option<String>,
    pub bus_supplier_id: Option<DbId>,
    #[validate(range(min = 0, message = "must not be negative"))]
    pub bus_count: Option<i32>,
    pub charter_number: Option<String>,
    #[validate(range(min = 0, message = "must not be negative"))]
    pub transportation_cost_cents: Option<i64>,
    #[validate(range(min = 0, message = "must not be negative"))]
    pub deposit_amount_cents: Option<i64>,
    pub deposit_due_date: Option<Date>,
    /// Defaults to `false` if omitted; likewise for every milestone flag.
    pub deposit_paid: Option<bool>,
    pub contract_sent: Option<bool>,
    pub contract_signed: Option<bool>,
    pub workshop_registered: Option<bool>,
    pub insurance_purchased: Option<bool>,
    pub money_collection_started: Option<bool>,
    /// Defaults to `"pending"` if omitted.
    #[validate(length(min = 1))]
    pub status: Option<String>,
    pub notes: Option<String>,
}

/// DTO for updating an existing group. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateGroup {
    #[validate(length(min = 1))]
    pub school_name: Option<String>,
    #[validate(length(min = 1))]
    pub group_name: Option<String>,
    #[validate(length(min = 1))]
    pub location: Option<String>,
    pub start_date: Option<Date>,
    pub end_date: Option<Date>,
    pub registration_date: Option<Date>,
    pub director_name: Option<String>,
    #[validate(email)]
    pub director_email: Option<String>,
    pub bus_supplier_id: Option<DbId>,
    #[validate(range(min = 0, message = "must not be negative"))]
    pub bus_count: Option<i32>,
    pub charter_number: Option<String>,
    #[validate(range(min = 0, message = "must not be negative"))]
    pub transportation_cost_cents: Option<i64>,
    #[validate(range(min = 0, message = "must not be negative"))]
    pub deposit_amount_cents: Option<i64>,
    pub deposit_due_date: Option<Date>,
    pub deposit_paid: Option<bool>,
    pub contract_sent: Option<bool>,
    pub contract_signed: Option<bool>,
    pub workshop_registered: Option<bool>,
    pub insurance_purchased: Option<bool>,
    pub money_collection_started: Option<bool>,
    #[validate(length(min = 1))]
    pub status: Option<String>,
    pub notes: Option<String>,
}
