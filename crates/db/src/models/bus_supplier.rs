//! Bus supplier (transportation vendor) model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use tripdesk_core::types::{DbId, Timestamp};
use validator::Validate;

/// A row from the `bus_suppliers` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct BusSupplier {
    pub id: DbId,
    pub name: String,
    pub address: Option<String>,
    pub website: Option<String>,
    pub contact_name: Option<String>,
    pub contact_phone: Option<String>,
    pub contact_email: Option<String>,
    pub available_buses: Option<i32>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateBusSupplier {
    #[validate(length(min = 1))]
    pub name: String,
    pub address: Option<String>,
    #[validate(url)]
    pub website: Option<String>,
    pub contact_name: Option<String>,
    pub contact_phone: Option<String>,
    #[validate(email)]
    pub contact_email: Option<String>,
    #[validate(range(min = 0, message = "must not be negative"))]
    pub available_buses: Option<i32>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateBusSupplier {
    #[validate(length(min = 1))]
    pub name: Option<String>,
    pub address: Option<String>,
    #[validate(url)]
    pub website: Option<String>,
    pub contact_name: Option<String>,
    pub contact_phone: Option<String>,
    #[validate(email)]
    pub contact_email: Option<String>,
    #[validate(range(min = 0, message = "must not be negative"))]
    pub available_buses: Option<i32>,
}
