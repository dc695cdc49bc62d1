//! Chaperone group model and DTOs.
//!
//! Student membership is stored one row per student in
//! `chaperone_group_members`; the API surface flattens it to `student_ids`.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use tripdesk_core::types::{DbId, Timestamp};
use validator::Validate;

/// A row from the `chaperone_groups` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ChaperoneGroup {
    pub id: DbId,
    pub group_id: DbId,
    pub name: Option<String>,
    pub chaperone_id: Option<DbId>,
    pub notes: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChaperoneGroupWithStudents {
    #[serde(flatten)]
    pub chaperone_group: ChaperoneGroup,
    pub student_ids: Vec<DbId>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateChaperoneGroup {
    pub group_id: DbId,
    pub name: Option<String>,
    pub chaperone_id: Option<DbId>,
    pub notes: Option<String>,
    #[serde(default)]
    pub student_ids: Vec<DbId>,
}

/// DTO for updating a chaperone group. A supplied `student_ids` replaces the
/// whole membership set.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateChaperoneGroup {
    pub name: Option<String>,
    pub chaperone_id: Option<DbId>,
    pub notes: Option<String>,
    pub student_ids: Option<Vec<DbId>>,
}
