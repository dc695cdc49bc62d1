//! Shared query parameter types for API handlers.

use serde::Deserialize;
use tripdesk_core::types::DbId;

/// Optional `?group_id=` filter for list endpoints.
#[derive(Debug, Default, Deserialize)]
pub struct GroupFilter {
    pub group_id: Option<DbId>,
}

/// Query parameters for `GET /api/groups`.
#[derive(Debug, Default, Deserialize)]
pub struct GroupListParams {
    /// Derived status to filter by (e.g. `contract_sent`).
    pub status: Option<String>,
}
