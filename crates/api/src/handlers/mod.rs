//! Request handlers.
//!
//! Each submodule provides async handler functions (create, list, get_by_id,
//! update, delete) for a single entity type. Handlers delegate to the
//! corresponding repository in `tripdesk_db` and map errors via [`AppError`].
//!
//! [`AppError`]: crate::error::AppError

pub mod action_item;
pub mod activity;
pub mod bus_supplier;
pub mod chaperone_group;
pub mod dashboard;
pub mod disney_experience;
pub mod document;
pub mod drop_off;
pub mod group;
pub mod itinerary;
pub mod meal;
pub mod rooming;
pub mod roster;
pub mod user;
pub mod waiting_list;

use tripdesk_core::types::{Date, DbId};
use tripdesk_core::validation::FieldError;
use tripdesk_db::repositories::RosterRepo;
use tripdesk_db::DbPool;

use crate::error::AppResult;

/// The calendar date used for status derivation and "upcoming" cut-offs.
pub(crate) fn today() -> Date {
    chrono::Utc::now().date_naive()
}

/// Deduplicate `ids` and check that each is a roster entry of `group_id`.
///
/// Returns the deduplicated, sorted ids. Any id outside the group is a field
/// error on `field`.
pub(crate) async fn check_roster_members(
    pool: &DbPool,
    group_id: DbId,
    field: &str,
    ids: &[DbId],
) -> AppResult<Vec<DbId>> {
    let mut unique = ids.to_vec();
    unique.sort_unstable();
    unique.dedup();

    if unique.is_empty() {
        return Ok(unique);
    }

    let found = RosterRepo::count_in_group(pool, group_id, &unique).await?;
    if found != unique.len() as i64 {
        return Err(FieldError::new(
            field,
            "must reference roster entries of the same group",
        )
        .into());
    }
    Ok(unique)
}
