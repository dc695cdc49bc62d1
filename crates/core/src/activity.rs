//! Activity log vocabulary and description builders.
//!
//! Activities are append-only rows written as a side effect of group and
//! roster mutations. The strings built here are what the UI displays, so
//! they are kept in one place and unit tested.

/// Known activity types.
pub mod activity_types {
    pub const CREATED: &str = "created";
    pub const UPDATED: &str = "updated";
    pub const DELETED: &str = "deleted";
    pub const DROP_OFF: &str = "drop_off";
    pub const PROMOTION: &str = "promotion";

    pub const ALL: &[&str] = &[CREATED, UPDATED, DELETED, DROP_OFF, PROMOTION];
}

/// Reason stored on drop-off rows produced by roster deletion.
pub const ROSTER_REMOVAL_REASON: &str = "Removed from roster";

/// Note stored on roster rows produced by waiting-list promotion.
pub const PROMOTION_NOTE: &str = "Moved from waiting list";

/// Display label of a group: `"<school> - <group>"`.
pub fn group_label(school_name: &str, group_name: &str) -> String {
    format!("{school_name} - {group_name}")
}

pub fn group_created(school_name: &str, group_name: &str) -> String {
    format!(
        "New group created: {}",
        group_label(school_name, group_name)
    )
}

pub fn group_updated(school_name: &str, group_name: &str) -> String {
    format!("Group updated: {}", group_label(school_name, group_name))
}

pub fn group_deleted(school_name: &str, group_name: &str) -> String {
    format!("Group deleted: {}", group_label(school_name, group_name))
}

/// Description for a traveler moved from the roster to the drop-off list.
pub fn traveler_dropped(first_name: &str, last_name: &str, traveler_type: &str) -> String {
    format!("{first_name} {last_name} ({traveler_type}) was removed from the roster")
}

/// Description for a waiting-list entry promoted onto the roster.
pub fn traveler_promoted(first_name: &str, last_name: &str, traveler_type: &str) -> String {
    format!("{first_name} {last_name} ({traveler_type}) was moved from the waiting list to the roster")
}
