//! Action item priority and status vocabularies.

pub mod priorities {
    pub const LOW: &str = "low";
    pub const MEDIUM: &str = "medium";
    pub const HIGH: &str = "high";

    pub const ALL: &[&str] = &[LOW, MEDIUM, HIGH];
}

pub mod statuses {
    pub const OPEN: &str = "open";
    pub const IN_PROGRESS: &str = "in_progress";
    pub const DONE: &str = "done";

    pub const ALL: &[&str] = &[OPEN, IN_PROGRESS, DONE];
}
