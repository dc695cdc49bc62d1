//! Domain logic for tripdesk with no database or HTTP dependencies.

pub mod action_items;
pub mod activity;
pub mod documents;
pub mod error;
pub mod group_status;
pub mod types;
pub mod validation;
