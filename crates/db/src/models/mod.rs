//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` + `Validate` create DTO for inserts
//! - A `Deserialize` + `Validate` update DTO (all `Option` fields) for patches

pub mod action_item;
pub mod activity;
pub mod bus_supplier;
pub mod chaperone_group;
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
