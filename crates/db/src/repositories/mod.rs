//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument. Writes that span several
//! tables open their own transaction.

pub mod action_item_repo;
pub mod activity_repo;
pub mod bus_supplier_repo;
pub mod chaperone_group_repo;
pub mod disney_experience_repo;
pub mod document_repo;
pub mod drop_off_repo;
pub mod group_repo;
pub mod itinerary_repo;
pub mod meal_repo;
pub mod rooming_repo;
pub mod roster_repo;
pub mod user_repo;
pub mod waiting_list_repo;

pub use action_item_repo::ActionItemRepo;
pub use activity_repo::ActivityRepo;
pub use bus_supplier_repo::BusSupplierRepo;
pub use chaperone_group_repo::ChaperoneGroupRepo;
pub use disney_experience_repo::DisneyExperienceRepo;
pub use document_repo::DocumentRepo;
pub use drop_off_repo::DropOffRepo;
pub use group_repo::GroupRepo;
pub use itinerary_repo::ItineraryRepo;
pub use meal_repo::MealRepo;
pub use rooming_repo::RoomingRepo;
pub use roster_repo::RosterRepo;
pub use user_repo::UserRepo;
pub use waiting_list_repo::WaitingListRepo;
