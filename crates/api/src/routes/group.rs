//! Route definitions for the `/groups` resource.
//!
//! Also mounts the per-group list endpoints of the child resources.

use axum::routing::get;
use axum::Router;

use crate::handlers::{
    action_item, activity, chaperone_group, disney_experience, document, drop_off, group,
    itinerary, meal, rooming, roster, waiting_list,
};
use crate::state::AppState;

/// Routes mounted at `/groups`.
///
/// ```text
/// GET    /                          -> list
/// POST   /                          -> create
/// GET    /{id}                      -> get_by_id
/// PUT    /{id}                      -> update
/// DELETE /{id}                      -> delete
///
/// GET    /{id}/roster               -> roster::list_by_group
/// GET    /{id}/itineraries          -> itinerary::list_by_group
/// GET    /{id}/meals                -> meal::list_by_group
/// GET    /{id}/rooming              -> rooming::list_by_group
/// GET    /{id}/chaperone-groups     -> chaperone_group::list_by_group
/// GET    /{id}/waiting-list         -> waiting_list::list_by_group
/// GET    /{id}/dropped              -> drop_off::list_by_group
/// GET    /{id}/disney-experience    -> disney_experience::list_by_group
/// GET    /{id}/action-items         -> action_item::list_by_group
/// GET    /{id}/documents            -> document::list_by_group
/// GET    /{id}/activities           -> activity::list_by_group
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(group::list).post(group::create))
        .route(
            "/{id}",
            get(group::get_by_id).put(group::update).delete(group::delete),
        )
        .route("/{id}/roster", get(roster::list_by_group))
        .route("/{id}/itineraries", get(itinerary::list_by_group))
        .route("/{id}/meals", get(meal::list_by_group))
        .route("/{id}/rooming", get(rooming::list_by_group))
        .route("/{id}/chaperone-groups", get(chaperone_group::list_by_group))
        .route("/{id}/waiting-list", get(waiting_list::list_by_group))
        .route("/{id}/dropped", get(drop_off::list_by_group))
        .route("/{id}/disney-experience", get(disney_experience::list_by_group))
        .route("/{id}/action-items", get(action_item::list_by_group))
        .route("/{id}/documents", get(document::list_by_group))
        .route("/{id}/activities", get(activity::list_by_group))
}
