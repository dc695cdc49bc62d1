pub mod action_item;
pub mod activity;
pub mod bus_supplier;
pub mod chaperone_group;
pub mod dashboard;
pub mod disney_experience;
pub mod document;
pub mod drop_off;
pub mod group;
pub mod health;
pub mod itinerary;
pub mod meal;
pub mod rooming;
pub mod roster;
pub mod user;
pub mod waiting_list;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /dashboard                                      summary (GET)
///
/// /groups                                         list (?status=), create
/// /groups/{id}                                    get, update, delete
/// /groups/{id}/roster                             roster entries
/// /groups/{id}/itineraries                        itinerary days
/// /groups/{id}/meals                              meal plans
/// /groups/{id}/rooming                            rooms with occupants
/// /groups/{id}/chaperone-groups                   chaperone groups with students
/// /groups/{id}/waiting-list                       waiting-list entries
/// /groups/{id}/dropped                            drop-offs
/// /groups/{id}/disney-experience                  Disney accounts
/// /groups/{id}/action-items                       action items
/// /groups/{id}/documents                          uploaded documents
/// /groups/{id}/activities                         activity trail
///
/// /itineraries                                    list (?group_id=), create
/// /itineraries/{id}                               get, update, delete
///
/// /bus-suppliers                                  list, create
/// /bus-suppliers/{id}                             get, update, delete
/// /bus-suppliers/{id}/groups                      groups using the supplier
///
/// /meals                                          list (?group_id=), create
/// /meals/{id}                                     get, update, delete
///
/// /roster                                         create
/// /roster/{id}                                    get, update, delete (to drop-offs)
///
/// /waiting-list                                   create
/// /waiting-list/{id}                              get, update, delete
/// /waiting-list/{id}/promote                      promote to roster (POST)
///
/// /drop-offs/{id}                                 get, delete
///
/// /rooming                                        list (?group_id=), create
/// /rooming/{id}                                   get, update, delete
///
/// /chaperone-groups                               list (?group_id=), create
/// /chaperone-groups/{id}                          get, update, delete
///
/// /disney-experience                              create
/// /disney-experience/{id}                         get, update, delete
///
/// /action-items                                   list (?group_id=), create
/// /action-items/{id}                              get, update, delete
///
/// /activities                                     feed (?group_id=&limit=&offset=)
///
/// /upload/document                                multipart upload (POST)
/// /documents/{id}                                 get, delete
///
/// /users                                          list, create
/// /users/{id}                                     get
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(dashboard::router())
        .nest("/groups", group::router())
        .nest("/itineraries", itinerary::router())
        .nest("/bus-suppliers", bus_supplier::router())
        .nest("/meals", meal::router())
        .nest("/roster", roster::router())
        .nest("/waiting-list", waiting_list::router())
        .nest("/drop-offs", drop_off::router())
        .nest("/rooming", rooming::router())
        .nest("/chaperone-groups", chaperone_group::router())
        .nest("/disney-experience", disney_experience::router())
        .nest("/action-items", action_item::router())
        .nest("/activities", activity::router())
        .merge(document::router())
        .nest("/users", user::router())
}
