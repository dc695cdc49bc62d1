//! Request-scoped extractors that read headers rather than the body.
//!
//! - [`actor::Actor`] -- The user an action is attributed to, from `x-user-id`.

pub mod actor;
