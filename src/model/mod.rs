//! Data transfer objects shared by the API surface.
//!
//! These types define the JSON wire format of the API: request payloads,
//! response bodies, and the error body. They carry no behavior beyond
//! serialization and OpenAPI schema derivation.

pub mod api;
pub mod auth;
pub mod slot;
pub mod user;
