//! HTTP request handlers.
//!
//! Controllers extract and validate requests, invoke the auth guard where an
//! endpoint is guarded, call into the service layer, and convert domain models
//! into response DTOs. OpenAPI metadata is attached per handler with
//! `#[utoipa::path]`.

pub mod auth;
pub mod health;
pub mod slot;
