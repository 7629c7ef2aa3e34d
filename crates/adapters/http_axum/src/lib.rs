//! # eatery-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the `/restaurants` JSON resource (list, get, create, update, delete)
//! - Accept request bodies as JSON or urlencoded forms
//! - Map HTTP requests into application service calls (driving adapter)
//! - Map application results and errors into HTTP status codes and bodies
//!
//! ## Dependency rule
//! Depends on `eatery-app` (for port traits and services) and `eatery-domain`
//! (for domain types used in request/response mapping). Never leaks axum types
//! into the domain.

pub mod api;
pub mod error;
pub mod payload;
pub mod router;
pub mod state;
