//! # eatery-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define the **port trait** that the storage adapter must implement
//!   (driven/outbound port): `RestaurantRepository`
//! - Define the **driving/inbound port** as a use-case struct:
//!   `RestaurantService` — list, get, create, update, delete, seed
//! - Own the create/update validation policy
//! - Orchestrate domain objects without knowing *how* persistence works
//!
//! ## Dependency rule
//! Depends on `eatery-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
