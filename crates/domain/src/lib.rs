//! # eatery-domain
//!
//! Pure domain model for the eatery restaurant registry.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions, timestamps
//! - Define the **Restaurant** record and the payload schemas used to create
//!   (`NewRestaurant`) and partially update (`RestaurantPatch`) it
//! - Define the **validation layer** that turns an untyped payload into a
//!   list of field-level errors
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod time;

pub mod restaurant;
pub mod validation;
