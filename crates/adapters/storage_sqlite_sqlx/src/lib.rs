//! # eatery-adapter-storage-sqlite-sqlx
//!
//! `SQLite` persistence adapter using [sqlx](https://docs.rs/sqlx).
//!
//! ## Responsibilities
//! - Implement the `RestaurantRepository` port defined in `eatery-app::ports::storage`
//! - Manage `SQLite` connection pool lifecycle
//! - Run database migrations (sqlx embedded migrations)
//! - Map between domain types and database rows
//!
//! ## Dependency rule
//! Depends on `eatery-app` (for port traits) and `eatery-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

mod error;
mod pool;
mod restaurant_repo;

pub use error::StorageError;
pub use pool::{Config, Database};
pub use restaurant_repo::SqliteRestaurantRepository;
