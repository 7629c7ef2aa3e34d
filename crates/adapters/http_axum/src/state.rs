//! Shared application state for axum handlers.

use std::sync::Arc;

use eatery_app::ports::RestaurantRepository;
use eatery_app::services::restaurant_service::RestaurantService;

/// Application state shared across all axum handlers.
///
/// Generic over the repository type to avoid dynamic dispatch.
/// `Clone` is implemented manually so the repository itself does not need
/// to be `Clone` — only the `Arc` wrapper is cloned.
pub struct AppState<R> {
    /// Restaurant CRUD service.
    pub restaurant_service: Arc<RestaurantService<R>>,
}

impl<R> Clone for AppState<R> {
    fn clone(&self) -> Self {
        Self {
            restaurant_service: Arc::clone(&self.restaurant_service),
        }
    }
}

impl<R> AppState<R>
where
    R: RestaurantRepository + Send + Sync + 'static,
{
    /// Create a new application state from a service instance.
    pub fn new(restaurant_service: RestaurantService<R>) -> Self {
        Self {
            restaurant_service: Arc::new(restaurant_service),
        }
    }

    /// Create a new application state from a pre-wrapped `Arc` service.
    ///
    /// Use this when the service is shared with startup tasks (seeding)
    /// before constructing the HTTP state.
    pub fn from_arc(restaurant_service: Arc<RestaurantService<R>>) -> Self {
        Self { restaurant_service }
    }
}
