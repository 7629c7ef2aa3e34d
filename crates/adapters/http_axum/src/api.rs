//! JSON REST handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod restaurants;

use axum::Router;
use axum::routing::get;

use eatery_app::ports::RestaurantRepository;

use crate::state::AppState;

/// Build the `/restaurants` resource router.
pub fn routes<R>() -> Router<AppState<R>>
where
    R: RestaurantRepository + Send + Sync + 'static,
{
    Router::new()
        .route(
            "/restaurants",
            get(restaurants::list::<R>).post(restaurants::create::<R>),
        )
        .route(
            "/restaurants/{id}",
            get(restaurants::get::<R>)
                .put(restaurants::update::<R>)
                .delete(restaurants::delete::<R>),
        )
}
