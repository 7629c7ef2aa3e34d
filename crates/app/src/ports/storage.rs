//! Storage port — repository trait for restaurant persistence.

use std::future::Future;

use eatery_domain::error::EateryError;
use eatery_domain::id::RestaurantId;
use eatery_domain::restaurant::{NewRestaurant, Restaurant, RestaurantPatch, UpdateOutcome};

/// Durable store for [`Restaurant`] records.
///
/// Implementations own identity generation: ids are assigned on
/// [`create`](Self::create), ascend with insertion order, and are never
/// reused after a delete.
pub trait RestaurantRepository {
    /// Persist a new restaurant and return it with its assigned id.
    fn create(
        &self,
        restaurant: NewRestaurant,
    ) -> impl Future<Output = Result<Restaurant, EateryError>> + Send;

    /// Get a restaurant by id.
    fn get_by_id(
        &self,
        id: RestaurantId,
    ) -> impl Future<Output = Result<Option<Restaurant>, EateryError>> + Send;

    /// List every restaurant in ascending id order.
    fn get_all(&self) -> impl Future<Output = Result<Vec<Restaurant>, EateryError>> + Send;

    /// Overwrite the provided fields of the restaurant with `id`.
    ///
    /// Reports zero affected rows, not an error, when `id` does not exist.
    fn update(
        &self,
        id: RestaurantId,
        patch: RestaurantPatch,
    ) -> impl Future<Output = Result<UpdateOutcome, EateryError>> + Send;

    /// Hard-delete the restaurant with `id`.
    fn delete(&self, id: RestaurantId) -> impl Future<Output = Result<(), EateryError>> + Send;
}
