//! Restaurant service — use-cases behind the `/restaurants` resource.

use serde_json::Value;

use eatery_domain::error::{EateryError, NotFoundError};
use eatery_domain::id::RestaurantId;
use eatery_domain::restaurant::{NewRestaurant, Restaurant, RestaurantPatch, UpdateOutcome};

use crate::ports::RestaurantRepository;

/// Which mutations run field validation before reaching storage.
///
/// Create is strict and update is loose by default: an update may carry any
/// subset of fields, including empty ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationPolicy {
    /// Reject empty required fields on create.
    pub validate_on_create: bool,
    /// Reject empty or structured provided fields on update.
    pub validate_on_update: bool,
}

impl Default for ValidationPolicy {
    fn default() -> Self {
        Self {
            validate_on_create: true,
            validate_on_update: false,
        }
    }
}

/// Application service for restaurant CRUD operations.
pub struct RestaurantService<R> {
    repo: R,
    policy: ValidationPolicy,
}

impl<R: RestaurantRepository> RestaurantService<R> {
    /// Create a new service backed by the given repository, using the
    /// default [`ValidationPolicy`].
    pub fn new(repo: R) -> Self {
        Self::with_policy(repo, ValidationPolicy::default())
    }

    /// Create a new service with an explicit validation policy.
    pub fn with_policy(repo: R, policy: ValidationPolicy) -> Self {
        Self { repo, policy }
    }

    /// List all restaurants in insertion order.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn list_restaurants(&self) -> Result<Vec<Restaurant>, EateryError> {
        self.repo.get_all().await
    }

    /// Look up a restaurant by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`EateryError::NotFound`] when no restaurant with `id` exists,
    /// or a storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn get_restaurant(&self, id: RestaurantId) -> Result<Restaurant, EateryError> {
        self.repo.get_by_id(id).await?.ok_or_else(|| not_found(id))
    }

    /// Validate `payload`, persist it, and return the whole updated collection.
    ///
    /// Nothing is written when validation fails.
    ///
    /// # Errors
    ///
    /// Returns [`EateryError::Validation`] listing every failing field, or a
    /// storage error from the repository.
    #[tracing::instrument(skip_all)]
    pub async fn create_restaurant(&self, payload: &Value) -> Result<Vec<Restaurant>, EateryError> {
        let new = if self.policy.validate_on_create {
            NewRestaurant::from_payload(payload)?
        } else {
            NewRestaurant::from_payload_allow_empty(payload)?
        };

        let created = self.repo.create(new).await?;
        tracing::info!(id = %created.id, name = %created.name, "restaurant created");

        self.repo.get_all().await
    }

    /// Apply the fields of `payload` as a partial update and return the
    /// storage outcome.
    ///
    /// An unknown `id` is not an error; the outcome reports zero rows. With
    /// update validation off, the payload is taken as-is.
    ///
    /// # Errors
    ///
    /// Returns [`EateryError::Validation`] when update validation is enabled
    /// and a provided field is empty or structured, or a storage error from
    /// the repository.
    #[tracing::instrument(skip(self, payload))]
    pub async fn update_restaurant(
        &self,
        id: RestaurantId,
        payload: &Value,
    ) -> Result<UpdateOutcome, EateryError> {
        let patch = if self.policy.validate_on_update {
            RestaurantPatch::from_payload_checked(payload)?
        } else {
            RestaurantPatch::from_payload(payload)
        };

        let outcome = self.repo.update(id, patch).await?;
        tracing::debug!(affected_rows = outcome.affected_rows, "restaurant update applied");
        Ok(outcome)
    }

    /// Delete a restaurant by id after checking that it exists.
    ///
    /// # Errors
    ///
    /// Returns [`EateryError::NotFound`] when no restaurant with `id` exists,
    /// or a storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn delete_restaurant(&self, id: RestaurantId) -> Result<(), EateryError> {
        if self.repo.get_by_id(id).await?.is_none() {
            return Err(not_found(id));
        }
        self.repo.delete(id).await?;
        tracing::info!("restaurant deleted");
        Ok(())
    }

    /// Insert `restaurants` when the collection is empty.
    ///
    /// Returns how many records were inserted (zero when data already exists).
    ///
    /// # Errors
    ///
    /// Returns [`EateryError::Validation`] if a seed record is empty, or a
    /// storage error from the repository.
    #[tracing::instrument(skip_all, fields(count = restaurants.len()))]
    pub async fn seed(&self, restaurants: Vec<NewRestaurant>) -> Result<usize, EateryError> {
        if !self.repo.get_all().await?.is_empty() {
            tracing::debug!("collection not empty, skipping seed");
            return Ok(0);
        }

        let count = restaurants.len();
        for restaurant in restaurants {
            restaurant.validate()?;
            self.repo.create(restaurant).await?;
        }
        tracing::info!("seeded restaurants");
        Ok(count)
    }
}

fn not_found(id: RestaurantId) -> EateryError {
    NotFoundError {
        entity: "Restaurant",
        id: id.to_string(),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use eatery_domain::time;
    use eatery_domain::validation::{Field, Reason};
    use serde_json::json;
    use std::future::Future;
    use std::sync::Mutex;

    #[derive(Default)]
    struct InMemoryRestaurantRepo {
        store: Mutex<(i64, Vec<Restaurant>)>,
    }

    impl RestaurantRepository for InMemoryRestaurantRepo {
        fn create(
            &self,
            restaurant: NewRestaurant,
        ) -> impl Future<Output = Result<Restaurant, EateryError>> + Send {
            let mut store = self.store.lock().unwrap();
            store.0 += 1;
            let now = time::now();
            let created = Restaurant {
                id: RestaurantId::from_raw(store.0),
                name: restaurant.name,
                location: restaurant.location,
                cuisine: restaurant.cuisine,
                created_at: now,
                updated_at: now,
            };
            store.1.push(created.clone());
            async { Ok(created) }
        }

        fn get_by_id(
            &self,
            id: RestaurantId,
        ) -> impl Future<Output = Result<Option<Restaurant>, EateryError>> + Send {
            let store = self.store.lock().unwrap();
            let result = store.1.iter().find(|r| r.id == id).cloned();
            async { Ok(result) }
        }

        fn get_all(&self) -> impl Future<Output = Result<Vec<Restaurant>, EateryError>> + Send {
            let store = self.store.lock().unwrap();
            let result = store.1.clone();
            async { Ok(result) }
        }

        fn update(
            &self,
            id: RestaurantId,
            patch: RestaurantPatch,
        ) -> impl Future<Output = Result<UpdateOutcome, EateryError>> + Send {
            let mut store = self.store.lock().unwrap();
            let mut affected_rows = 0;
            if let Some(restaurant) = store.1.iter_mut().find(|r| r.id == id) {
                patch.apply(restaurant);
                affected_rows = 1;
            }
            async move { Ok(UpdateOutcome { affected_rows }) }
        }

        fn delete(&self, id: RestaurantId) -> impl Future<Output = Result<(), EateryError>> + Send {
            let mut store = self.store.lock().unwrap();
            store.1.retain(|r| r.id != id);
            async { Ok(()) }
        }
    }

    fn make_service() -> RestaurantService<InMemoryRestaurantRepo> {
        RestaurantService::new(InMemoryRestaurantRepo::default())
    }

    fn applebees() -> NewRestaurant {
        NewRestaurant::builder()
            .name("AppleBees")
            .location("Texas")
            .cuisine("FastFood")
            .build()
            .unwrap()
    }

    async fn seeded_service() -> RestaurantService<InMemoryRestaurantRepo> {
        let svc = make_service();
        svc.seed(vec![applebees()]).await.unwrap();
        svc
    }

    #[tokio::test]
    async fn should_return_whole_collection_after_create() {
        let svc = seeded_service().await;

        let all = svc
            .create_restaurant(&json!({"name": "BeefyBoys", "location": "Shrewsbury", "cuisine": "BBQ"}))
            .await
            .unwrap();

        assert_eq!(all.len(), 2);
        assert_eq!(all[1].name, "BeefyBoys");
        assert_eq!(all[1].id, RestaurantId::from_raw(2));
    }

    #[tokio::test]
    async fn should_reject_create_with_every_missing_field_and_not_persist() {
        let svc = seeded_service().await;

        let result = svc.create_restaurant(&json!({"location": "Norwich"})).await;
        let Err(EateryError::Validation(err)) = result else {
            panic!("expected validation error");
        };
        let fields: Vec<Field> = err.errors.iter().map(|e| e.field).collect();
        assert_eq!(fields, vec![Field::Name, Field::Cuisine]);

        assert_eq!(svc.list_restaurants().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn should_accept_empty_fields_on_create_when_policy_allows() {
        let svc = RestaurantService::with_policy(
            InMemoryRestaurantRepo::default(),
            ValidationPolicy {
                validate_on_create: false,
                validate_on_update: false,
            },
        );

        let all = svc
            .create_restaurant(&json!({"name": "", "location": "x", "cuisine": "y"}))
            .await
            .unwrap();
        assert_eq!(all.len(), 1);

        let result = svc.create_restaurant(&json!({"name": "n"})).await;
        assert!(matches!(result, Err(EateryError::Validation(_))));
    }

    #[tokio::test]
    async fn should_return_not_found_when_restaurant_missing() {
        let svc = make_service();
        let result = svc.get_restaurant(RestaurantId::from_raw(99)).await;
        assert!(matches!(result, Err(EateryError::NotFound(_))));
    }

    #[tokio::test]
    async fn should_get_same_record_as_list() {
        let svc = seeded_service().await;
        let listed = svc.list_restaurants().await.unwrap();
        let fetched = svc.get_restaurant(listed[0].id).await.unwrap();
        assert_eq!(fetched, listed[0]);
    }

    #[tokio::test]
    async fn should_update_only_submitted_fields() {
        let svc = seeded_service().await;
        let id = RestaurantId::from_raw(1);

        let outcome = svc
            .update_restaurant(id, &json!({"location": "LA"}))
            .await
            .unwrap();
        assert_eq!(outcome.affected_rows, 1);

        let fetched = svc.get_restaurant(id).await.unwrap();
        assert_eq!(fetched.location, "LA");
        assert_eq!(fetched.name, "AppleBees");
        assert_eq!(fetched.cuisine, "FastFood");
    }

    #[tokio::test]
    async fn should_report_zero_rows_when_updating_unknown_id() {
        let svc = seeded_service().await;
        let outcome = svc
            .update_restaurant(RestaurantId::from_raw(42), &json!({}))
            .await
            .unwrap();
        assert_eq!(outcome.affected_rows, 0);
    }

    #[tokio::test]
    async fn should_take_update_payload_as_is_by_default() {
        let svc = seeded_service().await;
        let id = RestaurantId::from_raw(1);

        let outcome = svc
            .update_restaurant(id, &json!({"name": "", "location": 7, "cuisine": [1]}))
            .await
            .unwrap();
        assert_eq!(outcome.affected_rows, 1);

        let fetched = svc.get_restaurant(id).await.unwrap();
        assert_eq!(fetched.name, "");
        assert_eq!(fetched.location, "7");
        assert_eq!(fetched.cuisine, "FastFood");
    }

    #[tokio::test]
    async fn should_reject_empty_update_fields_when_enabled() {
        let strict = RestaurantService::with_policy(
            InMemoryRestaurantRepo::default(),
            ValidationPolicy {
                validate_on_create: true,
                validate_on_update: true,
            },
        );
        strict.seed(vec![applebees()]).await.unwrap();

        let result = strict
            .update_restaurant(RestaurantId::from_raw(1), &json!({"name": ""}))
            .await;
        let Err(EateryError::Validation(err)) = result else {
            panic!("expected validation error");
        };
        assert_eq!(err.errors[0].field, Field::Name);
        assert_eq!(err.errors[0].reason, Reason::Empty);
        assert_eq!(
            strict.get_restaurant(RestaurantId::from_raw(1)).await.unwrap().name,
            "AppleBees"
        );
    }

    #[tokio::test]
    async fn should_delete_existing_restaurant() {
        let svc = seeded_service().await;
        let id = RestaurantId::from_raw(1);

        svc.delete_restaurant(id).await.unwrap();

        assert!(svc.list_restaurants().await.unwrap().is_empty());
        assert!(matches!(
            svc.get_restaurant(id).await,
            Err(EateryError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn should_return_not_found_when_deleting_missing_and_keep_collection() {
        let svc = seeded_service().await;
        let result = svc.delete_restaurant(RestaurantId::from_raw(5)).await;
        assert!(matches!(result, Err(EateryError::NotFound(_))));
        assert_eq!(svc.list_restaurants().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn should_not_reuse_id_after_delete() {
        let svc = seeded_service().await;
        svc.delete_restaurant(RestaurantId::from_raw(1)).await.unwrap();

        let all = svc
            .create_restaurant(&json!({"name": "Jive", "location": "Norwich", "cuisine": "Mexican"}))
            .await
            .unwrap();
        assert_eq!(all[0].id, RestaurantId::from_raw(2));
    }

    #[tokio::test]
    async fn should_seed_only_when_empty() {
        let svc = make_service();
        assert_eq!(svc.seed(vec![applebees()]).await.unwrap(), 1);
        assert_eq!(svc.seed(vec![applebees()]).await.unwrap(), 0);
        assert_eq!(svc.list_restaurants().await.unwrap().len(), 1);
    }

    #[test]
    fn should_default_to_strict_create_and_loose_update() {
        let policy = ValidationPolicy::default();
        assert!(policy.validate_on_create);
        assert!(!policy.validate_on_update);
    }
}
