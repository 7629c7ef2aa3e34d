//! `SQLite` implementation of [`RestaurantRepository`].

use std::future::Future;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use eatery_app::ports::RestaurantRepository;
use eatery_domain::error::EateryError;
use eatery_domain::id::RestaurantId;
use eatery_domain::restaurant::{NewRestaurant, Restaurant, RestaurantPatch, UpdateOutcome};
use eatery_domain::time::{self, Timestamp};

use crate::error::StorageError;

/// Wrapper for converting database rows into domain [`Restaurant`].
struct Wrapper(Restaurant);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<Restaurant> {
        value.map(|w| w.0)
    }
}

fn decode_timestamp(row: &SqliteRow, column: &str) -> Result<Timestamp, sqlx::Error> {
    let raw: String = row.try_get(column)?;
    chrono::DateTime::parse_from_rfc3339(&raw)
        .map(|ts| ts.with_timezone(&chrono::Utc))
        .map_err(|err| sqlx::Error::Decode(Box::new(err)))
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: i64 = row.try_get("id")?;

        Ok(Self(Restaurant {
            id: RestaurantId::from_raw(id),
            name: row.try_get("name")?,
            location: row.try_get("location")?,
            cuisine: row.try_get("cuisine")?,
            created_at: decode_timestamp(row, "created_at")?,
            updated_at: decode_timestamp(row, "updated_at")?,
        }))
    }
}

const INSERT: &str = "INSERT INTO restaurants (name, location, cuisine, created_at, updated_at) VALUES (?, ?, ?, ?, ?)";
const SELECT_BY_ID: &str = "SELECT * FROM restaurants WHERE id = ?";
const SELECT_ALL: &str = "SELECT * FROM restaurants ORDER BY id ASC";
const UPDATE: &str = r"
    UPDATE restaurants
    SET name = COALESCE(?, name),
        location = COALESCE(?, location),
        cuisine = COALESCE(?, cuisine),
        updated_at = ?
    WHERE id = ?
";
const DELETE_BY_ID: &str = "DELETE FROM restaurants WHERE id = ?";

/// `SQLite`-backed restaurant repository.
///
/// Ids come from an `AUTOINCREMENT` primary key, so they ascend with
/// insertion order and are never handed out twice.
pub struct SqliteRestaurantRepository {
    pool: SqlitePool,
}

impl SqliteRestaurantRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl RestaurantRepository for SqliteRestaurantRepository {
    fn create(
        &self,
        restaurant: NewRestaurant,
    ) -> impl Future<Output = Result<Restaurant, EateryError>> + Send {
        let pool = self.pool.clone();
        async move {
            let now = time::now();
            let stamp = time::to_rfc3339(now);
            let result = sqlx::query(INSERT)
                .bind(&restaurant.name)
                .bind(&restaurant.location)
                .bind(&restaurant.cuisine)
                .bind(&stamp)
                .bind(&stamp)
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(Restaurant {
                id: RestaurantId::from_raw(result.last_insert_rowid()),
                name: restaurant.name,
                location: restaurant.location,
                cuisine: restaurant.cuisine,
                created_at: now,
                updated_at: now,
            })
        }
    }

    fn get_by_id(
        &self,
        id: RestaurantId,
    ) -> impl Future<Output = Result<Option<Restaurant>, EateryError>> + Send {
        let pool = self.pool.clone();
        async move {
            let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_ID)
                .bind(id.as_raw())
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(Wrapper::maybe(row))
        }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<Restaurant>, EateryError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }

    fn update(
        &self,
        id: RestaurantId,
        patch: RestaurantPatch,
    ) -> impl Future<Output = Result<UpdateOutcome, EateryError>> + Send {
        let pool = self.pool.clone();
        async move {
            let result = sqlx::query(UPDATE)
                .bind(patch.name)
                .bind(patch.location)
                .bind(patch.cuisine)
                .bind(time::to_rfc3339(time::now()))
                .bind(id.as_raw())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(UpdateOutcome {
                affected_rows: result.rows_affected(),
            })
        }
    }

    fn delete(&self, id: RestaurantId) -> impl Future<Output = Result<(), EateryError>> + Send {
        let pool = self.pool.clone();
        async move {
            sqlx::query(DELETE_BY_ID)
                .bind(id.as_raw())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::Config;

    async fn setup() -> SqliteRestaurantRepository {
        let db = Config {
            database_url: "sqlite::memory:".to_string(),
        }
        .build()
        .await
        .unwrap();
        db.restaurants()
    }

    fn restaurant(name: &str, location: &str, cuisine: &str) -> NewRestaurant {
        NewRestaurant::builder()
            .name(name)
            .location(location)
            .cuisine(cuisine)
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn should_create_and_retrieve_restaurant() {
        let repo = setup().await;

        let created = repo
            .create(restaurant("AppleBees", "Texas", "FastFood"))
            .await
            .unwrap();
        assert_eq!(created.id, RestaurantId::from_raw(1));

        let fetched = repo.get_by_id(created.id).await.unwrap().unwrap();
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn should_return_none_when_restaurant_not_found() {
        let repo = setup().await;
        let result = repo.get_by_id(RestaurantId::from_raw(7)).await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn should_list_in_insertion_order() {
        let repo = setup().await;
        repo.create(restaurant("AppleBees", "Texas", "FastFood"))
            .await
            .unwrap();
        repo.create(restaurant("LittleSheep", "Dallas", "Hotpot"))
            .await
            .unwrap();

        let all = repo.get_all().await.unwrap();
        let names: Vec<&str> = all.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["AppleBees", "LittleSheep"]);
        assert!(all[0].id < all[1].id);
    }

    #[tokio::test]
    async fn should_update_only_provided_fields() {
        let repo = setup().await;
        let created = repo
            .create(restaurant("AppleBees", "Texas", "FastFood"))
            .await
            .unwrap();

        let outcome = repo
            .update(
                created.id,
                RestaurantPatch {
                    location: Some("LA".to_string()),
                    ..RestaurantPatch::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(outcome.affected_rows, 1);

        let fetched = repo.get_by_id(created.id).await.unwrap().unwrap();
        assert_eq!(fetched.name, "AppleBees");
        assert_eq!(fetched.location, "LA");
        assert_eq!(fetched.cuisine, "FastFood");
        assert_eq!(fetched.created_at, created.created_at);
        assert!(fetched.updated_at >= created.updated_at);
    }

    #[tokio::test]
    async fn should_report_zero_rows_when_updating_missing_id() {
        let repo = setup().await;
        let outcome = repo
            .update(
                RestaurantId::from_raw(3),
                RestaurantPatch {
                    name: Some("Ghost".to_string()),
                    ..RestaurantPatch::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(outcome.affected_rows, 0);
        assert!(repo.get_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn should_delete_restaurant_when_exists() {
        let repo = setup().await;
        let created = repo
            .create(restaurant("AppleBees", "Texas", "FastFood"))
            .await
            .unwrap();

        repo.delete(created.id).await.unwrap();

        assert!(repo.get_by_id(created.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn should_never_reuse_deleted_id() {
        let repo = setup().await;
        repo.create(restaurant("A", "B", "C")).await.unwrap();
        let second = repo.create(restaurant("D", "E", "F")).await.unwrap();
        repo.delete(second.id).await.unwrap();

        let third = repo.create(restaurant("G", "H", "I")).await.unwrap();
        assert_eq!(third.id, RestaurantId::from_raw(3));
    }
}
