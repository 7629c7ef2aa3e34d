//! JSON REST handlers for restaurants.
//!
//! A path id that does not parse as an integer is handled like an id with
//! no matching record.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use eatery_app::ports::RestaurantRepository;
use eatery_domain::error::EateryError;
use eatery_domain::id::RestaurantId;
use eatery_domain::restaurant::{Restaurant, UpdateOutcome};

use crate::error::{ApiError, ErrorBody};
use crate::payload::Payload;
use crate::state::AppState;

const GET_NOT_FOUND: &str = "restaurant not found";
const DELETE_NOT_FOUND: &str = "Restaurant not found";

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<Restaurant>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the get endpoint.
pub enum GetResponse {
    Ok(Json<Restaurant>),
    NotFound,
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
            Self::NotFound => {
                (StatusCode::NOT_FOUND, ErrorBody::message(GET_NOT_FOUND)).into_response()
            }
        }
    }
}

/// Possible responses from the create endpoint.
///
/// A successful create answers with the whole collection, not only the
/// new record.
pub enum CreateResponse {
    Created(Json<Vec<Restaurant>>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
        }
    }
}

/// Possible responses from the update endpoint.
pub enum UpdateResponse {
    Ok(Json<UpdateOutcome>),
}

impl IntoResponse for UpdateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the delete endpoint.
pub enum DeleteResponse {
    NoContent,
    NotFound,
}

impl IntoResponse for DeleteResponse {
    fn into_response(self) -> Response {
        match self {
            Self::NoContent => StatusCode::NO_CONTENT.into_response(),
            Self::NotFound => {
                (StatusCode::NOT_FOUND, ErrorBody::message(DELETE_NOT_FOUND)).into_response()
            }
        }
    }
}

/// `GET /restaurants`
pub async fn list<R>(State(state): State<AppState<R>>) -> Result<ListResponse, ApiError>
where
    R: RestaurantRepository + Send + Sync + 'static,
{
    let restaurants = state.restaurant_service.list_restaurants().await?;
    Ok(ListResponse::Ok(Json(restaurants)))
}

/// `GET /restaurants/:id`
pub async fn get<R>(
    State(state): State<AppState<R>>,
    Path(id): Path<String>,
) -> Result<GetResponse, ApiError>
where
    R: RestaurantRepository + Send + Sync + 'static,
{
    let Ok(id) = id.parse::<RestaurantId>() else {
        return Ok(GetResponse::NotFound);
    };
    match state.restaurant_service.get_restaurant(id).await {
        Ok(restaurant) => Ok(GetResponse::Ok(Json(restaurant))),
        Err(EateryError::NotFound(_)) => Ok(GetResponse::NotFound),
        Err(err) => Err(err.into()),
    }
}

/// `POST /restaurants`
pub async fn create<R>(
    State(state): State<AppState<R>>,
    Payload(payload): Payload,
) -> Result<CreateResponse, ApiError>
where
    R: RestaurantRepository + Send + Sync + 'static,
{
    let restaurants = state.restaurant_service.create_restaurant(&payload).await?;
    Ok(CreateResponse::Created(Json(restaurants)))
}

/// `PUT /restaurants/:id`
pub async fn update<R>(
    State(state): State<AppState<R>>,
    Path(id): Path<String>,
    Payload(payload): Payload,
) -> Result<UpdateResponse, ApiError>
where
    R: RestaurantRepository + Send + Sync + 'static,
{
    let Ok(id) = id.parse::<RestaurantId>() else {
        return Ok(UpdateResponse::Ok(Json(UpdateOutcome { affected_rows: 0 })));
    };
    let outcome = state
        .restaurant_service
        .update_restaurant(id, &payload)
        .await?;
    Ok(UpdateResponse::Ok(Json(outcome)))
}

/// `DELETE /restaurants/:id`
///
/// The deletion is awaited before the 204 is produced.
pub async fn delete<R>(
    State(state): State<AppState<R>>,
    Path(id): Path<String>,
) -> Result<DeleteResponse, ApiError>
where
    R: RestaurantRepository + Send + Sync + 'static,
{
    let Ok(id) = id.parse::<RestaurantId>() else {
        return Ok(DeleteResponse::NotFound);
    };
    match state.restaurant_service.delete_restaurant(id).await {
        Ok(()) => Ok(DeleteResponse::NoContent),
        Err(EateryError::NotFound(_)) => Ok(DeleteResponse::NotFound),
        Err(err) => Err(err.into()),
    }
}
