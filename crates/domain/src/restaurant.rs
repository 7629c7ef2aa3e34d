//! Restaurant — the single resource exposed by eatery.
//!
//! [`Restaurant`] is a stored record. [`NewRestaurant`] is the validated
//! create payload (all fields required) and [`RestaurantPatch`] the update
//! payload (all fields optional).

use serde::Serialize;
use serde_json::Value;

use crate::error::{EateryError, ValidationError};
use crate::id::RestaurantId;
use crate::time::Timestamp;
use crate::validation::{self, Field, FieldError, Reason};

/// A stored restaurant record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Restaurant {
    pub id: RestaurantId,
    pub name: String,
    pub location: String,
    pub cuisine: String,
    #[serde(rename = "createdAt")]
    pub created_at: Timestamp,
    #[serde(rename = "updatedAt")]
    pub updated_at: Timestamp,
}

/// Fields required to create a [`Restaurant`]. Storage assigns the id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRestaurant {
    pub name: String,
    pub location: String,
    pub cuisine: String,
}

impl NewRestaurant {
    /// Create a builder for constructing a [`NewRestaurant`].
    #[must_use]
    pub fn builder() -> NewRestaurantBuilder {
        NewRestaurantBuilder::default()
    }

    /// Validate an untyped payload and build the create schema from it.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] listing every missing, empty, or
    /// structured (array/object) required field.
    pub fn from_payload(payload: &Value) -> Result<Self, ValidationError> {
        Self::extract(payload, validation::validate(payload))
    }

    /// Build the create schema checking only presence and type.
    ///
    /// Used when create-time validation is switched off: empty values are
    /// accepted but a field that is absent or has no text form still fails.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] listing every missing or non-text field.
    pub fn from_payload_allow_empty(payload: &Value) -> Result<Self, ValidationError> {
        Self::extract(payload, validation::validate_shape(payload))
    }

    fn extract(payload: &Value, errors: Vec<FieldError>) -> Result<Self, ValidationError> {
        if !errors.is_empty() {
            return Err(ValidationError::new(errors));
        }
        let text = |field: Field| {
            payload
                .get(field.as_str())
                .and_then(validation::scalar_text)
                .unwrap_or_default()
        };
        Ok(Self {
            name: text(Field::Name),
            location: text(Field::Location),
            cuisine: text(Field::Cuisine),
        })
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`EateryError::Validation`] with one entry per empty field.
    pub fn validate(&self) -> Result<(), EateryError> {
        let errors: Vec<FieldError> = [
            (Field::Name, &self.name),
            (Field::Location, &self.location),
            (Field::Cuisine, &self.cuisine),
        ]
        .into_iter()
        .filter(|(_, value)| value.is_empty())
        .map(|(field, _)| FieldError::new(field, Reason::Empty))
        .collect();

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::new(errors).into())
        }
    }
}

/// Step-by-step builder for [`NewRestaurant`].
#[derive(Debug, Default)]
pub struct NewRestaurantBuilder {
    name: Option<String>,
    location: Option<String>,
    cuisine: Option<String>,
}

impl NewRestaurantBuilder {
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    #[must_use]
    pub fn cuisine(mut self, cuisine: impl Into<String>) -> Self {
        self.cuisine = Some(cuisine.into());
        self
    }

    /// Consume the builder, validate, and return a [`NewRestaurant`].
    ///
    /// # Errors
    ///
    /// Returns [`EateryError::Validation`] if any field is missing or empty.
    pub fn build(self) -> Result<NewRestaurant, EateryError> {
        let restaurant = NewRestaurant {
            name: self.name.unwrap_or_default(),
            location: self.location.unwrap_or_default(),
            cuisine: self.cuisine.unwrap_or_default(),
        };
        restaurant.validate()?;
        Ok(restaurant)
    }
}

/// Partial update: provided fields overwrite, absent fields are untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RestaurantPatch {
    pub name: Option<String>,
    pub location: Option<String>,
    pub cuisine: Option<String>,
}

impl RestaurantPatch {
    /// Read the known fields out of an untyped payload without checking them.
    ///
    /// Unknown keys (`id`, timestamps, anything else) are ignored and `null`
    /// counts as absent. Numbers and booleans are taken in their text form;
    /// arrays and objects are dropped.
    #[must_use]
    pub fn from_payload(payload: &Value) -> Self {
        let read = |field: Field| {
            payload
                .get(field.as_str())
                .and_then(validation::scalar_text)
        };
        Self {
            name: read(Field::Name),
            location: read(Field::Location),
            cuisine: read(Field::Cuisine),
        }
    }

    /// Like [`RestaurantPatch::from_payload`], but reject provided fields
    /// that are empty or structured.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] with one entry per rejected field.
    pub fn from_payload_checked(payload: &Value) -> Result<Self, ValidationError> {
        let mut errors = Vec::new();
        let mut read = |field: Field| match validation::optional_text(payload, field, true) {
            Ok(value) => value,
            Err(reason) => {
                errors.push(FieldError::new(field, reason));
                None
            }
        };
        let patch = Self {
            name: read(Field::Name),
            location: read(Field::Location),
            cuisine: read(Field::Cuisine),
        };
        if errors.is_empty() {
            Ok(patch)
        } else {
            Err(ValidationError::new(errors))
        }
    }

    /// Overwrite the matching fields of `restaurant` with the provided values.
    pub fn apply(&self, restaurant: &mut Restaurant) {
        if let Some(name) = &self.name {
            restaurant.name.clone_from(name);
        }
        if let Some(location) = &self.location {
            restaurant.location.clone_from(location);
        }
        if let Some(cuisine) = &self.cuisine {
            restaurant.cuisine.clone_from(cuisine);
        }
    }
}

/// Result of an update as reported by storage.
///
/// An update that matches no record is not an error: it reports zero
/// affected rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateOutcome {
    pub affected_rows: u64,
}
