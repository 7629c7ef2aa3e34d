//! Built-in restaurants inserted into an empty database at startup.

use eatery_domain::error::EateryError;
use eatery_domain::restaurant::NewRestaurant;

const RESTAURANTS: [(&str, &str, &str); 3] = [
    ("AppleBees", "Texas", "FastFood"),
    ("LittleSheep", "Dallas", "Hotpot"),
    ("Spice Grill", "Houston", "Indian"),
];

/// Build the seed records.
///
/// # Errors
///
/// Returns [`EateryError::Validation`] if a built-in record is empty.
pub fn restaurants() -> Result<Vec<NewRestaurant>, EateryError> {
    RESTAURANTS
        .iter()
        .map(|(name, location, cuisine)| {
            NewRestaurant::builder()
                .name(*name)
                .location(*location)
                .cuisine(*cuisine)
                .build()
        })
        .collect()
}
