//! Links into an external map search.
//!
//! Maps are never rendered in the application itself.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::entities::*;

pub const MAP_SEARCH_URL: &str = "https://www.google.com/maps/search/?api=1&query=";

/// Characters left as they are by JavaScript's `encodeURIComponent`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

pub fn map_search_url(query: &str) -> String {
    let encoded_query = utf8_percent_encode(query, URI_COMPONENT);
    format!("{MAP_SEARCH_URL}{encoded_query}")
}

pub fn restaurant_query(restaurant: &Restaurant) -> String {
    format!(
        "{}, {}, {}",
        restaurant.name,
        restaurant.address_or_empty(),
        restaurant.city
    )
}

pub fn restaurant_map_url(restaurant: &Restaurant) -> String {
    map_search_url(&restaurant_query(restaurant))
}

pub fn city_query(city: City) -> String {
    format!("restaurants in {}", city.label())
}

pub fn city_map_url(city: City) -> String {
    map_search_url(&city_query(city))
}
