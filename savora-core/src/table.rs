//! Access to the remote `restaurants` table.
//!
//! The application only needs two capabilities of the
//! managed database behind it: reading the restaurants of
//! a city and upserting a batch of rows. Any backend that
//! provides these can implement [`RestaurantTable`].

use async_trait::async_trait;
use thiserror::Error;

use crate::entities::*;

/// Rows colliding on this column are merged on upsert.
pub const RESTAURANT_CONFLICT_KEY: &str = "name";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The request did not reach the table (network, CORS, ...).
    #[error("{0}")]
    Fetch(String),
    /// The table rejected the request.
    #[error("{message}")]
    Remote {
        message: String,
        code: Option<String>,
    },
    #[error("Unexpected response: {0}")]
    Decode(String),
}

pub type Result<T> = std::result::Result<T, Error>;

// The browser client produces futures that are not `Send`.
#[async_trait(?Send)]
pub trait RestaurantTable {
    /// All restaurants whose `city` column equals `city`.
    async fn read_by_city(&self, city: City) -> Result<Vec<Restaurant>>;

    /// Insert or merge `rows`, deduplicated by `conflict_key`.
    ///
    /// Returns the number of rows written.
    async fn upsert_all(&self, rows: &[NewRestaurant], conflict_key: &str) -> Result<usize>;
}
