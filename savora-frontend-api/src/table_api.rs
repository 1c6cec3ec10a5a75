use async_trait::async_trait;
use gloo_net::http::{Request, RequestBuilder};

use savora_boundary::{postgrest, NewRestaurant, Restaurant};
use savora_core::{
    entities::City,
    table::{self, RestaurantTable},
};
use savora_entities::restaurant as e;

use crate::{into_json, into_unit, Result};

/// The restaurant table behind a PostgREST endpoint.
#[derive(Clone)]
pub struct TableApi {
    url: String,
    api_key: String,
    table: String,
}

impl TableApi {
    #[must_use]
    pub const fn new(url: String, api_key: String, table: String) -> Self {
        Self {
            url,
            api_key,
            table,
        }
    }

    fn add_auth_headers(&self, req: RequestBuilder) -> RequestBuilder {
        req.header(postgrest::HEADER_API_KEY, &self.api_key)
            .header(
                postgrest::HEADER_AUTHORIZATION,
                &postgrest::auth_header_value(&self.api_key),
            )
    }

    pub async fn restaurants(&self, city: &str) -> Result<Vec<Restaurant>> {
        let url = postgrest::select_eq_url(&self.url, &self.table, "city", city);
        let response = self.add_auth_headers(Request::get(&url)).send().await?;
        into_json(response).await
    }

    pub async fn upsert_restaurants(
        &self,
        rows: &[NewRestaurant],
        conflict_key: &str,
    ) -> Result<()> {
        let url = postgrest::upsert_url(&self.url, &self.table, conflict_key);
        let response = self
            .add_auth_headers(Request::post(&url))
            .header(postgrest::HEADER_PREFER, postgrest::PREFER_UPSERT)
            .json(rows)?
            .send()
            .await?;
        into_unit(response).await
    }
}

#[async_trait(?Send)]
impl RestaurantTable for TableApi {
    async fn read_by_city(&self, city: City) -> table::Result<Vec<e::Restaurant>> {
        let rows = self.restaurants(city.name()).await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn upsert_all(
        &self,
        rows: &[e::NewRestaurant],
        conflict_key: &str,
    ) -> table::Result<usize> {
        let rows: Vec<NewRestaurant> = rows.iter().cloned().map(Into::into).collect();
        self.upsert_restaurants(&rows, conflict_key).await?;
        Ok(rows.len())
    }
}
