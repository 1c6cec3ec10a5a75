use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

use savora_boundary::{postgrest as api, NewRestaurant, Restaurant};
use savora_core::{
    entities::City,
    table::{self, RestaurantTable},
};
use savora_entities::restaurant as e;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error("{0}")]
    Api(savora_boundary::Error),
    #[error("Unexpected response status {0}")]
    Status(reqwest::StatusCode),
}

impl From<Error> for table::Error {
    fn from(err: Error) -> Self {
        match err {
            Error::Http(err) if err.is_decode() => Self::Decode(err.to_string()),
            Error::Http(err) => Self::Fetch(err.to_string()),
            Error::Api(savora_boundary::Error { message, code, .. }) => {
                Self::Remote { message, code }
            }
            Error::Status(status) => Self::Fetch(format!("HTTP {status}")),
        }
    }
}

type Result<T> = std::result::Result<T, Error>;

/// The restaurant table served by a PostgREST endpoint,
/// e.g. a Supabase project.
#[derive(Debug, Clone)]
pub struct PostgrestTable {
    client: reqwest::Client,
    url: String,
    api_key: String,
    table: String,
}

impl PostgrestTable {
    pub fn new(url: &str, api_key: &str, table: &str, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            url: url.to_owned(),
            api_key: api_key.to_owned(),
            table: table.to_owned(),
        })
    }

    fn request(&self, method: reqwest::Method, url: &str) -> reqwest::RequestBuilder {
        self.client
            .request(method, url)
            .header(api::HEADER_API_KEY, &self.api_key)
            .header(
                api::HEADER_AUTHORIZATION,
                api::auth_header_value(&self.api_key),
            )
    }

    fn select_by_city_request(&self, city: &str) -> reqwest::RequestBuilder {
        let url = api::select_eq_url(&self.url, &self.table, "city", city);
        log::debug!("GET {url}");
        self.request(reqwest::Method::GET, &url)
    }

    fn upsert_request(&self, rows: &[NewRestaurant], conflict_key: &str) -> reqwest::RequestBuilder {
        let url = api::upsert_url(&self.url, &self.table, conflict_key);
        log::debug!("POST {url} ({} rows)", rows.len());
        self.request(reqwest::Method::POST, &url)
            .header(api::HEADER_PREFER, api::PREFER_UPSERT)
            .json(rows)
    }

    pub async fn restaurants(&self, city: &str) -> Result<Vec<Restaurant>> {
        let response = self.select_by_city_request(city).send().await?;
        let response = check_status(response).await?;
        Ok(response.json().await?)
    }

    pub async fn upsert_restaurants(&self, rows: &[NewRestaurant], conflict_key: &str) -> Result<()> {
        let response = self.upsert_request(rows, conflict_key).send().await?;
        check_status(response).await?;
        Ok(())
    }
}

async fn check_status(response: reqwest::Response) -> Result<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await?;
    Err(parse_error_body(status, &body))
}

fn parse_error_body(status: reqwest::StatusCode, body: &str) -> Error {
    match serde_json::from_str::<savora_boundary::Error>(body) {
        Ok(err) => Error::Api(err),
        Err(err) => {
            log::warn!("Unable to parse error response ({status}): {err}");
            Error::Status(status)
        }
    }
}

#[async_trait(?Send)]
impl RestaurantTable for PostgrestTable {
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
