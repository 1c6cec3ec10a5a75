use gloo_net::http::Response;
use serde::de::DeserializeOwned;
use thiserror::Error;

use savora_core::table;

mod table_api;

pub use self::table_api::*;

type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum Error {
    #[error("{0}")]
    Fetch(String),

    #[error("{0}")]
    Api(#[from] savora_boundary::Error),
}

impl From<gloo_net::Error> for Error {
    fn from(err: gloo_net::Error) -> Self {
        Self::Fetch(format!("{err}"))
    }
}

impl From<Error> for table::Error {
    fn from(err: Error) -> Self {
        match err {
            Error::Fetch(msg) => Self::Fetch(msg),
            Error::Api(savora_boundary::Error { message, code, .. }) => {
                Self::Remote { message, code }
            }
        }
    }
}

pub async fn into_json<T>(response: Response) -> Result<T>
where
    T: DeserializeOwned,
{
    // ensure we've got 2xx status
    if response.ok() {
        Ok(response.json().await?)
    } else {
        Err(into_error(response).await)
    }
}

/// Succeeds on any 2xx status and ignores the body.
pub async fn into_unit(response: Response) -> Result<()> {
    if response.ok() {
        Ok(())
    } else {
        Err(into_error(response).await)
    }
}

async fn into_error(response: Response) -> Error {
    let status = response.status();
    match response.json::<savora_boundary::Error>().await {
        Ok(err) => err.into(),
        Err(err) => {
            log::warn!("Unable to parse error response: {err}");
            Error::Fetch(format!("HTTP {status} {}", response.status_text()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_api_error_into_table_error() {
        let err = Error::Api(savora_boundary::Error {
            message: "Invalid API key".into(),
            code: Some("401".into()),
            details: None,
            hint: Some("Double check your key".into()),
        });
        assert_eq!(
            table::Error::from(err),
            table::Error::Remote {
                message: "Invalid API key".into(),
                code: Some("401".into()),
            }
        );
    }

    #[test]
    fn map_fetch_error_into_table_error() {
        let err = Error::Fetch("TypeError: Failed to fetch".into());
        assert_eq!(
            table::Error::from(err).to_string(),
            "TypeError: Failed to fetch"
        );
    }
}
