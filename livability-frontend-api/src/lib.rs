use gloo_net::http::Response;
use serde::de::DeserializeOwned;
use thiserror::Error;

use livability_boundary::ApiResponse;
use livability_core::FetchError;

mod geocoding;
mod public;

pub use self::{geocoding::*, public::*};

type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Error {
    #[error("{0}")]
    Fetch(String),

    #[error("{0}")]
    Decode(String),

    #[error("geocoding failed with status {status}: {message}")]
    Geocoding { status: String, message: String },
}

impl From<gloo_net::Error> for Error {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::SerdeError(err) => Self::Decode(err.to_string()),
            err => Self::Fetch(format!("{err}")),
        }
    }
}

impl From<Error> for FetchError {
    fn from(err: Error) -> Self {
        match err {
            Error::Decode(msg) => Self::Decode(msg),
            err => Self::Transport(err.to_string()),
        }
    }
}

/// Decodes the body independent of the HTTP status
/// because the API sends error payloads with 4xx codes.
pub async fn into_api_response<T>(response: Response) -> Result<ApiResponse<T>>
where
    T: DeserializeOwned,
{
    if !response.ok() {
        log::debug!(
            "Request to {} failed with status {}",
            response.url(),
            response.status()
        );
    }
    Ok(response.json().await?)
}

pub async fn into_json<T>(response: Response) -> Result<T>
where
    T: DeserializeOwned,
{
    // ensure we've got 2xx status
    if response.ok() {
        Ok(response.json().await?)
    } else {
        Err(Error::Fetch(format!(
            "Unexpected response status {} {}",
            response.status(),
            response.status_text()
        )))
    }
}
