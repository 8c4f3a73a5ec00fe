//! HTTP implementations of the livability and geocoding gateways.

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use thiserror::Error;

use livability_core::FetchError;

mod google;
mod livability;

pub use self::{google::*, livability::*};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Http(#[from] reqwest::Error),

    #[error(transparent)]
    Decode(#[from] serde_json::Error),

    #[error("Invalid URL: {0}")]
    Url(String),

    #[error("Geocoding failed with status {status}: {message}")]
    Geocoding { status: String, message: String },
}

impl From<Error> for FetchError {
    fn from(err: Error) -> Self {
        match err {
            Error::Decode(err) => Self::Decode(err.to_string()),
            err => Self::Transport(err.to_string()),
        }
    }
}

/// Decodes the body independent of the HTTP status.
///
/// The livability API responds with error payloads and a 4xx status
/// if a location or city is not covered.
fn decode_body<T>(status: StatusCode, body: &[u8]) -> Result<T>
where
    T: DeserializeOwned,
{
    if !status.is_success() {
        log::debug!("Response with status {status}");
    }
    Ok(serde_json::from_slice(body)?)
}

async fn get<T>(client: &reqwest::Client, url: reqwest::Url) -> Result<T>
where
    T: DeserializeOwned,
{
    log::debug!("GET {}", url.path());
    let response = client.get(url).send().await?;
    let status = response.status();
    let body = response.bytes().await?;
    decode_body(status, &body)
}
