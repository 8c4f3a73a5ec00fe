use std::time::Duration;

use reqwest::{Client, Url};

use livability_boundary::{Alternatives, ApiResponse, Coordinate, Livability, Prediction};
use livability_core::{FetchError, LivabilityGateway};

use crate::{get, Error, Result};

/// Livability backend accessed via HTTP.
#[derive(Debug, Clone)]
pub struct HttpLivabilityGateway {
    api_url: String,
    client: Client,
}

impl HttpLivabilityGateway {
    pub fn new(api_url: impl Into<String>, request_timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(request_timeout).build()?;
        let api_url = api_url.into().trim_end_matches('/').to_string();
        Ok(Self { api_url, client })
    }

    pub async fn livability(&self, at: Coordinate) -> Result<ApiResponse<Livability>> {
        let url = livability_url(&self.api_url, at)?;
        get(&self.client, url).await
    }

    pub async fn predict(&self, city: &str) -> Result<ApiResponse<Prediction>> {
        let url = city_url(&self.api_url, "predict", city)?;
        get(&self.client, url).await
    }

    pub async fn suggestions(&self, city: &str) -> Result<ApiResponse<Alternatives>> {
        let url = city_url(&self.api_url, "suggestions", city)?;
        get(&self.client, url).await
    }
}

impl LivabilityGateway for HttpLivabilityGateway {
    async fn livability(
        &self,
        at: Coordinate,
    ) -> std::result::Result<ApiResponse<Livability>, FetchError> {
        Ok(Self::livability(self, at).await?)
    }

    async fn predict(&self, city: &str) -> std::result::Result<ApiResponse<Prediction>, FetchError> {
        Ok(Self::predict(self, city).await?)
    }

    async fn alternatives(
        &self,
        city: &str,
    ) -> std::result::Result<ApiResponse<Alternatives>, FetchError> {
        Ok(self.suggestions(city).await?)
    }
}

fn livability_url(api_url: &str, at: Coordinate) -> Result<Url> {
    let Coordinate { lat, lng } = at;
    Url::parse_with_params(
        &format!("{api_url}/livability"),
        &[("lat", lat.to_string()), ("lng", lng.to_string())],
    )
    .map_err(|err| Error::Url(err.to_string()))
}

fn city_url(api_url: &str, path: &str, city: &str) -> Result<Url> {
    Url::parse_with_params(&format!("{api_url}/{path}"), &[("city", city)])
        .map_err(|err| Error::Url(err.to_string()))
}
