use gloo_net::http::Request;
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};

use livability_boundary::{Alternatives, ApiResponse, Coordinate, Livability, Prediction};
use livability_core::{FetchError, LivabilityGateway};

use crate::{into_api_response, Result};

/// Public livability API
#[derive(Debug, Clone)]
pub struct LivabilityApi {
    url: String,
}

impl LivabilityApi {
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    pub async fn livability(&self, at: Coordinate) -> Result<ApiResponse<Livability>> {
        let url = livability_url(&self.url, at);
        let response = Request::get(&url).send().await?;
        into_api_response(response).await
    }

    pub async fn predict(&self, city: &str) -> Result<ApiResponse<Prediction>> {
        let url = city_url(&self.url, "predict", city);
        let response = Request::get(&url).send().await?;
        into_api_response(response).await
    }

    pub async fn suggestions(&self, city: &str) -> Result<ApiResponse<Alternatives>> {
        let url = city_url(&self.url, "suggestions", city);
        let response = Request::get(&url).send().await?;
        into_api_response(response).await
    }
}

impl LivabilityGateway for LivabilityApi {
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

fn livability_url(base_url: &str, at: Coordinate) -> String {
    let Coordinate { lat, lng } = at;
    format!("{base_url}/livability?lat={lat}&lng={lng}")
}

fn city_url(base_url: &str, path: &str, city: &str) -> String {
    let encoded_city = utf8_percent_encode(city, NON_ALPHANUMERIC);
    format!("{base_url}/{path}?city={encoded_city}")
}
