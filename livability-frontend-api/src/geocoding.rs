use gloo_net::http::Request;
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};

use livability_boundary::{Coordinate, GeocodeResponse, GeocodeResult};
use livability_core::{FetchError, GeoCodingGateway};

use crate::{into_json, Error, Result};

pub const GOOGLE_GEOCODING_URL: &str = "https://maps.googleapis.com/maps/api/geocode/json";

/// Google Geocoding API
#[derive(Debug, Clone)]
pub struct GeocodingApi {
    url: String,
    api_key: String,
}

impl GeocodingApi {
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_url(GOOGLE_GEOCODING_URL, api_key)
    }

    #[must_use]
    pub fn with_url(url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            api_key: api_key.into(),
        }
    }

    pub async fn reverse(&self, at: Coordinate) -> Result<Option<GeocodeResult>> {
        let url = reverse_url(&self.url, &self.api_key, at);
        self.fetch_first(&url).await
    }

    pub async fn search(&self, query: &str) -> Result<Option<GeocodeResult>> {
        let url = search_url(&self.url, &self.api_key, query);
        self.fetch_first(&url).await
    }

    async fn fetch_first(&self, url: &str) -> Result<Option<GeocodeResult>> {
        let response = Request::get(url).send().await?;
        let geocoded: GeocodeResponse = into_json(response).await?;
        first_result(geocoded)
    }
}

impl GeoCodingGateway for GeocodingApi {
    async fn reverse(&self, at: Coordinate) -> std::result::Result<Option<GeocodeResult>, FetchError> {
        Ok(Self::reverse(self, at).await?)
    }

    async fn search(&self, query: &str) -> std::result::Result<Option<GeocodeResult>, FetchError> {
        Ok(Self::search(self, query).await?)
    }
}

fn first_result(response: GeocodeResponse) -> Result<Option<GeocodeResult>> {
    if response.is_ok() {
        return Ok(response.results.into_iter().next());
    }
    if response.status == GeocodeResponse::STATUS_ZERO_RESULTS {
        return Ok(None);
    }
    Err(Error::Geocoding {
        status: response.status,
        message: response.error_message.unwrap_or_default(),
    })
}

fn reverse_url(base_url: &str, api_key: &str, at: Coordinate) -> String {
    let Coordinate { lat, lng } = at;
    let encoded_key = utf8_percent_encode(api_key, NON_ALPHANUMERIC);
    format!("{base_url}?latlng={lat},{lng}&key={encoded_key}")
}

fn search_url(base_url: &str, api_key: &str, query: &str) -> String {
    let encoded_query = utf8_percent_encode(query, NON_ALPHANUMERIC);
    let encoded_key = utf8_percent_encode(api_key, NON_ALPHANUMERIC);
    format!("{base_url}?address={encoded_query}&key={encoded_key}")
}
