use std::time::Duration;

use reqwest::{Client, Url};

use livability_boundary::{Coordinate, GeocodeResponse, GeocodeResult};
use livability_core::{FetchError, GeoCodingGateway};

use crate::{get, Error, Result};

pub const GOOGLE_GEOCODING_URL: &str = "https://maps.googleapis.com/maps/api/geocode/json";

/// Geocoding with the Google Maps Platform.
#[derive(Debug, Clone)]
pub struct GoogleGeocoder {
    url: String,
    api_key: String,
    client: Client,
}

impl GoogleGeocoder {
    pub fn new(api_key: impl Into<String>, request_timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(request_timeout).build()?;
        Ok(Self {
            url: GOOGLE_GEOCODING_URL.to_string(),
            api_key: api_key.into(),
            client,
        })
    }

    pub async fn reverse(&self, at: Coordinate) -> Result<Option<GeocodeResult>> {
        let Coordinate { lat, lng } = at;
        let url = self.url_with_params(&[("latlng", format!("{lat},{lng}"))])?;
        self.fetch_first(url).await
    }

    pub async fn search(&self, query: &str) -> Result<Option<GeocodeResult>> {
        let url = self.url_with_params(&[("address", query.to_string())])?;
        self.fetch_first(url).await
    }

    fn url_with_params(&self, params: &[(&str, String)]) -> Result<Url> {
        let mut url = Url::parse(&self.url).map_err(|err| Error::Url(err.to_string()))?;
        url.query_pairs_mut()
            .extend_pairs(params)
            .append_pair("key", &self.api_key);
        Ok(url)
    }

    async fn fetch_first(&self, url: Url) -> Result<Option<GeocodeResult>> {
        let response: GeocodeResponse = get(&self.client, url).await?;
        first_result(response)
    }
}

impl GeoCodingGateway for GoogleGeocoder {
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
        log::debug!("No geocoding results");
        return Ok(None);
    }
    Err(Error::Geocoding {
        status: response.status,
        message: response.error_message.unwrap_or_default(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn geocoder() -> GoogleGeocoder {
        GoogleGeocoder::new("secret", Duration::from_secs(1)).unwrap()
    }

    #[test]
    fn reverse_geocoding_url() {
        let url = geocoder()
            .url_with_params(&[("latlng", "17.5,78.25".to_string())])
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://maps.googleapis.com/maps/api/geocode/json?latlng=17.5%2C78.25&key=secret"
        );
    }

    #[test]
    fn search_url() {
        let url = geocoder()
            .url_with_params(&[("address", "Navi Mumbai".to_string())])
            .unwrap();
        assert_eq!(url.query(), Some("address=Navi+Mumbai&key=secret"));
    }

    #[test]
    fn map_response_status() {
        let zero = GeocodeResponse {
            status: "ZERO_RESULTS".into(),
            results: vec![],
            error_message: None,
        };
        assert!(first_result(zero).unwrap().is_none());

        let denied = GeocodeResponse {
            status: "REQUEST_DENIED".into(),
            results: vec![],
            error_message: Some("The provided API key is invalid.".into()),
        };
        let err = first_result(denied).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Geocoding failed with status REQUEST_DENIED: The provided API key is invalid."
        );
    }
}
