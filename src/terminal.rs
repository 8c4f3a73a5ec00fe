//! Terminal rendition of the page.

use std::cell::RefCell;

use livability_core::{
    maud::Markup,
    prelude::{Coordinate, DisplayRegion, FetchError, GeoCodingGateway, GeocodeResult, MapWidget},
};
use livability_gateways::GoogleGeocoder;

/// Keeps the latest fragment that was shown.
#[derive(Debug)]
pub struct Panel {
    title: &'static str,
    content: RefCell<Option<String>>,
}

impl Panel {
    pub const fn new(title: &'static str) -> Self {
        Self {
            title,
            content: RefCell::new(None),
        }
    }

    pub fn title(&self) -> &'static str {
        self.title
    }

    pub fn content(&self) -> Option<String> {
        self.content.borrow().clone()
    }
}

impl DisplayRegion for Panel {
    fn show(&self, content: Markup) {
        log::debug!("Update {}", self.title);
        *self.content.borrow_mut() = Some(content.into_string());
    }
}

/// A map without a visible widget.
#[derive(Debug, Default)]
pub struct LoggingMap;

impl MapWidget for LoggingMap {
    fn place_marker(&self, at: Coordinate) {
        log::info!("Place marker at {}, {}", at.lat, at.lng);
    }

    fn pan_to(&self, at: Coordinate, zoom: Option<f64>) {
        match zoom {
            Some(zoom) => log::info!("Pan to {}, {} (zoom {zoom})", at.lat, at.lng),
            None => log::info!("Pan to {}, {}", at.lat, at.lng),
        }
    }
}

/// Geocoding with an optional gateway.
#[derive(Debug)]
pub struct Geocoder(pub Option<GoogleGeocoder>);

impl Geocoder {
    fn gateway(&self) -> Result<&GoogleGeocoder, FetchError> {
        self.0
            .as_ref()
            .ok_or_else(|| FetchError::Transport("No geocoding gateway configured".into()))
    }
}

impl GeoCodingGateway for Geocoder {
    async fn reverse(&self, at: Coordinate) -> Result<Option<GeocodeResult>, FetchError> {
        GeoCodingGateway::reverse(self.gateway()?, at).await
    }

    async fn search(&self, query: &str) -> Result<Option<GeocodeResult>, FetchError> {
        GeoCodingGateway::search(self.gateway()?, query).await
    }
}
