#![deny(missing_debug_implementations)]

//! # livability-core
//!
//! Turns raw livability, prediction and alternatives payloads
//! into categorized, human-readable HTML fragments and
//! coordinates the requests that are triggered by map gestures.
//!
//! Everything that talks to the outside world (HTTP, geocoding,
//! the map widget, the DOM) is hidden behind the traits of this module.

use livability_boundary::{
    Alternatives, ApiResponse, Coordinate, GeocodeResult, Livability, Prediction,
};
use maud::Markup;
use thiserror::Error;

pub mod air_quality;
pub mod controller;
pub mod facility;
pub mod geocode;
pub mod render;
pub mod reporters;
pub mod sequence;
pub mod view_state;

pub use maud;


pub mod prelude {
    pub use super::{
        air_quality::*, controller::*, facility::*, geocode::*, reporters::*, sequence::*,
        view_state::*, DisplayRegion, FetchError, GeoCodingGateway, LivabilityGateway, MapWidget,
    };
    pub use livability_boundary::{
        Alternatives, ApiResponse, Coordinate, GeocodeResult, Livability, Prediction,
    };
}

/// A transport or decoding failure.
///
/// Error-shaped payloads of the backend are *not* a [`FetchError`],
/// they are delivered as [`ApiResponse::Failure`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FetchError {
    #[error("transport failure: {0}")]
    Transport(String),
    #[error("unable to decode response: {0}")]
    Decode(String),
}

#[allow(async_fn_in_trait)]
pub trait LivabilityGateway {
    async fn livability(&self, at: Coordinate) -> Result<ApiResponse<Livability>, FetchError>;
    async fn predict(&self, city: &str) -> Result<ApiResponse<Prediction>, FetchError>;
    async fn alternatives(&self, city: &str) -> Result<ApiResponse<Alternatives>, FetchError>;
}

#[allow(async_fn_in_trait)]
pub trait GeoCodingGateway {
    /// Resolve the first address found at the given position.
    async fn reverse(&self, at: Coordinate) -> Result<Option<GeocodeResult>, FetchError>;
    /// Resolve the first place matching the given search text.
    async fn search(&self, query: &str) -> Result<Option<GeocodeResult>, FetchError>;
}

/// The interactive map.
pub trait MapWidget {
    fn place_marker(&self, at: Coordinate);
    fn pan_to(&self, at: Coordinate, zoom: Option<f64>);
}

/// A part of the page that displays a rendered fragment.
pub trait DisplayRegion {
    fn show(&self, content: Markup);
}

impl<R> DisplayRegion for &R
where
    R: DisplayRegion + ?Sized,
{
    fn show(&self, content: Markup) {
        (**self).show(content);
    }
}

impl<R> DisplayRegion for std::rc::Rc<R>
where
    R: DisplayRegion + ?Sized,
{
    fn show(&self, content: Markup) {
        (**self).show(content);
    }
}
