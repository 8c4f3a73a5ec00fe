use leaflet::LatLng;
use leptos::*;

use livability_core::{
    maud::Markup,
    prelude::{Coordinate, DisplayRegion, MapWidget},
};

/// A region of the page that is backed by a signal
/// holding the rendered HTML.
#[derive(Debug, Clone, Copy)]
pub struct SignalRegion(RwSignal<String>);

impl SignalRegion {
    pub fn new() -> Self {
        Self(RwSignal::new(String::new()))
    }

    pub fn html(self) -> Signal<String> {
        self.0.into()
    }
}

impl DisplayRegion for SignalRegion {
    fn show(&self, content: Markup) {
        self.0.set(content.into_string());
    }
}

#[derive(Debug, Clone, Copy)]
pub struct LeafletMap {
    pub map: RwSignal<Option<leaflet::Map>>,
    pub marker: RwSignal<Option<Coordinate>>,
}

impl LeafletMap {
    pub fn new() -> Self {
        Self {
            map: RwSignal::new(None),
            marker: RwSignal::new(None),
        }
    }
}

impl MapWidget for LeafletMap {
    fn place_marker(&self, at: Coordinate) {
        self.marker.set(Some(at));
    }

    fn pan_to(&self, at: Coordinate, zoom: Option<f64>) {
        let Some(map) = self.map.get_untracked() else {
            log::warn!("No leaflet map found");
            return;
        };
        let zoom = zoom.unwrap_or_else(|| map.get_zoom());
        map.set_view(&LatLng::new(at.lat, at.lng), zoom);
    }
}
