use std::rc::Rc;

use leptos::*;

use livability_core::prelude::{PageController, Regions, ViewState};
use livability_frontend_api::{GeocodingApi, LivabilityApi};

mod components;
mod pages;
mod regions;

use self::{
    pages::Home,
    regions::{LeafletMap, SignalRegion},
};

const DEFAULT_API_URL: &str = "/api";
const GOOGLE_MAPS_API_KEY: Option<&str> = option_env!("GOOGLE_MAPS_API_KEY");

pub(crate) type Controller = PageController<LivabilityApi, GeocodingApi, LeafletMap, SignalRegion>;

#[component]
pub fn App() -> impl IntoView {
    // -- regions -- //
    let regions = Regions {
        summary: SignalRegion::new(),
        facilities: SignalRegion::new(),
        popup: SignalRegion::new(),
        prediction: Some(SignalRegion::new()),
        alternatives: Some(SignalRegion::new()),
    };
    let map = LeafletMap::new();

    // -- init API -- //
    let api_key = GOOGLE_MAPS_API_KEY.unwrap_or_default();
    if api_key.is_empty() {
        log::warn!("No Google Maps API key configured: geocoding will fail");
    }
    let controller: Rc<Controller> = Rc::new(PageController::new(
        LivabilityApi::new(DEFAULT_API_URL),
        GeocodingApi::new(api_key),
        map,
        regions.clone(),
        ViewState::default(),
    ));

    view! {
      <main class="container-fluid p-3">
        <Home controller regions map />
      </main>
    }
}
