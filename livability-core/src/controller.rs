use std::cell::RefCell;

use futures::join;

use livability_boundary::Coordinate;

use crate::{
    geocode::{extract_city_name, location},
    render,
    reporters::{AlternativesReporter, LivabilityReporter, PredictionReporter},
    sequence::RequestSequence,
    view_state::{is_valid_coordinate, ViewState, SEARCH_RESULT_ZOOM},
    DisplayRegion, GeoCodingGateway, LivabilityGateway, MapWidget,
};

/// The display regions of a page.
///
/// A page might not contain the prediction or the alternatives.
#[derive(Debug, Clone)]
pub struct Regions<R> {
    pub summary: R,
    pub facilities: R,
    pub popup: R,
    pub prediction: Option<R>,
    pub alternatives: Option<R>,
}

/// Handles the gestures on a page and fans them out to the reporters.
///
/// Geocoding results of a gesture are dropped as soon as
/// a more recent gesture has been started.
#[derive(Debug)]
pub struct PageController<G, C, M, R> {
    gateway: G,
    geocoder: C,
    map: M,
    view_state: RefCell<ViewState>,
    search_zoom: f64,
    gestures: RequestSequence,
    livability: LivabilityReporter<R>,
    prediction: PredictionReporter<R>,
    alternatives: AlternativesReporter<R>,
}

impl<G, C, M, R> PageController<G, C, M, R>
where
    G: LivabilityGateway,
    C: GeoCodingGateway,
    M: MapWidget,
    R: DisplayRegion,
{
    pub fn new(gateway: G, geocoder: C, map: M, regions: Regions<R>, view_state: ViewState) -> Self {
        let Regions {
            summary,
            facilities,
            popup,
            prediction,
            alternatives,
        } = regions;
        Self {
            gateway,
            geocoder,
            map,
            view_state: RefCell::new(view_state),
            search_zoom: SEARCH_RESULT_ZOOM,
            gestures: RequestSequence::new(),
            livability: LivabilityReporter::new(summary, facilities, popup),
            prediction: PredictionReporter::new(prediction),
            alternatives: AlternativesReporter::new(alternatives),
        }
    }

    /// Zoom level of the map after a place was found.
    #[must_use]
    pub fn with_search_zoom(self, search_zoom: f64) -> Self {
        Self {
            search_zoom,
            ..self
        }
    }

    #[must_use]
    pub fn view_state(&self) -> ViewState {
        self.view_state.borrow().clone()
    }

    /// A position on the map was clicked.
    pub async fn on_map_click(&self, at: Coordinate) {
        if !is_valid_coordinate(at) {
            log::warn!("Ignore click at invalid position {at:?}");
            return;
        }
        log::debug!("Map clicked at {at:?}");
        let gesture = self.gestures.dispatch();
        self.move_marker(at, None);
        let report_city = async {
            let resolved = self.geocoder.reverse(at).await;
            if !self.gestures.is_current(gesture) {
                log::debug!("Discard outdated address at {at:?}");
                return;
            }
            match resolved {
                Ok(Some(result)) => {
                    if let Some(city) = extract_city_name(&result) {
                        self.report_city(&city).await;
                    } else {
                        log::debug!("No city found at {at:?}");
                    }
                }
                Ok(None) => {
                    log::debug!("No address found at {at:?}");
                }
                Err(err) => {
                    log::warn!("Unable to resolve address at {at:?}: {err}");
                }
            }
        };
        join!(
            self.livability.report(&self.gateway, &self.view_state, at),
            report_city
        );
    }

    /// A place was selected by its name.
    pub async fn on_place_selected(&self, query: &str) {
        let query = query.trim();
        if query.is_empty() {
            return;
        }
        let gesture = self.gestures.dispatch();
        let found = self.geocoder.search(query).await;
        if !self.gestures.is_current(gesture) {
            log::debug!("Discard outdated search result for '{query}'");
            return;
        }
        let result = match found {
            Ok(result) => result,
            Err(err) => {
                log::warn!("Unable to search for '{query}': {err}");
                None
            }
        };
        let Some((at, result)) = result
            .and_then(|r| location(&r).map(|at| (at, r)))
            .filter(|(at, _)| is_valid_coordinate(*at))
        else {
            self.livability.notify(render::place_not_found(query));
            return;
        };
        log::debug!("Place '{query}' found at {at:?}");
        self.move_marker(at, Some(self.search_zoom));
        let city = extract_city_name(&result).unwrap_or_else(|| query.to_string());
        join!(
            self.livability.report(&self.gateway, &self.view_state, at),
            self.report_city(&city)
        );
    }

    /// Reports the prediction and the alternatives of a city.
    pub async fn report_city(&self, city: &str) {
        join!(
            self.prediction.report(&self.gateway, city),
            self.alternatives.report(&self.gateway, city)
        );
    }

    fn move_marker(&self, at: Coordinate, zoom: Option<f64>) {
        {
            let mut view_state = self.view_state.borrow_mut();
            view_state.place_marker(at);
            view_state.pan_to(at, zoom);
        }
        self.map.place_marker(at);
        self.map.pan_to(at, zoom);
    }
}
