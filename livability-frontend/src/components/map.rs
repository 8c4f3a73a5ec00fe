use leaflet::{LatLng, PopupOptions};
use leptos::*;
use leptos_leaflet::{position, MapContainer, MapEvents, Marker, Popup, Position, TileLayer};
use wasm_bindgen::JsValue;

use livability_core::prelude::{Coordinate, DEFAULT_CENTER, DEFAULT_ZOOM};

use crate::regions::{LeafletMap, SignalRegion};

const TILE_LAYER_URL: &str = "https://tile.openstreetmap.org/{z}/{x}/{y}.png";
const MAP_ATTRIBUTION: &str =
    "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors";

#[component]
pub fn Map(
    leaflet_map: LeafletMap,
    popup: SignalRegion,
    on_click: Callback<Coordinate, ()>,
) -> impl IntoView {
    let events = MapEvents::new();

    events.clone().mouse_click(move |ev| {
        let latlng = ev.lat_lng();
        on_click.call(Coordinate {
            lat: latlng.lat(),
            lng: latlng.lng(),
        });
    });

    let Coordinate { lat, lng } = DEFAULT_CENTER;
    let center = Position::new(lat, lng);
    let popup_html = popup.html();

    // Open the popup as soon as a report was rendered into it.
    Effect::new(move |_| {
        let content = popup_html.get();
        let Some(at) = popup_anchor(&content, leaflet_map.marker.get_untracked()) else {
            return;
        };
        let Some(map) = leaflet_map.map.get_untracked() else {
            log::warn!("No leaflet map found");
            return;
        };
        let popup = leaflet::Popup::new(&PopupOptions::new(), None);
        popup.set_lat_lng(&LatLng::new(at.lat, at.lng));
        popup.set_content(&JsValue::from_str(&content));
        popup.open_on(&map);
    });

    view! {
      <MapContainer
        style="height: 480px"
        center
        zoom=DEFAULT_ZOOM
        map=leaflet_map.map.write_only()
        set_view=true
        events
      >
        <TileLayer url=TILE_LAYER_URL attribution=MAP_ATTRIBUTION />
        { move || leaflet_map.marker.get().map(|at| view! {
            <Marker position=position!(at.lat, at.lng)>
              <Popup>
                <div inner_html=move || popup_html.get() />
              </Popup>
            </Marker>
          })
        }
      </MapContainer>
    }
}

/// Position of the popup if there is anything to show.
fn popup_anchor(content: &str, marker: Option<Coordinate>) -> Option<Coordinate> {
    if content.is_empty() {
        return None;
    }
    marker
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_popup_at_marker_with_content() {
        let at = Coordinate {
            lat: 17.385_044,
            lng: 78.486_671,
        };
        assert_eq!(popup_anchor("<div>Livability</div>", Some(at)), Some(at));
        assert_eq!(popup_anchor("", Some(at)), None);
        assert_eq!(popup_anchor("<div>Livability</div>", None), None);
    }
}
