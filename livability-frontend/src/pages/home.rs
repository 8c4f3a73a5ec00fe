use std::rc::Rc;

use leptos::*;
use wasm_bindgen_futures::spawn_local;

use livability_core::prelude::{Coordinate, Regions};

use crate::{
    components::*,
    regions::{LeafletMap, SignalRegion},
    Controller,
};

#[component]
pub fn Home(
    controller: Rc<Controller>,
    regions: Regions<SignalRegion>,
    map: LeafletMap,
) -> impl IntoView {
    // -- callbacks -- //

    let on_click = {
        let controller = Rc::clone(&controller);
        Callback::new(move |at: Coordinate| {
            let controller = Rc::clone(&controller);
            spawn_local(async move {
                controller.on_map_click(at).await;
            });
        })
    };

    let on_search = Callback::new(move |query: String| {
        let controller = Rc::clone(&controller);
        spawn_local(async move {
            controller.on_place_selected(&query).await;
        });
    });

    let Regions {
        summary,
        facilities,
        popup,
        prediction,
        alternatives,
    } = regions;

    view! {
      <div class="row">
        <div class="col-lg-7">
          <PlaceSearch on_search />
          <Map leaflet_map=map popup on_click />
        </div>
        <div class="col-lg-5">
          <ReportList title="Livability" region=summary />
          <ReportList title="Nearby facilities" region=facilities />
          { prediction.map(|region| view! { <ReportList title="Prediction" region /> }) }
          { alternatives.map(|region| view! { <ReportCard title="Better alternatives" region /> }) }
        </div>
      </div>
    }
}
