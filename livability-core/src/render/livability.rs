use maud::{html, Markup};

use livability_boundary::{Facility, Livability};

use super::{danger_list_item, list_item};
use crate::{air_quality::Pm25Health, facility::group_facilities};

pub const LIVABILITY_FETCH_ERROR: &str = "Error fetching data.";
pub const NO_FACILITIES_DATA: &str = "No facilities data.";
pub const NO_FACILITIES_FOUND: &str = "No nearby facilities found.";

#[must_use]
pub fn livability_summary(livability: &Livability) -> Markup {
    let Livability {
        score,
        category,
        components,
    } = livability;
    let aqi = &components.aqi;
    let pm25_health = Pm25Health::from_reading(&aqi.pm25);
    html! {
        li class="list-group-item" {
            strong { "Score:" } " "
            span class="badge bg-success" { (score) }
        }
        li class="list-group-item" {
            strong { "Category:" } " "
            span class="badge bg-info" { (category) }
        }
        li class="list-group-item" {
            strong { "Live AQI:" } " "
            (aqi.aqi) " (PM2.5: " (aqi.pm25) ") (" (pm25_health) ")"
        }
        li class="list-group-item" {
            strong { "WQI:" } " " (components.wqi.wqi)
        }
        li class="list-group-item" {
            small { em { "Last updated: " (aqi.last_updated) } }
        }
    }
}

#[must_use]
pub fn livability_facilities(livability: &Livability) -> Markup {
    let groups = group_facilities(&livability.components.facilities);
    if groups.is_empty() {
        return list_item(NO_FACILITIES_FOUND);
    }
    html! {
        @for group in &groups {
            li class="list-group-item active text-dark" {
                strong { (group.title()) }
            }
            @for facility in &group.facilities {
                (facility_item(facility))
            }
        }
    }
}

fn facility_item(facility: &Facility) -> Markup {
    let Facility {
        name,
        vicinity,
        distance_m,
        ..
    } = facility;
    html! {
        li class="list-group-item" {
            i class="bi bi-building" {} " "
            (name.as_deref().unwrap_or_default())
            " — "
            (vicinity.as_deref().unwrap_or_default())
            " (" (distance_m) "m)"
        }
    }
}

/// Content of the popup at the map marker.
#[must_use]
pub fn livability_popup(livability: &Livability) -> Markup {
    html! {
        div {
            strong { "Livability: " (livability.score) " (" (livability.category) ")" }
        }
    }
}

/// Error message of the backend.
#[must_use]
pub fn livability_error(message: &str) -> Markup {
    danger_list_item(message)
}

#[must_use]
pub fn livability_fetch_error() -> Markup {
    danger_list_item(LIVABILITY_FETCH_ERROR)
}

#[must_use]
pub fn no_facilities_data() -> Markup {
    list_item(NO_FACILITIES_DATA)
}
