use maud::{html, Markup};

use livability_boundary::{AlternativeCity, Alternatives};

pub const ALTERNATIVES_LOADING: &str = "Loading nearby good areas...";
pub const ALTERNATIVES_FETCH_ERROR: &str = "Error loading suggestions.";
pub const NO_ALTERNATIVES: &str = "No better nearby suggestions found.";

#[must_use]
pub fn alternatives_loading() -> Markup {
    html! {
        p class="text-muted mb-0" { (ALTERNATIVES_LOADING) }
    }
}

#[must_use]
pub fn alternatives_fetch_error() -> Markup {
    alternatives_error(ALTERNATIVES_FETCH_ERROR)
}

#[must_use]
pub fn alternatives_error(message: &str) -> Markup {
    html! {
        div class="text-danger" { (message) }
    }
}

/// One card per suggestion, numbered in the order
/// the backend ranked them.
#[must_use]
pub fn alternatives(alternatives: &Alternatives) -> Markup {
    if alternatives.suggestions.is_empty() {
        return html! {
            div class="text-muted" { (NO_ALTERNATIVES) }
        };
    }
    html! {
        @for (index, city) in alternatives.suggestions.iter().enumerate() {
            (alternative_card(index + 1, city))
        }
    }
}

fn alternative_card(rank: usize, alternative: &AlternativeCity) -> Markup {
    let AlternativeCity {
        city,
        state,
        aqi,
        wqi,
        pollution,
        industry_distance,
        cost_of_living,
        hospitals,
        schools,
        stores,
    } = alternative;
    html! {
        div class="suggestion-item" {
            div class="d-flex justify-content-between align-items-center" {
                strong { (rank) ". " (city) }
                span class="badge bg-success" { "Suitable" }
            }
            small class="text-muted" { (state) }
            div class="mt-1 small" {
                (format!("AQI: {aqi}% | WQI: {wqi}% | Pollution: {pollution}% | Industry: {industry_distance}km"))
            }
            div class="small" {
                (format!("Cost: ₹{cost_of_living} | Hospitals: {hospitals} | Schools: {schools} | Stores: {stores}"))
            }
        }
    }
}
