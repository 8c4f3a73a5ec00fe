use maud::{html, Markup};

use livability_boundary::{Error, Prediction};

use super::{danger_list_item, list_item};

pub const PREDICTION_LOADING: &str = "Loading ML prediction...";
pub const PREDICTION_FETCH_ERROR: &str = "Error fetching ML prediction.";

#[must_use]
pub fn prediction_loading() -> Markup {
    list_item(PREDICTION_LOADING)
}

#[must_use]
pub fn prediction_fetch_error() -> Markup {
    danger_list_item(PREDICTION_FETCH_ERROR)
}

/// The city is unknown to the model.
#[must_use]
pub fn prediction_error(err: &Error) -> Markup {
    let suggestions = err
        .suggestions
        .as_ref()
        .filter(|s| !s.is_empty())
        .map(|s| s.join(", "));
    html! {
        li class="list-group-item text-warning" {
            (err.error)
            @if let Some(suggestions) = suggestions {
                br;
                small { "Suggestions: " (suggestions) }
            }
        }
    }
}

#[must_use]
pub fn prediction(report: &Prediction) -> Markup {
    let Prediction {
        prediction,
        city,
        state,
        aqi,
        wqi,
        water_quantity,
        population_density,
        industry_distance,
        pollution,
        cost_of_living,
        hospitals,
        schools,
        stores,
        soil_type,
    } = report;
    let metrics = [
        ("Dataset AQI", format!("{aqi}%")),
        ("Dataset WQI", format!("{wqi}%")),
        ("Water Quantity", format!("{water_quantity}%")),
        ("Population Density", format!("{population_density}%")),
        ("Industry Distance", format!("{industry_distance} km")),
        ("Pollution", format!("{pollution}%")),
        ("Cost of Living", format!("₹{cost_of_living}")),
        ("Hospitals Nearby", hospitals.to_string()),
        ("Schools Nearby", schools.to_string()),
        ("Stores Nearby", stores.to_string()),
        ("Soil Type", soil_type.clone()),
    ];
    html! {
        li class="list-group-item list-group-item-info" {
            strong { "ML Prediction:" } " " (prediction)
        }
        li class="list-group-item" {
            strong { "City:" } " " (city) ", " (state)
        }
        @for (name, value) in &metrics {
            li class="list-group-item" {
                strong { (name) ":" } " " (value)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn warangal() -> Prediction {
        Prediction {
            prediction: "Suitable".into(),
            city: "Warangal".into(),
            state: "Telangana".into(),
            aqi: 42.5,
            wqi: 71.0,
            water_quantity: 63.0,
            population_density: 38.0,
            industry_distance: 12.5,
            pollution: 22.0,
            cost_of_living: 18000,
            hospitals: 14,
            schools: 31,
            stores: 57,
            soil_type: "Red".into(),
        }
    }

    #[test]
    fn city_not_found_with_suggestions() {
        let err = Error {
            error: "City not found".into(),
            suggestions: Some(vec!["Hyderabad".into(), "Warangal".into()]),
        };
        let markup = prediction_error(&err).into_string();
        assert!(markup.contains("City not found"));
        assert!(markup.contains("Hyderabad, Warangal"));
    }

    #[test]
    fn city_not_found_without_suggestions() {
        let err = Error {
            error: "City not found".into(),
            suggestions: None,
        };
        let markup = prediction_error(&err).into_string();
        assert!(markup.contains("City not found"));
        assert!(!markup.contains("Suggestions"));
    }

    #[test]
    fn render_all_metrics() {
        let markup = prediction(&warangal()).into_string();
        assert_eq!(markup.matches("<li").count(), 13);
        assert!(markup.contains("<strong>ML Prediction:</strong> Suitable"));
        assert!(markup.contains("<strong>City:</strong> Warangal, Telangana"));
        assert!(markup.contains("<strong>Dataset AQI:</strong> 42.5%"));
        assert!(markup.contains("<strong>Dataset WQI:</strong> 71%"));
        assert!(markup.contains("<strong>Industry Distance:</strong> 12.5 km"));
        assert!(markup.contains("<strong>Cost of Living:</strong> ₹18000"));
        assert!(markup.contains("<strong>Stores Nearby:</strong> 57"));
        assert!(markup.contains("<strong>Soil Type:</strong> Red"));
    }

    #[test]
    fn placeholders() {
        assert!(prediction_loading()
            .into_string()
            .contains("Loading ML prediction..."));
        assert!(prediction_fetch_error()
            .into_string()
            .contains("Error fetching ML prediction."));
    }
}
