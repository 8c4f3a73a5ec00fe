use livability_boundary::Coordinate;

pub const LAT_DEG_MIN: f64 = -90.0;
pub const LAT_DEG_MAX: f64 = 90.0;
pub const LNG_DEG_MIN: f64 = -180.0;
pub const LNG_DEG_MAX: f64 = 180.0;

/// Hyderabad center
pub const DEFAULT_CENTER: Coordinate = Coordinate {
    lat: 17.385_044,
    lng: 78.486_671,
};
pub const DEFAULT_ZOOM: f64 = 12.0;
pub const SEARCH_RESULT_ZOOM: f64 = 15.0;

#[must_use]
pub fn is_valid_coordinate(at: Coordinate) -> bool {
    (LAT_DEG_MIN..=LAT_DEG_MAX).contains(&at.lat) && (LNG_DEG_MIN..=LNG_DEG_MAX).contains(&at.lng)
}

/// The state of the map view that is shared by all reports.
///
/// Only gesture handlers modify it.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    pub center: Coordinate,
    pub zoom: f64,
    /// There is exactly one marker. It is hidden until the first gesture.
    pub marker: Option<Coordinate>,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            center: DEFAULT_CENTER,
            zoom: DEFAULT_ZOOM,
            marker: None,
        }
    }
}

impl ViewState {
    #[must_use]
    pub fn new(center: Coordinate, zoom: f64) -> Self {
        Self {
            center,
            zoom,
            marker: None,
        }
    }

    pub fn place_marker(&mut self, at: Coordinate) {
        self.marker = Some(at);
    }

    pub fn pan_to(&mut self, at: Coordinate, zoom: Option<f64>) {
        self.center = at;
        if let Some(zoom) = zoom {
            self.zoom = zoom;
        }
    }

    #[must_use]
    pub const fn has_marker(&self) -> bool {
        self.marker.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_coordinates() {
        assert!(is_valid_coordinate(Coordinate { lat: 0.0, lng: 0.0 }));
        assert!(is_valid_coordinate(Coordinate {
            lat: -90.0,
            lng: 180.0
        }));
        assert!(!is_valid_coordinate(Coordinate {
            lat: 90.1,
            lng: 0.0
        }));
        assert!(!is_valid_coordinate(Coordinate {
            lat: 0.0,
            lng: -180.5
        }));
        assert!(!is_valid_coordinate(Coordinate {
            lat: f64::NAN,
            lng: 0.0
        }));
    }

    #[test]
    fn pan_keeps_zoom_if_not_given() {
        let mut state = ViewState::default();
        let at = Coordinate {
            lat: 18.0,
            lng: 79.5,
        };
        state.pan_to(at, None);
        assert_eq!(state.center, at);
        assert!((state.zoom - DEFAULT_ZOOM).abs() < f64::EPSILON);
        state.pan_to(at, Some(SEARCH_RESULT_ZOOM));
        assert!((state.zoom - SEARCH_RESULT_ZOOM).abs() < f64::EPSILON);
        assert!(!state.has_marker());
        state.place_marker(at);
        assert_eq!(state.marker, Some(at));
    }
}
