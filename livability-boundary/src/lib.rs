use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy)]
#[cfg_attr(feature = "extra-derive", derive(PartialEq))]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

/// A measured value or a placeholder text such as `"N/A"`
/// that the backend sends if no measurement is available.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[cfg_attr(feature = "extra-derive", derive(PartialEq))]
#[serde(untagged)]
pub enum Reading {
    Value(f64),
    Text(String),
}

impl Reading {
    #[must_use]
    pub const fn value(&self) -> Option<f64> {
        match self {
            Self::Value(v) => Some(*v),
            Self::Text(_) => None,
        }
    }
}

impl From<f64> for Reading {
    fn from(v: f64) -> Self {
        Self::Value(v)
    }
}

impl fmt::Display for Reading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value(v) => write!(f, "{v}"),
            Self::Text(t) => f.write_str(t),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum FacilityType {
    Hospital,
    School,
    GroceryOrSupermarket,
    #[serde(other)]
    Other,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[cfg_attr(feature = "extra-derive", derive(PartialEq))]
pub struct Facility {
    pub name: Option<String>,
    pub vicinity: Option<String>,
    #[serde(rename = "type")]
    pub kind: FacilityType,
    pub distance_m: f64,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[cfg_attr(feature = "extra-derive", derive(PartialEq))]
pub struct AirQuality {
    pub aqi: Reading,
    pub pm25: Reading,
    pub last_updated: String,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[cfg_attr(feature = "extra-derive", derive(PartialEq))]
pub struct WaterQuality {
    pub wqi: Reading,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[cfg_attr(feature = "extra-derive", derive(PartialEq))]
pub struct Components {
    pub aqi: AirQuality,
    pub wqi: WaterQuality,
    #[serde(default)]
    pub facilities: Vec<Facility>,
}

/// Response of `GET /livability?lat=..&lng=..`
#[derive(Serialize, Deserialize, Debug, Clone)]
#[cfg_attr(feature = "extra-derive", derive(PartialEq))]
pub struct Livability {
    pub score: Reading,
    pub category: String,
    pub components: Components,
}

/// Response of `GET /predict?city=..`
#[rustfmt::skip]
#[derive(Serialize, Deserialize, Debug, Clone)]
#[cfg_attr(feature = "extra-derive", derive(PartialEq))]
pub struct Prediction {
    pub prediction         : String,
    pub city               : String,
    pub state              : String,
    pub aqi                : f64,
    pub wqi                : f64,
    pub water_quantity     : f64,
    pub population_density : f64,
    pub industry_distance  : f64,
    pub pollution          : f64,
    pub cost_of_living     : i64,
    pub hospitals          : u32,
    pub schools            : u32,
    pub stores             : u32,
    pub soil_type          : String,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize, Debug, Clone)]
#[cfg_attr(feature = "extra-derive", derive(PartialEq))]
pub struct AlternativeCity {
    pub city              : String,
    pub state             : String,
    pub aqi               : f64,
    pub wqi               : f64,
    pub pollution         : f64,
    pub industry_distance : f64,
    pub cost_of_living    : i64,
    pub hospitals         : u32,
    pub schools           : u32,
    pub stores            : u32,
}

/// Response of `GET /suggestions?city=..`
///
/// The suggestions are ranked by the backend.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[cfg_attr(feature = "extra-derive", derive(PartialEq))]
pub struct Alternatives {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(default)]
    pub suggestions: Vec<AlternativeCity>,
}

/// Error payload of the livability API.
#[derive(Serialize, Deserialize, Debug, Clone, thiserror::Error)]
#[cfg_attr(feature = "extra-derive", derive(PartialEq))]
#[error("{error}")]
pub struct Error {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggestions: Option<Vec<String>>,
}

/// Either an error-shaped or a success-shaped payload.
///
/// The error variant is tried first, i.e. every payload
/// containing an `error` field is a failure.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[cfg_attr(feature = "extra-derive", derive(PartialEq))]
#[serde(untagged)]
pub enum ApiResponse<T> {
    Failure(Error),
    Success(T),
}

impl<T> ApiResponse<T> {
    pub fn into_result(self) -> Result<T, Error> {
        match self {
            Self::Failure(err) => Err(err),
            Self::Success(res) => Ok(res),
        }
    }
}

// -- Geocoding -- //

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum AddressComponentType {
    Locality,
    AdministrativeAreaLevel1,
    AdministrativeAreaLevel2,
    Country,
    Political,
    PostalCode,
    #[serde(other)]
    Other,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[cfg_attr(feature = "extra-derive", derive(PartialEq))]
pub struct AddressComponent {
    pub long_name: String,
    #[serde(default)]
    pub short_name: String,
    #[serde(default)]
    pub types: Vec<AddressComponentType>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[cfg_attr(feature = "extra-derive", derive(PartialEq))]
pub struct Geometry {
    pub location: Coordinate,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[cfg_attr(feature = "extra-derive", derive(PartialEq))]
pub struct GeocodeResult {
    #[serde(default)]
    pub address_components: Vec<AddressComponent>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub formatted_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub geometry: Option<Geometry>,
}

/// Response of the geocoding service (both directions).
#[derive(Serialize, Deserialize, Debug, Clone)]
#[cfg_attr(feature = "extra-derive", derive(PartialEq))]
pub struct GeocodeResponse {
    pub status: String,
    #[serde(default)]
    pub results: Vec<GeocodeResult>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

impl GeocodeResponse {
    pub const STATUS_OK: &'static str = "OK";
    pub const STATUS_ZERO_RESULTS: &'static str = "ZERO_RESULTS";

    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.status == Self::STATUS_OK
    }
}
