use std::fmt;

use livability_boundary::Reading;

/// Health impact of a PM2.5 concentration (µg/m³).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pm25Health {
    Good,
    Moderate,
    UnhealthyForSensitiveGroups,
    Unhealthy,
    VeryUnhealthyOrHazardous,
    Unknown,
}

/// Upper bounds (inclusive) in ascending order.
const BREAKPOINTS: [(f64, Pm25Health); 4] = [
    (12.0, Pm25Health::Good),
    (35.4, Pm25Health::Moderate),
    (55.4, Pm25Health::UnhealthyForSensitiveGroups),
    (150.4, Pm25Health::Unhealthy),
];

impl Pm25Health {
    #[must_use]
    pub fn classify(pm25: f64) -> Self {
        BREAKPOINTS
            .iter()
            .find(|(upper, _)| pm25 <= *upper)
            .map_or(Self::VeryUnhealthyOrHazardous, |(_, health)| *health)
    }

    #[must_use]
    pub fn from_reading(reading: &Reading) -> Self {
        reading.value().map_or(Self::Unknown, Self::classify)
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Good => "Good",
            Self::Moderate => "Moderate",
            Self::UnhealthyForSensitiveGroups => "Unhealthy for sensitive groups",
            Self::Unhealthy => "Unhealthy",
            Self::VeryUnhealthyOrHazardous => "Very unhealthy or hazardous",
            Self::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for Pm25Health {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_at_breakpoints() {
        assert_eq!(Pm25Health::classify(0.0), Pm25Health::Good);
        assert_eq!(Pm25Health::classify(12.0), Pm25Health::Good);
        assert_eq!(Pm25Health::classify(12.01), Pm25Health::Moderate);
        assert_eq!(Pm25Health::classify(35.4), Pm25Health::Moderate);
        assert_eq!(
            Pm25Health::classify(35.5),
            Pm25Health::UnhealthyForSensitiveGroups
        );
        assert_eq!(
            Pm25Health::classify(55.4),
            Pm25Health::UnhealthyForSensitiveGroups
        );
        assert_eq!(Pm25Health::classify(55.41), Pm25Health::Unhealthy);
        assert_eq!(Pm25Health::classify(150.4), Pm25Health::Unhealthy);
        assert_eq!(
            Pm25Health::classify(150.5),
            Pm25Health::VeryUnhealthyOrHazardous
        );
        assert_eq!(
            Pm25Health::classify(999.0),
            Pm25Health::VeryUnhealthyOrHazardous
        );
    }

    #[test]
    fn every_value_gets_exactly_one_known_label() {
        let labels = [
            "Good",
            "Moderate",
            "Unhealthy for sensitive groups",
            "Unhealthy",
            "Very unhealthy or hazardous",
        ];
        let mut v = -5.0;
        while v < 300.0 {
            let label = Pm25Health::classify(v).label();
            assert_eq!(labels.iter().filter(|l| **l == label).count(), 1);
            v += 0.1;
        }
    }

    #[test]
    fn unavailable_reading_is_unknown() {
        let reading = Reading::Text("N/A".into());
        assert_eq!(Pm25Health::from_reading(&reading), Pm25Health::Unknown);
        assert_eq!(Pm25Health::from_reading(&reading).to_string(), "Unknown");
        assert_eq!(
            Pm25Health::from_reading(&Reading::Value(20.0)),
            Pm25Health::Moderate
        );
    }
}
