use livability_boundary::{AddressComponentType, Coordinate, GeocodeResult};

/// Component types that name a city, by preference.
const CITY_COMPONENT_TYPES: [AddressComponentType; 2] = [
    AddressComponentType::Locality,
    AddressComponentType::AdministrativeAreaLevel2,
];

/// Extracts the city name of a geocoding result.
///
/// A `locality` is preferred over an `administrative_area_level_2`.
/// If several components carry the same type the last one wins.
#[must_use]
pub fn extract_city_name(result: &GeocodeResult) -> Option<String> {
    CITY_COMPONENT_TYPES.iter().find_map(|kind| {
        result
            .address_components
            .iter()
            .rev()
            .find(|c| c.types.contains(kind))
            .map(|c| c.long_name.clone())
    })
}

#[must_use]
pub fn location(result: &GeocodeResult) -> Option<Coordinate> {
    result.geometry.as_ref().map(|g| g.location)
}

#[cfg(test)]
mod tests {
    use livability_boundary::AddressComponent;

    use super::*;

    fn component(name: &str, types: &[AddressComponentType]) -> AddressComponent {
        AddressComponent {
            long_name: name.into(),
            short_name: name.into(),
            types: types.to_vec(),
        }
    }

    fn result(components: Vec<AddressComponent>) -> GeocodeResult {
        GeocodeResult {
            address_components: components,
            ..Default::default()
        }
    }

    #[test]
    fn prefer_locality() {
        let res = result(vec![
            component("Hyderabad District", &[AddressComponentType::AdministrativeAreaLevel2]),
            component(
                "Hyderabad",
                &[AddressComponentType::Locality, AddressComponentType::Political],
            ),
            component("Telangana", &[AddressComponentType::AdministrativeAreaLevel1]),
        ]);
        assert_eq!(extract_city_name(&res).as_deref(), Some("Hyderabad"));
    }

    #[test]
    fn last_locality_wins() {
        let res = result(vec![
            component("Secunderabad", &[AddressComponentType::Locality]),
            component("Other", &[AddressComponentType::Other]),
            component("Hyderabad", &[AddressComponentType::Locality]),
        ]);
        assert_eq!(extract_city_name(&res).as_deref(), Some("Hyderabad"));
    }

    #[test]
    fn fall_back_to_last_admin_area_level_2() {
        let res = result(vec![
            component("Rangareddy", &[AddressComponentType::AdministrativeAreaLevel2]),
            component("Medchal", &[AddressComponentType::AdministrativeAreaLevel2]),
            component("India", &[AddressComponentType::Country]),
        ]);
        assert_eq!(extract_city_name(&res).as_deref(), Some("Medchal"));
    }

    #[test]
    fn no_city_name() {
        let res = result(vec![component("India", &[AddressComponentType::Country])]);
        assert!(extract_city_name(&res).is_none());
        assert!(extract_city_name(&GeocodeResult::default()).is_none());
    }
}
