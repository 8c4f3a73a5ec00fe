use livability_boundary::{Facility, FacilityType};

/// The facility types that are displayed, in display order.
pub const DISPLAYED_FACILITY_TYPES: [FacilityType; 3] = [
    FacilityType::Hospital,
    FacilityType::School,
    FacilityType::GroceryOrSupermarket,
];

#[derive(Debug, Clone, PartialEq)]
pub struct FacilityGroup<'a> {
    pub kind: FacilityType,
    pub facilities: Vec<&'a Facility>,
}

impl FacilityGroup<'_> {
    #[must_use]
    pub fn title(&self) -> String {
        readable_type_name(self.kind)
    }
}

/// Groups the facilities by their type.
///
/// Only non-empty groups of displayed types are returned,
/// ordered by [`DISPLAYED_FACILITY_TYPES`]. Within a group
/// the incoming order is preserved.
#[must_use]
pub fn group_facilities(facilities: &[Facility]) -> Vec<FacilityGroup<'_>> {
    DISPLAYED_FACILITY_TYPES
        .iter()
        .map(|kind| FacilityGroup {
            kind: *kind,
            facilities: facilities.iter().filter(|f| f.kind == *kind).collect(),
        })
        .filter(|group| !group.facilities.is_empty())
        .collect()
}

#[must_use]
pub const fn type_name(kind: FacilityType) -> &'static str {
    match kind {
        FacilityType::Hospital => "hospital",
        FacilityType::School => "school",
        FacilityType::GroceryOrSupermarket => "grocery_or_supermarket",
        FacilityType::Other => "other",
    }
}

/// `grocery_or_supermarket` => `Grocery Or Supermarket`
#[must_use]
pub fn readable_type_name(kind: FacilityType) -> String {
    type_name(kind)
        .split('_')
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
