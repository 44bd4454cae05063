//! Local fallback data for provider outages.
//!
//! When the mapping provider is unreachable the gateway answers from this
//! fixed district list instead of surfacing the failure.

use crate::domain::LatLng;

use super::convert::{PlaceHit, ResolvedLocation};

/// Known places in the district: name, address, latitude, longitude.
const KNOWN_PLACES: &[(&str, &str, f64, f64)] = &[
    (
        "SM City North EDSA",
        "North Ave cor. EDSA, Quezon City",
        14.6564,
        121.0302,
    ),
    (
        "UP-Ayala Land TechnoHub",
        "Commonwealth Ave, UP Campus, Quezon City",
        14.6575,
        121.0580,
    ),
    (
        "Teacher's Village Palengke",
        "Matatag St, Teacher's Village, Quezon City",
        14.6741,
        121.0359,
    ),
    (
        "Philcoa Market",
        "Commonwealth Ave, Quezon City",
        14.6549,
        121.0452,
    ),
    (
        "UP Diliman",
        "Osmeña Ave, UP Diliman, Quezon City",
        14.6547,
        121.0644,
    ),
    (
        "Quezon City Hall",
        "Elliptical Rd, Diliman, Quezon City",
        14.6472,
        121.0509,
    ),
    (
        "Visayas Avenue",
        "Visayas Ave, Project 6, Quezon City",
        14.6697,
        121.0445,
    ),
    (
        "Quezon Memorial Circle",
        "Elliptical Rd, Quezon City",
        14.6513,
        121.0493,
    ),
];

/// Case-insensitive substring search over the fallback list.
pub fn match_places(query: &str) -> Vec<PlaceHit> {
    let needle = query.to_lowercase();

    KNOWN_PLACES
        .iter()
        .filter(|(name, ..)| name.to_lowercase().contains(&needle))
        .map(|(name, address, lat, lng)| PlaceHit {
            name: (*name).to_string(),
            address: (*address).to_string(),
            position: LatLng::new(*lat, *lng),
        })
        .collect()
}

/// Generic label for a point the provider could not resolve.
///
/// Rounded to 4 decimal places, roughly 11 m of precision.
pub fn reverse_label(point: LatLng) -> ResolvedLocation {
    ResolvedLocation {
        short_name: format!("{:.4}, {:.4}", point.latitude, point.longitude),
        area_label: format!("Near {:.4}, {:.4}", point.latitude, point.longitude),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn substring_match_is_case_insensitive() {
        let hits = match_places("sm city");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "SM City North EDSA");

        let hits = match_places("SM City");
        assert_eq!(hits.len(), 1);
    }

    #[test]
    fn partial_words_match() {
        let hits = match_places("techno");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "UP-Ayala Land TechnoHub");
    }

    #[test]
    fn multiple_hits_keep_list_order() {
        let hits = match_places("quezon");
        let names: Vec<&str> = hits.iter().map(|h| h.name.as_str()).collect();
        assert_eq!(names, vec!["Quezon City Hall", "Quezon Memorial Circle"]);
    }

    #[test]
    fn no_match_is_empty() {
        assert!(match_places("makati").is_empty());
    }

    #[test]
    fn reverse_label_rounds_to_four_decimals() {
        let resolved = reverse_label(LatLng::new(14.67412, 121.03587));
        assert!(resolved.short_name.contains("14.6741"));
        assert!(resolved.short_name.contains("121.0359"));
        assert!(resolved.area_label.starts_with("Near "));
    }

    #[test]
    fn reverse_label_for_exact_coordinates() {
        let resolved = reverse_label(LatLng::new(14.6741, 121.0359));
        assert_eq!(resolved.short_name, "14.6741, 121.0359");
    }
}
