//! City registry for the air-quality map overview.
//!
//! Defines the canonical list of cities monitored by the dashboard,
//! with their display names and WGS84 coordinates. This is the single
//! source of truth for monitored locations; all other modules should
//! take a slice of these entries rather than hardcoding coordinates.

/// A fixed geographic monitoring point tracked by the dashboard.
#[derive(Debug, Clone, PartialEq)]
pub struct City {
    /// Stable identifier, unique within the registry.
    pub id: u32,
    /// Display name shown on markers and matched by the search filter.
    pub name: &'static str,
    /// WGS84 latitude.
    pub latitude: f64,
    /// WGS84 longitude.
    pub longitude: f64,
}

/// All monitored cities, Indian metros first, then one capital or major
/// city per covered country. Order is meaningful: batches preserve it.
pub static CITY_REGISTRY: &[City] = &[
    City { id: 1, name: "New Delhi", latitude: 28.6139, longitude: 77.2090 },
    City { id: 2, name: "Mumbai", latitude: 19.0760, longitude: 72.8777 },
    City { id: 3, name: "Bengaluru", latitude: 12.9716, longitude: 77.5946 },
    City { id: 4, name: "Kolkata", latitude: 22.5726, longitude: 88.3639 },
    City { id: 5, name: "Chennai", latitude: 13.0827, longitude: 80.2707 },
    City { id: 6, name: "Ahmedabad", latitude: 23.0225, longitude: 72.5714 },
    City { id: 7, name: "Hyderabad", latitude: 17.3850, longitude: 78.4867 },
    City { id: 8, name: "Pune", latitude: 18.5204, longitude: 73.8567 },
    City { id: 9, name: "Jaipur", latitude: 26.9124, longitude: 75.7873 },
    City { id: 10, name: "Los Angeles", latitude: 34.0522, longitude: -118.2437 },
    City { id: 11, name: "Washington, D.C.", latitude: 38.9072, longitude: -77.0369 },
    City { id: 12, name: "London", latitude: 51.5074, longitude: -0.1278 },
    City { id: 13, name: "Paris", latitude: 48.8566, longitude: 2.3522 },
    City { id: 14, name: "Berlin", latitude: 52.5200, longitude: 13.4050 },
    City { id: 15, name: "Tokyo", latitude: 35.6762, longitude: 139.6503 },
    City { id: 16, name: "Beijing", latitude: 39.9042, longitude: 116.4074 },
    City { id: 17, name: "Moscow", latitude: 55.7558, longitude: 37.6173 },
    City { id: 18, name: "Canberra", latitude: -35.2809, longitude: 149.1300 },
    City { id: 19, name: "Ottawa", latitude: 45.4215, longitude: -75.6972 },
    City { id: 20, name: "Brasília", latitude: -15.8267, longitude: -47.9218 },
    City { id: 21, name: "Rome", latitude: 41.9028, longitude: 12.4964 },
    City { id: 22, name: "Madrid", latitude: 40.4168, longitude: -3.7038 },
    City { id: 23, name: "Seoul", latitude: 37.5665, longitude: 126.9780 },
    City { id: 24, name: "Singapore", latitude: 1.3521, longitude: 103.8198 },
    City { id: 25, name: "Pretoria", latitude: -25.7479, longitude: 28.2293 },
    City { id: 26, name: "Abu Dhabi", latitude: 24.4539, longitude: 54.3773 },
    City { id: 27, name: "Riyadh", latitude: 24.7136, longitude: 46.6753 },
    City { id: 28, name: "Ankara", latitude: 39.9334, longitude: 32.8597 },
    City { id: 29, name: "Mexico City", latitude: 19.4326, longitude: -99.1332 },
    City { id: 30, name: "Buenos Aires", latitude: -34.6037, longitude: -58.3816 },
];

/// Looks up a city by id. Returns `None` if not found.
pub fn find_city(id: u32) -> Option<&'static City> {
    CITY_REGISTRY.iter().find(|c| c.id == id)
}

/// Returns the display names of all monitored cities, in registry order.
pub fn all_city_names() -> Vec<&'static str> {
    CITY_REGISTRY.iter().map(|c| c.name).collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_has_thirty_cities() {
        assert_eq!(CITY_REGISTRY.len(), 30);
    }

    #[test]
    fn test_no_duplicate_city_ids() {
        let mut seen = std::collections::HashSet::new();
        for city in CITY_REGISTRY {
            assert!(
                seen.insert(city.id),
                "duplicate city id {} found in CITY_REGISTRY",
                city.id
            );
        }
    }

    #[test]
    fn test_all_coordinates_are_in_range() {
        // A coordinate outside WGS84 bounds would be rejected by the
        // fetch orchestrator's registry validation, failing every batch.
        for city in CITY_REGISTRY {
            assert!(
                (-90.0..=90.0).contains(&city.latitude),
                "latitude out of range for '{}': {}",
                city.name,
                city.latitude
            );
            assert!(
                (-180.0..=180.0).contains(&city.longitude),
                "longitude out of range for '{}': {}",
                city.name,
                city.longitude
            );
        }
    }

    #[test]
    fn test_all_names_are_non_blank() {
        for city in CITY_REGISTRY {
            assert!(
                !city.name.trim().is_empty(),
                "city id {} has a blank name",
                city.id
            );
        }
    }

    #[test]
    fn test_find_city_returns_correct_entry() {
        let city = find_city(1).expect("New Delhi should be in the registry");
        assert_eq!(city.name, "New Delhi");
    }

    #[test]
    fn test_find_city_returns_none_for_unknown_id() {
        assert!(find_city(0).is_none());
        assert!(find_city(9999).is_none());
    }

    #[test]
    fn test_all_city_names_helper_matches_registry_length() {
        assert_eq!(all_city_names().len(), CITY_REGISTRY.len());
        assert!(all_city_names().contains(&"Tokyo"));
    }
}
