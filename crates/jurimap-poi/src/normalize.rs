//! Normalization of raw POI records into distance-filtered, sorted places.

use serde::{Deserialize, Serialize};

use jurimap_core::{haversine_km, Coordinate};

use crate::types::{RawPlaceRecord, TagMap};

const NAME_KEYS: &[&str] = &["name", "operator"];
const ADDRESS_KEYS: &[&str] = &["addr:street", "addr:city", "addr:state"];
const PHONE_KEYS: &[&str] = &["phone", "contact:phone"];
const WEBSITE_KEYS: &[&str] = &["website", "contact:website"];

/// A normalized legal-service place.
///
/// Derived once from a raw record and the search origin; immutable. Records
/// farther than the search radius never become a `Place`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    pub name: String,
    pub address: String,
    pub phone: String,
    /// Empty string when the record carries no website tag.
    pub website: String,
    /// Great-circle distance from the search origin, rounded to 2 decimals.
    pub distance_km: f64,
    pub coordinate: Coordinate,
}

/// Converts raw records into places within `radius_km` of `origin`, sorted
/// ascending by distance.
///
/// The upstream radius search is advisory; the distance is recomputed here
/// and records outside the radius are discarded. A record lacking usable
/// coordinates is skipped without failing the batch.
#[must_use]
pub fn normalize_places(
    records: &[RawPlaceRecord],
    origin: Coordinate,
    radius_km: f64,
) -> Vec<Place> {
    let mut places: Vec<Place> = records
        .iter()
        .filter_map(|record| normalize_record(record, origin, radius_km))
        .collect();
    places.sort_by(|a, b| a.distance_km.total_cmp(&b.distance_km));
    places
}

fn normalize_record(record: &RawPlaceRecord, origin: Coordinate, radius_km: f64) -> Option<Place> {
    let Some(coordinate) = record_coordinate(record) else {
        tracing::debug!(id = record.id, "skipping POI record without usable coordinates");
        return None;
    };

    let distance = haversine_km(origin, coordinate);
    if distance > radius_km {
        return None;
    }

    let tags = &record.tags;
    Some(Place {
        name: tags.first_of(NAME_KEYS).unwrap_or("Unnamed").to_owned(),
        address: resolve_address(tags),
        phone: tags
            .first_of(PHONE_KEYS)
            .unwrap_or("Not available")
            .to_owned(),
        website: tags.first_of(WEBSITE_KEYS).unwrap_or("").to_owned(),
        distance_km: round_2dp(distance),
        coordinate,
    })
}

/// Coordinate from a direct lat/lon pair if present, else from the nested
/// center, else `None`. Out-of-range values count as unusable.
fn record_coordinate(record: &RawPlaceRecord) -> Option<Coordinate> {
    let (lat, lon) = match (record.lat, record.lon, record.center) {
        (Some(lat), Some(lon), _) => (lat, lon),
        (_, _, Some(center)) => (center.lat, center.lon),
        _ => return None,
    };
    Coordinate::new(lat, lon).ok()
}

/// Comma-joins whichever address tags are present and non-empty, in fixed
/// street → city → state order.
fn resolve_address(tags: &TagMap) -> String {
    let parts: Vec<&str> = ADDRESS_KEYS
        .iter()
        .filter_map(|key| tags.get(key).filter(|v| !v.is_empty()))
        .collect();
    if parts.is_empty() {
        "Not available".to_owned()
    } else {
        parts.join(", ")
    }
}

fn round_2dp(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::CenterPoint;

    fn origin() -> Coordinate {
        Coordinate::new(0.0, 0.0).unwrap()
    }

    fn record_at(lat: f64, lon: f64, tags: TagMap) -> RawPlaceRecord {
        RawPlaceRecord {
            id: None,
            lat: Some(lat),
            lon: Some(lon),
            center: None,
            tags,
        }
    }

    #[test]
    fn tagged_record_within_radius_is_retained() {
        // 0.03° of longitude at the equator is ~3.34 km.
        let record = record_at(
            0.0,
            0.03,
            TagMap::from([
                ("name", "Legal Aid Society"),
                ("addr:street", "MG Road"),
                ("addr:city", "Bhubaneswar"),
            ]),
        );
        let places = normalize_places(&[record], origin(), 5.0);

        assert_eq!(places.len(), 1);
        let place = &places[0];
        assert_eq!(place.name, "Legal Aid Society");
        assert_eq!(place.address, "MG Road, Bhubaneswar");
        assert_eq!(place.phone, "Not available");
        assert_eq!(place.website, "");
        assert!((place.distance_km - 3.34).abs() < 0.01, "got {}", place.distance_km);
    }

    #[test]
    fn same_record_outside_radius_is_excluded() {
        // 0.07° of longitude at the equator is ~7.78 km.
        let record = record_at(
            0.0,
            0.07,
            TagMap::from([("name", "Legal Aid Society")]),
        );
        let places = normalize_places(&[record], origin(), 5.0);
        assert!(places.is_empty());
    }

    #[test]
    fn every_place_is_within_radius() {
        let records: Vec<RawPlaceRecord> = (1..=10)
            .map(|i| record_at(0.0, f64::from(i) * 0.01, TagMap::default()))
            .collect();
        let radius = 5.0;
        let places = normalize_places(&records, origin(), radius);

        assert!(!places.is_empty());
        assert!(places.len() < records.len(), "some records must be filtered");
        for place in &places {
            assert!(place.distance_km <= radius);
        }
    }

    #[test]
    fn output_is_sorted_ascending_by_distance() {
        let records = vec![
            record_at(0.0, 0.04, TagMap::from([("name", "far")])),
            record_at(0.0, 0.01, TagMap::from([("name", "near")])),
            record_at(0.0, 0.02, TagMap::from([("name", "mid")])),
        ];
        let places = normalize_places(&records, origin(), 10.0);

        let names: Vec<&str> = places.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["near", "mid", "far"]);
        for pair in places.windows(2) {
            assert!(pair[0].distance_km <= pair[1].distance_km);
        }
    }

    #[test]
    fn record_without_coordinates_is_dropped_silently() {
        let record = RawPlaceRecord {
            id: Some(9),
            lat: None,
            lon: None,
            center: None,
            tags: TagMap::from([("name", "Ghost Office")]),
        };
        let places = normalize_places(&[record], origin(), 5.0);
        assert!(places.is_empty());
    }

    #[test]
    fn center_coordinates_are_used_for_area_features() {
        let record = RawPlaceRecord {
            id: None,
            lat: None,
            lon: None,
            center: Some(CenterPoint { lat: 0.0, lon: 0.02 }),
            tags: TagMap::from([("name", "District Court")]),
        };
        let places = normalize_places(&[record], origin(), 5.0);
        assert_eq!(places.len(), 1);
        assert!((places[0].coordinate.longitude - 0.02).abs() < 1e-9);
    }

    #[test]
    fn out_of_range_coordinates_drop_the_record() {
        let record = record_at(95.0, 0.0, TagMap::default());
        let places = normalize_places(&[record], origin(), 20.0);
        assert!(places.is_empty());
    }

    #[test]
    fn name_falls_back_to_operator_then_unnamed() {
        let with_operator = record_at(0.0, 0.01, TagMap::from([("operator", "Bar Council")]));
        let with_nothing = record_at(0.0, 0.01, TagMap::default());
        let places = normalize_places(&[with_operator, with_nothing], origin(), 5.0);

        assert_eq!(places[0].name, "Bar Council");
        assert_eq!(places[1].name, "Unnamed");
    }

    #[test]
    fn phone_and_website_use_contact_fallbacks() {
        let record = record_at(
            0.0,
            0.01,
            TagMap::from([
                ("contact:phone", "+91 674 000 0000"),
                ("contact:website", "https://example.in"),
            ]),
        );
        let places = normalize_places(&[record], origin(), 5.0);

        assert_eq!(places[0].phone, "+91 674 000 0000");
        assert_eq!(places[0].website, "https://example.in");
    }

    #[test]
    fn address_skips_absent_parts_in_fixed_order() {
        let record = record_at(
            0.0,
            0.01,
            TagMap::from([("addr:state", "Odisha"), ("addr:city", "Bhubaneswar")]),
        );
        let places = normalize_places(&[record], origin(), 5.0);
        assert_eq!(places[0].address, "Bhubaneswar, Odisha");
    }

    #[test]
    fn normalization_is_idempotent() {
        let record = record_at(
            0.0,
            0.015,
            TagMap::from([("name", "High Court"), ("phone", "100")]),
        );
        let first = normalize_places(std::slice::from_ref(&record), origin(), 5.0);
        let second = normalize_places(std::slice::from_ref(&record), origin(), 5.0);
        assert_eq!(first, second);
    }

    #[test]
    fn distance_is_rounded_to_two_decimals() {
        let record = record_at(0.0, 0.0123, TagMap::default());
        let places = normalize_places(&[record], origin(), 5.0);
        let d = places[0].distance_km;
        assert!(((d * 100.0).round() / 100.0 - d).abs() < 1e-12);
    }
}
