use ecmo_map::{build_field_map, resolve};
use ecmo_model::{CanonicalField, Resolution};

fn headers(names: &[&str]) -> Vec<String> {
    names.iter().map(|name| (*name).to_string()).collect()
}

#[test]
fn resolves_a_registry_export_end_to_end() {
    let headers = headers(&[
        "Timestamp",
        "Hospital Name",
        "Location_City",
        "Location_State",
        "Type of ECMO",
        "Provisional Diagnosis",
        "Age",
        "Current Status",
        "Comments",
    ]);
    let map = build_field_map(&headers);

    assert_eq!(map.column(CanonicalField::Hospital), Some("Hospital Name"));
    assert_eq!(map.column(CanonicalField::City), Some("Location_City"));
    assert_eq!(map.column(CanonicalField::State), Some("Location_State"));
    assert_eq!(map.column(CanonicalField::EcmoType), Some("Type of ECMO"));
    assert_eq!(
        map.column(CanonicalField::Diagnosis),
        Some("Provisional Diagnosis")
    );
    assert_eq!(map.column(CanonicalField::Timestamp), Some("Timestamp"));
    assert_eq!(map.column(CanonicalField::Status), Some("Current Status"));
    assert!(!map.is_resolved(CanonicalField::Latitude));
    assert!(!map.is_resolved(CanonicalField::Longitude));
    assert_eq!(map.resolved_count(), 9);
}

#[test]
fn exact_resolution_is_header_order_independent() {
    // One exact match for City among unrelated headers: every permutation
    // must resolve to the same column.
    let base = ["Hospital", "Location_City", "Remarks", "Age"];
    let permutations: &[[usize; 4]] = &[
        [0, 1, 2, 3],
        [3, 2, 1, 0],
        [1, 0, 3, 2],
        [2, 3, 0, 1],
        [1, 3, 0, 2],
    ];
    for order in permutations {
        let permuted = headers(&order.map(|idx| base[idx]));
        assert_eq!(
            resolve(&permuted, CanonicalField::City),
            Resolution::Resolved("Location_City".to_string()),
            "order {order:?} changed the resolution"
        );
    }
}

#[test]
fn specific_type_candidate_wins_over_generic() {
    // "Type" is the lowest-priority candidate for EcmoType; an exact
    // "ECMO_Type" header must win even when a bare "Type" column exists.
    let headers = headers(&["Type", "ECMO_Type"]);
    assert_eq!(
        resolve(&headers, CanonicalField::EcmoType),
        Resolution::Resolved("ECMO_Type".to_string())
    );
}

#[test]
fn substring_match_tolerates_decorated_headers() {
    let headers = headers(&[
        "S.No",
        "Name of Hospital (full)",
        "City / Town",
        "State of India",
        "ECMO Type (VV/VA)",
    ]);
    let map = build_field_map(&headers);

    assert_eq!(
        map.column(CanonicalField::Hospital),
        Some("Name of Hospital (full)")
    );
    assert_eq!(map.column(CanonicalField::City), Some("City / Town"));
    assert_eq!(map.column(CanonicalField::State), Some("State of India"));
    assert_eq!(
        map.column(CanonicalField::EcmoType),
        Some("ECMO Type (VV/VA)")
    );
}

#[test]
fn unresolved_fields_stay_tagged_not_defaulted() {
    let map = build_field_map(&headers(&["Hospital"]));
    assert!(map.is_resolved(CanonicalField::Hospital));
    for field in [
        CanonicalField::City,
        CanonicalField::State,
        CanonicalField::Timestamp,
    ] {
        assert_eq!(*map.resolution(field), Resolution::Unresolved);
    }
}
