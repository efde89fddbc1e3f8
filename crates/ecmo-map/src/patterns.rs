use ecmo_model::CanonicalField;

/// Ordered candidate spellings for a canonical field, highest priority first.
///
/// Candidates are matched case-insensitively but otherwise literally, so
/// spelling variants with underscores or different word orders each need
/// their own entry. The lists collect the header spellings observed across
/// registry exports; generic names like "Type" or "Date" sit last so they
/// only win when nothing more specific is present.
pub fn candidates(field: CanonicalField) -> &'static [&'static str] {
    match field {
        CanonicalField::Hospital => &[
            "Hospital",
            "Hospital Name",
            "Hospital_Name",
            "Centre",
            "Center",
        ],
        CanonicalField::City => &["Location City", "Location_City", "City"],
        CanonicalField::State => &["Location State", "Location_State", "State"],
        CanonicalField::EcmoType => &["ECMO Type", "ECMO_Type", "Type of ECMO", "Type"],
        CanonicalField::Diagnosis => &[
            "Provisional Diagnosis",
            "Provisional_Diagnosis",
            "Diagnosis",
            "Indication",
        ],
        CanonicalField::Age => &["Age", "Age (Years)", "Age in Years"],
        CanonicalField::Timestamp => &[
            "Initiation Date",
            "Initiation_Date",
            "Date of Initiation",
            "Timestamp",
            "Date",
        ],
        CanonicalField::Status => &["Status", "Current Status", "Current_Status"],
        CanonicalField::Comments => &["Comments", "Comment", "Remarks", "Notes"],
        CanonicalField::Latitude => &["Latitude", "Lat"],
        CanonicalField::Longitude => &["Longitude", "Long", "Lng", "Lon"],
    }
}
