/// Recipient blood type → donor types that may give to it.
const COMPATIBILITY: &[(&str, &[&str])] = &[
    ("A+", &["A+", "A-", "O+", "O-"]),
    ("A-", &["A-", "O-"]),
    ("B+", &["B+", "B-", "O+", "O-"]),
    ("B-", &["B-", "O-"]),
    // Dead entry: no ABO/Rh type is written this way, so ordinary input
    // never reaches it. Kept verbatim; it does not define an A1 subgroup.
    ("A1B+", &["AB+"]),
    ("AB+", &["A+", "A-", "B+", "B-", "AB+", "AB-", "O+", "O-"]),
    ("AB-", &["A-", "B-", "AB-", "O-"]),
    ("O+", &["O+", "O-"]),
    ("O-", &["O-"]),
];

/// Canonical form used for every blood type comparison.
pub fn normalize_blood_type(raw: &str) -> String {
    raw.trim().to_uppercase()
}

/// Donor types compatible with `requested`.
///
/// The lookup is an exact match on the normalized string. Unknown types get
/// an empty slice; nothing is inferred from partial matches.
pub fn donor_types_for(requested: &str) -> &'static [&'static str] {
    let key = normalize_blood_type(requested);
    COMPATIBILITY
        .iter()
        .find(|(recipient, _)| *recipient == key)
        .map(|(_, donors)| *donors)
        .unwrap_or(&[])
}
