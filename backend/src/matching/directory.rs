//! Donor directory lookup.
//!
//! The directory is an external spreadsheet export with (at least) the
//! columns `blood group`, `name` and `phone number`. Every row whose blood
//! group, normalized, belongs to the compatibility set is returned, in source
//! order, without deduplication or limit.

use super::compatibility::normalize_blood_type;
use super::source::{LookupError, Source};
use common::model::donor::DirectoryDonor;
use std::path::Path;

const COLUMNS: [&str; 3] = ["blood group", "name", "phone number"];

/// Scans the directory at `path` for donors whose blood group is in `donor_types`.
///
/// `donor_types` must already be normalized (as returned by
/// `compatibility::donor_types_for`). An empty set reads the file and
/// returns no rows.
pub fn find_compatible_donors(
    path: &Path,
    donor_types: &[&str],
) -> Result<Vec<DirectoryDonor>, LookupError> {
    let mut source = Source::open(path, &COLUMNS)?;
    let mut donors = Vec::new();

    for row in source.rows() {
        let (_, cells) = row?;
        let mut cells = cells.into_iter();
        let blood_group = cells.next().unwrap_or_default();
        let name = cells.next().unwrap_or_default();
        let phone_number = cells.next().unwrap_or_default();

        if donor_types.contains(&normalize_blood_type(&blood_group).as_str()) {
            donors.push(DirectoryDonor {
                name,
                phone_number,
                blood_group,
            });
        }
    }

    Ok(donors)
}
