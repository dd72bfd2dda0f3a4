//! Donor tracking lookup.
//!
//! The tracking table is an external CSV with the columns `blood_group`,
//! `name`, `latitude` and `longitude`. The first row whose blood group
//! equals the donation's (after normalization) is the one reported; no
//! distance or availability ranking takes place.

use super::compatibility::normalize_blood_type;
use super::source::{LookupError, Source};
use common::model::donor::TrackedDonor;
use std::path::Path;

const COLUMNS: [&str; 4] = ["blood_group", "name", "latitude", "longitude"];

/// Returns the first donor in the table at `path` with the same blood group,
/// or `None` when no row matches.
///
/// Coordinates are only parsed for the selected row; a bad value there is
/// `LookupError::InvalidValue`.
pub fn find_tracked_donor(
    path: &Path,
    blood_type: &str,
) -> Result<Option<TrackedDonor>, LookupError> {
    let wanted = normalize_blood_type(blood_type);
    let mut source = Source::open(path, &COLUMNS)?;
    if wanted.is_empty() {
        return Ok(None);
    }

    for row in source.rows() {
        let (line, cells) = row?;
        let mut cells = cells.into_iter();
        let blood_group = cells.next().unwrap_or_default();
        if normalize_blood_type(&blood_group) != wanted {
            continue;
        }
        let name = cells.next().unwrap_or_default();
        let latitude = cells.next().unwrap_or_default();
        let longitude = cells.next().unwrap_or_default();

        return Ok(Some(TrackedDonor {
            latitude: parse_coordinate("latitude", line, latitude)?,
            longitude: parse_coordinate("longitude", line, longitude)?,
            name,
            blood_group,
        }));
    }

    Ok(None)
}

fn parse_coordinate(column: &'static str, line: usize, value: String) -> Result<f64, LookupError> {
    match value.parse::<f64>() {
        Ok(parsed) if parsed.is_finite() => Ok(parsed),
        _ => Err(LookupError::InvalidValue {
            column,
            line,
            value,
        }),
    }
}
