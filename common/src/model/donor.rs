use serde::{Deserialize, Serialize};

/// One row of the external donor directory that matched a compatibility set.
///
/// Values are reported as they appear in the source (trimmed), so
/// `blood_group` may differ in case from the normalized type it matched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DirectoryDonor {
    pub name: String,
    pub phone_number: String,
    pub blood_group: String,
}

/// The donor picked from the external tracking table for a donation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackedDonor {
    pub name: String,
    pub blood_group: String,
    pub latitude: f64,
    pub longitude: f64,
}
