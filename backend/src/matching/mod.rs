//! # Donor Matching
//!
//! The decision logic of the application:
//!
//! - `compatibility`: the fixed recipient → donor blood type table.
//! - `directory`: scans the external donor directory for every donor whose
//!   blood group is in a compatibility set.
//! - `tracking`: picks the first donor of an exact blood group from the
//!   external tracking table.
//!
//! Both external sources are CSV files maintained outside this system and
//! read through `source`. Lookups are best-effort enrichment: a missing or
//! malformed file is reported as a `source::LookupError`, which the submission flows
//! turn into an "unavailable" status instead of failing the request.

pub mod compatibility;
pub mod directory;
mod source;
pub mod tracking;

pub use compatibility::{donor_types_for, normalize_blood_type};
pub use directory::find_compatible_donors;
pub use tracking::find_tracked_donor;
