//! JSON payloads returned by the submission endpoints.
//!
//! Enrichment results (the donor directory and tracking lookups) are
//! reported as tagged statuses so a client can tell "nothing matched" apart
//! from "the source could not be read".

use crate::model::donor::{DirectoryDonor, TrackedDonor};
use serde::{Deserialize, Serialize};

/// Health of the donor directory lookup for one blood request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum DirectoryStatus {
    Available,
    Unavailable { reason: String },
}

/// Returned by `POST /contact` once the request has been stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchingResponse {
    pub request_id: i64,
    /// The requested blood type, trimmed and upper-cased.
    pub recipient: String,
    /// Donor types accepted for `recipient`; empty for an unknown type.
    pub compatible_types: Vec<String>,
    /// Matching directory rows in source order.
    pub donors: Vec<DirectoryDonor>,
    pub directory: DirectoryStatus,
}

/// Outcome of the tracking lookup that follows a donation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum TrackingOutcome {
    Found(TrackedDonor),
    NoMatch,
    Unavailable { reason: String },
}

/// Returned by `POST /donate` once the donation has been stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DonationResponse {
    pub donation_id: i64,
    pub tracking: TrackingOutcome,
}
