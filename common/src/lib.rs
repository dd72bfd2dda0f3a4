//! Data shapes shared between the bloodlink server and its clients.
//!
//! - `model`: stored records and the rows read from the external donor sources.
//! - `requests`: the form payloads accepted by the HTTP endpoints.
//! - `responses`: the JSON payloads returned after a submission.

pub mod model;
pub mod requests;
pub mod responses;
