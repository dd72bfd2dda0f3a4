use serde::{Deserialize, Serialize};

/// A stored request for blood, as listed by `GET /blood_requests`.
///
/// `blood_type` is kept exactly as submitted (trimmed); it is only
/// upper-cased when it is used for matching.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BloodRequest {
    pub id: i64,
    pub name: String,
    pub gender: String,
    pub email: String,
    pub phone: String,
    pub blood_type: String,
    pub address: String,
    /// Server-side path of the uploaded ID proof, if one was sent.
    pub id_proof: Option<String>,
    /// File name as supplied by the client. Metadata only, never used as a path.
    pub id_proof_name: Option<String>,
    /// Hex MD5 digest of the uploaded bytes.
    pub id_proof_md5: Option<String>,
}

/// A validated blood request that has not been stored yet.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewBloodRequest {
    pub name: String,
    pub gender: String,
    pub email: String,
    pub phone: String,
    pub blood_type: String,
    pub address: String,
    pub id_proof: Option<String>,
    pub id_proof_name: Option<String>,
    pub id_proof_md5: Option<String>,
}
