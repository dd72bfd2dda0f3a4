use serde::{Deserialize, Serialize};

/// A stored blood donation, as listed by `GET /blood_donations`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BloodDonation {
    pub id: i64,
    pub name: String,
    pub gender: String,
    pub email: String,
    pub phone: String,
    pub blood_type: String,
    pub age: u32,
    pub weight: u32,
    pub medical_conditions: Option<String>,
}

/// A validated donation that has not been stored yet.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewBloodDonation {
    pub name: String,
    pub gender: String,
    pub email: String,
    pub phone: String,
    pub blood_type: String,
    pub age: u32,
    pub weight: u32,
    pub medical_conditions: Option<String>,
}
