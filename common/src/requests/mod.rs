//! Form payloads accepted by the HTTP endpoints.
//!
//! Every field defaults to an empty string so that a missing field reaches
//! the server-side validation stage instead of failing extraction. Field
//! names on the wire follow the HTML forms (`fname`, `ftype`, ...).

use serde::Deserialize;

/// `POST /signup`
#[derive(Debug, Default, Deserialize)]
pub struct SignupForm {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// `POST /login`
#[derive(Debug, Default, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// `POST /donate`
///
/// `age` and `weight` arrive as text and are only converted to integers by
/// the validation stage, which turns a bad value into a user-facing error.
#[derive(Debug, Default, Deserialize)]
pub struct DonationForm {
    #[serde(default, rename = "fname")]
    pub name: String,
    #[serde(default)]
    pub gender: String,
    #[serde(default, rename = "fage")]
    pub age: String,
    #[serde(default, rename = "fweight")]
    pub weight: String,
    #[serde(default, rename = "femail")]
    pub email: String,
    #[serde(default, rename = "fphone")]
    pub phone: String,
    #[serde(default, rename = "ftype")]
    pub blood_type: String,
    #[serde(default, rename = "fdetails")]
    pub medical_conditions: String,
}
