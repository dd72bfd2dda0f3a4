use serde::Serialize;

/// A registered account.
///
/// The password is only ever held as an Argon2 PHC string and is never
/// serialized back to a client.
#[derive(Debug, Clone, Serialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
}
