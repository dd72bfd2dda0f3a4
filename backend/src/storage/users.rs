use super::Database;
use crate::error::AppError;
use common::model::user::User;
use rusqlite::{params, ErrorCode, OptionalExtension};
use std::path::PathBuf;

const SCHEMA: &str = "CREATE TABLE IF NOT EXISTS users (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    username TEXT NOT NULL UNIQUE,
    email TEXT NOT NULL UNIQUE,
    password_hash TEXT NOT NULL
);";

/// Credential store backed by `users.sqlite`.
#[derive(Debug, Clone)]
pub struct UserStore {
    db: Database,
}

impl UserStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            db: Database::new(path, SCHEMA),
        }
    }

    /// Inserts a user and returns its id.
    ///
    /// A username or email that is already taken yields `AppError::Conflict`
    /// without saying which of the two collided.
    pub fn insert_user(
        &self,
        username: &str,
        email: &str,
        password_hash: &str,
    ) -> Result<i64, AppError> {
        let conn = self.db.connect()?;
        match conn.execute(
            "INSERT INTO users (username, email, password_hash) VALUES (?1, ?2, ?3)",
            params![username, email, password_hash],
        ) {
            Ok(_) => Ok(conn.last_insert_rowid()),
            Err(rusqlite::Error::SqliteFailure(err, _))
                if err.code == ErrorCode::ConstraintViolation =>
            {
                Err(AppError::Conflict(
                    "Username or email is already registered".to_string(),
                ))
            }
            Err(e) => Err(e.into()),
        }
    }

    pub fn find_user_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        let conn = self.db.connect()?;
        let user = conn
            .query_row(
                "SELECT id, username, email, password_hash FROM users WHERE email = ?1",
                params![email],
                |row| {
                    Ok(User {
                        id: row.get(0)?,
                        username: row.get(1)?,
                        email: row.get(2)?,
                        password_hash: row.get(3)?,
                    })
                },
            )
            .optional()?;
        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> (tempfile::TempDir, UserStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = UserStore::new(dir.path().join("users.sqlite"));
        (dir, store)
    }

    #[test]
    fn inserts_and_finds_by_email() {
        let (_dir, store) = store();
        let id = store.insert_user("asha", "asha@example.com", "$argon2id$stub").unwrap();

        let user = store.find_user_by_email("asha@example.com").unwrap().unwrap();
        assert_eq!(user.id, id);
        assert_eq!(user.username, "asha");
        assert_eq!(user.password_hash, "$argon2id$stub");

        assert!(store.find_user_by_email("nobody@example.com").unwrap().is_none());
    }

    #[test]
    fn duplicate_username_or_email_is_a_conflict() {
        let (_dir, store) = store();
        store.insert_user("asha", "asha@example.com", "h").unwrap();

        let same_email = store.insert_user("other", "asha@example.com", "h").unwrap_err();
        assert!(matches!(same_email, AppError::Conflict(_)));

        let same_name = store.insert_user("asha", "other@example.com", "h").unwrap_err();
        assert!(matches!(same_name, AppError::Conflict(_)));
    }
}
