use super::Database;
use crate::error::AppError;
use common::model::blood_request::{BloodRequest, NewBloodRequest};
use rusqlite::params;
use std::path::PathBuf;

const SCHEMA: &str = "CREATE TABLE IF NOT EXISTS blood_requests (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    gender TEXT NOT NULL,
    email TEXT NOT NULL,
    phone TEXT NOT NULL,
    blood_type TEXT NOT NULL,
    address TEXT NOT NULL,
    id_proof TEXT,
    id_proof_name TEXT,
    id_proof_md5 TEXT
);";

/// Append-only store of blood requests backed by `blood_requests.sqlite`.
#[derive(Debug, Clone)]
pub struct RequestStore {
    db: Database,
}

impl RequestStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            db: Database::new(path, SCHEMA),
        }
    }

    pub fn insert_request(&self, request: &NewBloodRequest) -> Result<i64, AppError> {
        let conn = self.db.connect()?;
        conn.execute(
            "INSERT INTO blood_requests
                (name, gender, email, phone, blood_type, address, id_proof, id_proof_name, id_proof_md5)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
            params![
                request.name,
                request.gender,
                request.email,
                request.phone,
                request.blood_type,
                request.address,
                request.id_proof,
                request.id_proof_name,
                request.id_proof_md5,
            ],
        )?;
        Ok(conn.last_insert_rowid())
    }

    /// All requests in insertion order.
    pub fn list_requests(&self) -> Result<Vec<BloodRequest>, AppError> {
        let conn = self.db.connect()?;
        let mut stmt = conn.prepare(
            "SELECT id, name, gender, email, phone, blood_type, address, id_proof, id_proof_name, id_proof_md5
             FROM blood_requests ORDER BY id",
        )?;
        let rows = stmt.query_map([], |row| {
            Ok(BloodRequest {
                id: row.get(0)?,
                name: row.get(1)?,
                gender: row.get(2)?,
                email: row.get(3)?,
                phone: row.get(4)?,
                blood_type: row.get(5)?,
                address: row.get(6)?,
                id_proof: row.get(7)?,
                id_proof_name: row.get(8)?,
                id_proof_md5: row.get(9)?,
            })
        })?;

        let requests = rows.collect::<Result<Vec<_>, _>>()?;
        Ok(requests)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> NewBloodRequest {
        NewBloodRequest {
            name: "Meera".to_string(),
            gender: "female".to_string(),
            email: "meera@example.com".to_string(),
            phone: "9876543210".to_string(),
            blood_type: "ab+".to_string(),
            address: "12 Lake Road".to_string(),
            ..NewBloodRequest::default()
        }
    }

    #[test]
    fn identical_requests_are_stored_separately() {
        let dir = tempfile::tempdir().unwrap();
        let store = RequestStore::new(dir.path().join("blood_requests.sqlite"));

        let first = store.insert_request(&sample()).unwrap();
        let second = store.insert_request(&sample()).unwrap();
        assert_ne!(first, second);

        let stored = store.list_requests().unwrap();
        assert_eq!(stored.len(), 2);
        assert_eq!(stored[0].id, first);
        assert_eq!(stored[1].id, second);
        // Stored as submitted; normalization only happens at lookup time.
        assert_eq!(stored[0].blood_type, "ab+");
        assert_eq!(stored[0].id_proof, None);
    }

    #[test]
    fn keeps_upload_metadata() {
        let dir = tempfile::tempdir().unwrap();
        let store = RequestStore::new(dir.path().join("blood_requests.sqlite"));
        let request = NewBloodRequest {
            id_proof: Some("uploads/2b7c.png".to_string()),
            id_proof_name: Some("aadhaar.png".to_string()),
            id_proof_md5: Some("5d41402abc4b2a76b9719d911017c592".to_string()),
            ..sample()
        };
        store.insert_request(&request).unwrap();

        let stored = store.list_requests().unwrap().remove(0);
        assert_eq!(stored.id_proof.as_deref(), Some("uploads/2b7c.png"));
        assert_eq!(stored.id_proof_name.as_deref(), Some("aadhaar.png"));
        assert_eq!(
            stored.id_proof_md5.as_deref(),
            Some("5d41402abc4b2a76b9719d911017c592")
        );
    }

    #[test]
    fn empty_store_lists_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let store = RequestStore::new(dir.path().join("blood_requests.sqlite"));
        assert!(store.list_requests().unwrap().is_empty());
    }
}
