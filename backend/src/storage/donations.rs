use super::Database;
use crate::error::AppError;
use common::model::blood_donation::{BloodDonation, NewBloodDonation};
use rusqlite::params;
use std::path::PathBuf;

const SCHEMA: &str = "CREATE TABLE IF NOT EXISTS blood_donations (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    gender TEXT NOT NULL,
    email TEXT NOT NULL,
    phone TEXT NOT NULL,
    blood_type TEXT NOT NULL,
    age INTEGER NOT NULL,
    weight INTEGER NOT NULL,
    medical_conditions TEXT
);";

/// Append-only store of donations backed by `blood_donations.sqlite`.
#[derive(Debug, Clone)]
pub struct DonationStore {
    db: Database,
}

impl DonationStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            db: Database::new(path, SCHEMA),
        }
    }

    pub fn insert_donation(&self, donation: &NewBloodDonation) -> Result<i64, AppError> {
        let conn = self.db.connect()?;
        conn.execute(
            "INSERT INTO blood_donations
                (name, gender, email, phone, blood_type, age, weight, medical_conditions)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            params![
                donation.name,
                donation.gender,
                donation.email,
                donation.phone,
                donation.blood_type,
                donation.age,
                donation.weight,
                donation.medical_conditions,
            ],
        )?;
        Ok(conn.last_insert_rowid())
    }

    /// All donations in insertion order.
    pub fn list_donations(&self) -> Result<Vec<BloodDonation>, AppError> {
        let conn = self.db.connect()?;
        let mut stmt = conn.prepare(
            "SELECT id, name, gender, email, phone, blood_type, age, weight, medical_conditions
             FROM blood_donations ORDER BY id",
        )?;
        let rows = stmt.query_map([], |row| {
            Ok(BloodDonation {
                id: row.get(0)?,
                name: row.get(1)?,
                gender: row.get(2)?,
                email: row.get(3)?,
                phone: row.get(4)?,
                blood_type: row.get(5)?,
                age: row.get(6)?,
                weight: row.get(7)?,
                medical_conditions: row.get(8)?,
            })
        })?;

        let donations = rows.collect::<Result<Vec<_>, _>>()?;
        Ok(donations)
    }
}
