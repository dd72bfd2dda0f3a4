//! # Record Storage
//!
//! Three independent SQLite files back the application, one table each:
//! `users.sqlite`, `blood_requests.sqlite` and `blood_donations.sqlite`.
//! Nothing links them; every write is a single-row insert.
//!
//! A `Database` handle only carries the file path and the table schema.
//! Each operation opens its own `rusqlite::Connection`, scoped to that
//! operation, and makes sure the table exists before touching it.
//! Concurrent writers are serialized by SQLite's own file locking.
//!
//! The typed stores (`UserStore`, `RequestStore`, `DonationStore`) wrap a
//! handle each and expose the operations the HTTP services need. Their
//! methods are blocking; callers run them on the blocking thread pool.

pub mod donations;
pub mod requests;
pub mod users;

use rusqlite::Connection;
use std::path::PathBuf;
use std::time::Duration;

pub use donations::DonationStore;
pub use requests::RequestStore;
pub use users::UserStore;

/// How long a connection waits on a locked database file before failing.
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Path and schema of one SQLite file.
#[derive(Debug, Clone)]
pub struct Database {
    path: PathBuf,
    schema: &'static str,
}

impl Database {
    pub fn new(path: impl Into<PathBuf>, schema: &'static str) -> Self {
        Self {
            path: path.into(),
            schema,
        }
    }

    /// Opens a connection for a single operation and ensures the schema.
    pub fn connect(&self) -> Result<Connection, rusqlite::Error> {
        let conn = Connection::open(&self.path)?;
        conn.busy_timeout(BUSY_TIMEOUT)?;
        conn.execute_batch(self.schema)?;
        Ok(conn)
    }
}
