//! HTTP services.
//!
//! Each sub-module owns the routes of one area and exposes a
//! `configure_routes` function that registers them on the application:
//! - `pages`: static pages embedded in the binary.
//! - `auth`: signup, login and logout.
//! - `requests`: blood request submission with donor matching, and listing.
//! - `donations`: donation submission with donor tracking, and listing.

pub mod auth;
pub mod donations;
pub mod pages;
pub mod requests;
mod validation;

use crate::error::AppError;
use actix_web::web;

/// Registers every route of the application.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    pages::configure_routes(cfg);
    auth::configure_routes(cfg);
    requests::configure_routes(cfg);
    donations::configure_routes(cfg);
}

/// Runs blocking work (SQLite, file I/O, password hashing) on the blocking
/// thread pool so it never stalls the async workers.
pub(crate) async fn run_blocking<F, T>(work: F) -> Result<T, AppError>
where
    F: FnOnce() -> Result<T, AppError> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(work)
        .await
        .map_err(|e| AppError::Internal(format!("Task join error: {}", e)))?
}
