//! Server configuration loaded from environment variables.
//!
//! Every setting has a default so the server starts with zero configuration
//! for local development. The one exception worth knowing about is the
//! session secret: the built-in default is public and a warning is logged
//! whenever it is in use.

use actix_web::cookie::Key;
use log::{info, warn};
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Minimum length accepted for `BLOODLINK_SECRET_KEY`, in bytes.
pub const MIN_SECRET_LEN: usize = 32;

/// Development-only signing key. Anyone can forge sessions with it.
const INSECURE_DEFAULT_SECRET: &str = "bloodlink-insecure-development-secret-change-me";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid {key} value '{value}': {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },

    #[error("BLOODLINK_SECRET_KEY must be at least {MIN_SECRET_LEN} bytes long")]
    SecretTooShort,
}

/// Server configuration.
#[derive(Clone)]
pub struct Config {
    /// Env: `BLOODLINK_HOST`, default `127.0.0.1`.
    pub host: String,
    /// Env: `BLOODLINK_PORT`, default `8080`.
    pub port: u16,
    /// Directory holding the three SQLite files.
    /// Env: `BLOODLINK_DATA_DIR`, default `.`.
    pub data_dir: PathBuf,
    /// Env: `BLOODLINK_UPLOAD_DIR`, default `uploads`.
    pub upload_dir: PathBuf,
    /// Env: `BLOODLINK_DONOR_DIRECTORY`, default `donor/donors.csv`.
    pub donor_directory_path: PathBuf,
    /// Env: `BLOODLINK_DONOR_TRACKING`, default `donor/donor_tracking.csv`.
    pub donor_tracking_path: PathBuf,
    /// Env: `BLOODLINK_MAX_UPLOAD_BYTES`, default 5 MiB.
    pub max_upload_bytes: usize,
    /// Env: `BLOODLINK_SECRET_KEY`.
    pub secret_key: String,
    /// Mark the session cookie `Secure`. Only enable behind HTTPS.
    /// Env: `BLOODLINK_SECURE_COOKIES` (true/false), default `false`.
    pub secure_cookies: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            data_dir: PathBuf::from("."),
            upload_dir: PathBuf::from("uploads"),
            donor_directory_path: PathBuf::from("donor/donors.csv"),
            donor_tracking_path: PathBuf::from("donor/donor_tracking.csv"),
            max_upload_bytes: 5 * 1024 * 1024,
            secret_key: INSECURE_DEFAULT_SECRET.to_string(),
            secure_cookies: false,
        }
    }
}

// The secret never reaches the logs.
impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("data_dir", &self.data_dir)
            .field("upload_dir", &self.upload_dir)
            .field("donor_directory_path", &self.donor_directory_path)
            .field("donor_tracking_path", &self.donor_tracking_path)
            .field("max_upload_bytes", &self.max_upload_bytes)
            .field("secret_key", &"<redacted>")
            .field("secure_cookies", &self.secure_cookies)
            .finish()
    }
}

impl Config {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup, falling back
    /// to defaults for anything unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(host) = lookup("BLOODLINK_HOST") {
            config.host = host;
        }
        if let Some(port) = lookup("BLOODLINK_PORT") {
            config.port = parse_value("BLOODLINK_PORT", port)?;
        }
        if let Some(dir) = lookup("BLOODLINK_DATA_DIR") {
            config.data_dir = PathBuf::from(dir);
        }
        if let Some(dir) = lookup("BLOODLINK_UPLOAD_DIR") {
            config.upload_dir = PathBuf::from(dir);
        }
        if let Some(path) = lookup("BLOODLINK_DONOR_DIRECTORY") {
            config.donor_directory_path = PathBuf::from(path);
        }
        if let Some(path) = lookup("BLOODLINK_DONOR_TRACKING") {
            config.donor_tracking_path = PathBuf::from(path);
        }
        if let Some(max) = lookup("BLOODLINK_MAX_UPLOAD_BYTES") {
            config.max_upload_bytes = parse_value("BLOODLINK_MAX_UPLOAD_BYTES", max)?;
        }
        if let Some(flag) = lookup("BLOODLINK_SECURE_COOKIES") {
            config.secure_cookies = flag != "false" && flag != "0";
        }

        match lookup("BLOODLINK_SECRET_KEY") {
            Some(secret) if secret.len() < MIN_SECRET_LEN => return Err(ConfigError::SecretTooShort),
            Some(secret) => config.secret_key = secret,
            None => warn!(
                "BLOODLINK_SECRET_KEY not set, using the insecure development key; do not deploy like this"
            ),
        }

        info!("Loaded configuration: {:?}", config);
        Ok(config)
    }

    pub fn users_db_path(&self) -> PathBuf {
        self.data_dir.join("users.sqlite")
    }

    pub fn requests_db_path(&self) -> PathBuf {
        self.data_dir.join("blood_requests.sqlite")
    }

    pub fn donations_db_path(&self) -> PathBuf {
        self.data_dir.join("blood_donations.sqlite")
    }

    /// Signing key for the session cookie, derived from `secret_key`.
    pub fn session_key(&self) -> Key {
        Key::derive_from(self.secret_key.as_bytes())
    }
}

fn parse_value<T>(key: &'static str, value: String) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: fmt::Display,
{
    value.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
        key,
        reason: e.to_string(),
        value,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn defaults_apply_when_nothing_is_set() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8080);
        assert_eq!(config.max_upload_bytes, 5 * 1024 * 1024);
        assert_eq!(config.users_db_path(), PathBuf::from("./users.sqlite"));
        assert!(config.secret_key.len() >= MIN_SECRET_LEN);
        assert!(!config.secure_cookies);
    }

    #[test]
    fn environment_overrides_defaults() {
        let config = Config::from_lookup(lookup_from(&[
            ("BLOODLINK_PORT", "9090"),
            ("BLOODLINK_DATA_DIR", "/var/lib/bloodlink"),
            ("BLOODLINK_DONOR_TRACKING", "/srv/tracking.csv"),
            ("BLOODLINK_SECURE_COOKIES", "true"),
            ("BLOODLINK_SECRET_KEY", &"k".repeat(48)),
        ]))
        .unwrap();
        assert_eq!(config.port, 9090);
        assert_eq!(
            config.donations_db_path(),
            PathBuf::from("/var/lib/bloodlink/blood_donations.sqlite")
        );
        assert_eq!(config.donor_tracking_path, PathBuf::from("/srv/tracking.csv"));
        assert!(config.secure_cookies);
        assert_eq!(config.secret_key, "k".repeat(48));
    }

    #[test]
    fn rejects_non_numeric_port() {
        let err = Config::from_lookup(lookup_from(&[("BLOODLINK_PORT", "eighty")])).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: "BLOODLINK_PORT", .. }));
    }

    #[test]
    fn rejects_short_secret() {
        let err = Config::from_lookup(lookup_from(&[("BLOODLINK_SECRET_KEY", "short")])).unwrap_err();
        assert!(matches!(err, ConfigError::SecretTooShort));
    }

    #[test]
    fn debug_output_hides_the_secret() {
        let config = Config {
            secret_key: "s".repeat(40),
            ..Config::default()
        };
        let printed = format!("{:?}", config);
        assert!(!printed.contains(&"s".repeat(40)));
        assert!(printed.contains("<redacted>"));
    }
}
