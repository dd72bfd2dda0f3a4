//! Fixtures for the in-process HTTP tests.

use crate::config::Config;
use crate::services;
use crate::services::auth::session_middleware;
use crate::services::pages::serve_embedded;
use crate::state::AppState;
use actix_web::dev::ServiceResponse;
use actix_web::{test, web, App};
use std::fs;
use tempfile::TempDir;

/// An application state rooted in a temporary directory.
pub(crate) struct TestEnv {
    _dir: TempDir,
    pub state: AppState,
}

impl TestEnv {
    pub fn new() -> Self {
        Self::with_max_upload(1024 * 1024)
    }

    pub fn with_max_upload(max_upload_bytes: usize) -> Self {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        let config = Config {
            data_dir: root.join("data"),
            upload_dir: root.join("uploads"),
            donor_directory_path: root.join("donor").join("donors.csv"),
            donor_tracking_path: root.join("donor").join("donor_tracking.csv"),
            max_upload_bytes,
            secret_key: "t".repeat(64),
            ..Config::default()
        };
        fs::create_dir_all(&config.data_dir).unwrap();

        Self {
            _dir: dir,
            state: AppState::new(config),
        }
    }

    pub fn write_directory(&self, contents: &str) {
        let path = &self.state.config.donor_directory_path;
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, contents).unwrap();
    }

    pub fn write_tracking(&self, contents: &str) {
        let path = &self.state.config.donor_tracking_path;
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, contents).unwrap();
    }

    /// Sends one request through a fully configured application.
    pub async fn call(&self, req: test::TestRequest) -> ServiceResponse {
        let app = test::init_service(
            App::new()
                .wrap(session_middleware(&self.state.config))
                .app_data(web::Data::new(self.state.clone()))
                .configure(services::configure_routes)
                .default_service(web::route().to(serve_embedded)),
        )
        .await;
        test::call_service(&app, req.to_request())
            .await
            .map_into_boxed_body()
    }
}

/// Encodes text fields and an optional `id_proof` file as multipart/form-data.
/// Returns the content type (with boundary) and the body.
pub(crate) fn multipart_body(
    fields: &[(&str, &str)],
    file: Option<(&str, &[u8])>,
) -> (String, Vec<u8>) {
    const BOUNDARY: &str = "bloodlink-test-boundary";
    let mut body = Vec::new();

    for (name, value) in fields {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
            )
            .as_bytes(),
        );
    }
    if let Some((filename, bytes)) = file {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"id_proof\"; filename=\"{filename}\"\r\nContent-Type: application/octet-stream\r\n\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(bytes);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());

    (format!("multipart/form-data; boundary={BOUNDARY}"), body)
}
