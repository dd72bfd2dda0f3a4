//! # Static Pages
//!
//! The HTML pages and their assets live in `backend/static` and are embedded
//! into the binary at compile time. Dynamic results (matching donors, the
//! tracked donor, record listings) are JSON produced by the other services;
//! the pages only host the forms and render those payloads.
//!
//! Routes owned here: `GET /`, `GET /link`, `GET /map`. The form pages
//! (`/signup`, `/login`, `/contact`, `/donate`) are registered by their own
//! services through `page`, alongside their `POST` handlers. Anything else
//! is resolved by `serve_embedded`, the application's default service.

use actix_web::{web, HttpRequest, HttpResponse};
use include_dir::{include_dir, Dir};
use mime_guess::from_path;

static STATIC_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/static");

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(|| async { page("index.html") }))
        .route("/link", web::get().to(|| async { page("link.html") }))
        .route("/map", web::get().to(|| async { page("map.html") }));
}

/// Serves one embedded file, or `404 Not Found` if it does not exist.
pub(crate) fn page(file_path: &str) -> HttpResponse {
    match STATIC_DIR.get_file(file_path) {
        Some(file) => {
            let mime = from_path(file_path).first_or_octet_stream();
            HttpResponse::Ok()
                .content_type(mime.as_ref())
                .body(file.contents().to_vec())
        }
        None => HttpResponse::NotFound().body("Not Found"),
    }
}

/// Default service: maps the request path onto the embedded directory.
pub async fn serve_embedded(req: HttpRequest) -> HttpResponse {
    let path = req.path().trim_start_matches('/');
    let file_path = if path.is_empty() { "index.html" } else { path };
    page(file_path)
}
