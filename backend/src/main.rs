//! # bloodlink
//!
//! A small web application where users register, request blood, register
//! donations and browse the stored records.
//!
//! - A blood request is matched against an externally maintained donor
//!   directory by ABO/Rh compatibility.
//! - A donation is followed by a one-shot lookup of a tracked donor's
//!   location in an external table.
//!
//! Configuration comes from `BLOODLINK_*` environment variables (see
//! `config.rs`); logging is controlled with `RUST_LOG` and defaults to `info`.

mod config;
mod error;
mod matching;
mod services;
mod state;
mod storage;
#[cfg(test)]
mod test_support;

use crate::config::Config;
use crate::services::auth::session_middleware;
use crate::services::pages::serve_embedded;
use crate::state::AppState;
use actix_web::middleware::Logger;
use actix_web::{web, App, HttpServer};
use env_logger::Env;
use log::info;
use std::fs;
use std::io;

#[actix_web::main]
async fn main() -> io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let config = Config::from_env().map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
    fs::create_dir_all(&config.data_dir)?;

    let host = config.host.clone();
    let port = config.port;
    let state = AppState::new(config);

    info!("Server running at http://{}:{}", host, port);

    HttpServer::new(move || {
        App::new()
            .wrap(session_middleware(&state.config))
            .wrap(Logger::default())
            .app_data(web::Data::new(state.clone()))
            .configure(services::configure_routes)
            .default_service(web::route().to(serve_embedded))
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}
