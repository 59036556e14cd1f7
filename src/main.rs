use crate::app::AppState;
use crate::config::Config;
use crate::db::{init_db, Database};
use crate::jma::JmaClient;
use crate::router::handle;
use crate::weather::WeatherService;
use astra::Server;
use env_logger::Env;
use std::net::SocketAddr;
use std::sync::Arc;

mod app;
mod config;
mod db;
mod domain;
mod errors;
mod jma;
mod responses;
mod router;
mod templates;
mod weather;

#[cfg(test)]
mod tests;

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let cfg = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            log::error!("{e}");
            std::process::exit(1);
        }
    };
    log::info!("config: {cfg:?}");

    // 1️⃣ Database handle (the table is read-only from here on)
    let db = Database::new(cfg.db_path.clone());
    if cfg.init_schema {
        if let Err(e) = init_db(&db) {
            log::error!("database initialization failed: {e}");
            std::process::exit(1);
        }
    }

    // 2️⃣ JMA client + weather service, area list preloaded in the background
    let client = match JmaClient::new(&cfg) {
        Ok(c) => c,
        Err(e) => {
            log::error!("http client setup failed: {e}");
            std::process::exit(1);
        }
    };
    let weather = WeatherService::new(Box::new(client), cfg.forecast_ttl_secs);
    let state = Arc::new(AppState::new(&cfg, db, weather));
    state.weather.spawn_area_load();

    // 3️⃣ Start the server
    let addr: SocketAddr = match cfg.bind_addr.parse() {
        Ok(a) => a,
        Err(e) => {
            log::error!("invalid BIND_ADDR {:?}: {e}", cfg.bind_addr);
            std::process::exit(1);
        }
    };
    log::info!("starting server at http://{addr}");

    let server = Server::bind(&addr).max_workers(cfg.max_workers);

    let result = server.serve(move |req, _info| match handle(req, &state) {
        Ok(resp) => resp,
        Err(err) => responses::html_error_response(err),
    });

    if let Err(e) = result {
        log::error!("server ended with error: {e}");
    }

    log::info!("server shut down cleanly.");
}
