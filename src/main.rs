use crate::config::Config;
use crate::db::Database;
use crate::errors::ServerError;
use crate::responses::error_to_response;
use crate::router::handle;
use astra::{Request, Server};
use log::{error, info, warn};

mod config;
mod db;
mod domain;
mod errors;
mod responses;
mod router;
mod templates;

#[cfg(test)]
mod tests;

fn main() {
    // A missing .env file is fine; real deployments set the environment directly.
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cfg = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("Configuration error: {e}");
            std::process::exit(1);
        }
    };

    // One client for the whole process; the driver pools connections per worker.
    let db = match Database::connect(&cfg) {
        Ok(db) => db,
        Err(e) => {
            error!("Could not set up MongoDB client: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = db.ping() {
        warn!("MongoDB is not reachable yet, requests will fail until it is: {e}");
    }

    info!(
        "Serving database `{}` at http://{} with {} workers",
        db.name(),
        cfg.addr,
        cfg.workers
    );

    let server = Server::bind(&cfg.addr).max_workers(cfg.workers);

    let result = server.serve(move |req: Request, _info| {
        let method = req.method().as_str().to_string();
        let path = req.uri().path().to_string();

        let resp = match handle(req, &db) {
            Ok(resp) => resp,
            Err(err) => {
                log_failure(&method, &path, &err);
                error_to_response(err)
            }
        };

        info!("{method} {path} {}", resp.status().as_u16());
        resp
    });

    if let Err(e) = result {
        error!("Server ended with error: {e}");
        std::process::exit(1);
    }

    info!("Server shut down cleanly.");
}

fn log_failure(method: &str, path: &str, err: &ServerError) {
    if err.status() >= 500 {
        error!("{method} {path} failed: {err}");
    } else {
        warn!("{method} {path}: {err}");
    }
}
