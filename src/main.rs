use crate::config::AppConfig;
use crate::router::handle;
use crate::state::AppState;
use astra::Server;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod config;
mod errors;
mod i18n;
mod responses;
mod router;
mod state;
mod templates;


fn main() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("ride_site=info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("configuration error: {e}");
            std::process::exit(1);
        }
    };

    let addr = config.addr;
    let workers = config.max_workers;

    let state = match AppState::new(config) {
        Ok(state) => state,
        Err(e) => {
            error!("failed to load message catalogs: {e}");
            std::process::exit(1);
        }
    };

    info!(%addr, workers, "starting server at http://{addr}");

    let server = Server::bind(&addr).max_workers(workers);

    let result = server.serve(move |req: astra::Request, _info| {
        let method = req.method().clone();
        let path = req.uri().path().to_owned();

        let resp = match handle(req, &state) {
            Ok(resp) => resp,
            Err(err) => templates::html_error_response(err),
        };

        info!(%method, %path, status = resp.status().as_u16(), "request");
        resp
    });

    if let Err(e) = result {
        error!("server ended with error: {e}");
    }

    info!("server shut down cleanly");
}
