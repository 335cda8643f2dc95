use crate::config::{Cli, SiteConfig};
use crate::logging::init_logger;
use crate::router::respond;
use astra::{Request, Server};
use clap::Parser;
use std::time::Instant;

mod company;
mod config;
mod contact;
mod domain;
mod errors;
mod format;
mod logging;
mod responses;
mod router;
mod static_files;
mod templates;

#[cfg(test)]
mod tests;

fn main() {
    // A missing .env is fine; real environment variables still apply.
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_logger(cli.verbose, cli.log_format);

    let config = match SiteConfig::try_from(&cli) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("configuration rejected: {e}");
            std::process::exit(1);
        }
    };

    if !config.static_dir.is_dir() {
        tracing::warn!(
            static_dir = %config.static_dir.display(),
            "static directory not found; only rendered pages will be served"
        );
    }

    tracing::info!(
        addr = %config.addr,
        environment = ?config.environment,
        workers = config.max_workers,
        "starting {} v{}",
        config.service_name,
        config.version
    );

    let addr = config.addr;
    let server = Server::bind(&addr).max_workers(config.max_workers);

    let result = server.serve(move |req: Request, _info| {
        let started = Instant::now();
        let method = req.method().clone();
        let path = req.uri().path().to_string();

        let resp = respond(req, &config);

        tracing::info!(
            %method,
            %path,
            status = resp.status().as_u16(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "request"
        );
        resp
    });

    if let Err(e) = result {
        tracing::error!("server ended with error: {e}");
        std::process::exit(1);
    }
}
