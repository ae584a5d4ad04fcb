#![deny(warnings)]

mod catalog;
mod logging;
mod sources;
mod web;

use crate::logging::*;

type Result<T> = anyhow::Result<T>;

#[tokio::main]
async fn main() {
    let log = DEFAULT.new(o!("function" => "main"));
    info!(log, "Starting up");
    debug!(log, "log level check");
    trace!(log, "log level check");

    info!(log, "catalog loaded";
        "signals" => catalog::all_signals().len(),
        "countries" => catalog::countries::COUNTRIES.len(),
    );

    match web::run().await {
        Ok(_) => info!(log, "shutting down"),
        Err(err) => error!(log, "shutting down: {:?}", err),
    }
}
