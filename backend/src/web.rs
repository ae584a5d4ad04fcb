mod basic;
mod signals;

use crate::Result;
use crate::logging::*;
use axum::Router;
use signal_common::config;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

struct AppState {}

pub async fn run() -> Result<()> {
    let log = DEFAULT.new(o!("function" => "web::run"));

    let state = Arc::new(AppState {});

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = add_routes(Router::new(), &[basic::add_route, signals::add_route])
        .with_state(state)
        .layer(cors);

    let bind_address = config::get("SERVER_BIND_ADDRESS")?;
    info!(log, "listening"; "address" => &bind_address);

    let listener = tokio::net::TcpListener::bind(&bind_address).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

fn add_routes<T>(app: Router<T>, funcs: &[fn(Router<T>) -> Router<T>]) -> Router<T> {
    let mut app = app;
    for func in funcs {
        app = func(app);
    }
    app
}
