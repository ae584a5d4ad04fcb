use super::AppState;
use axum::Router;
use axum::extract::State;
use axum::routing::get;
use std::sync::Arc;

pub fn add_route(app: Router<Arc<AppState>>) -> Router<Arc<AppState>> {
    app.route("/healthcheck", get(|| async { "OK" }))
        .route("/version", get(version))
}

async fn version(State(_): State<Arc<AppState>>) -> String {
    format!("signal-backend {}\n", env!("CARGO_PKG_VERSION"))
}
