use super::AppState;
use crate::catalog::{self, countries};
use crate::logging::*;
use crate::sources;
use axum::Json;
use axum::{
    Router,
    extract::{Path, State},
    routing::{get, post},
};
use signal_common::ApiResponse;
use signal_common::analytics::{forecast, statistics};
use signal_common::stats::{SeriesAnalysisRequest, SeriesAnalysisResponse};
use signal_common::types::DataPoint;
use std::sync::Arc;

fn path(sub: &str) -> String {
    format!("/signals/{sub}")
}

pub fn add_route(app: Router<Arc<AppState>>) -> Router<Arc<AppState>> {
    app.route(&path("catalog"), get(get_catalog))
        .route(&path("categories"), get(get_categories))
        .route(&path("analyze"), post(analyze_series))
        .route(&path("{id}/data"), get(get_signal_data))
        .route(&path("{id}/data/{country}"), get(get_country_data))
        .route(&path("{id}/source"), get(get_source_info))
        .route(&path("{id}/countries"), get(get_countries))
}

async fn get_catalog(State(_): State<Arc<AppState>>) -> Json<Vec<catalog::CatalogEntry>> {
    Json(catalog::catalog_entries())
}

async fn get_categories(State(_): State<Arc<AppState>>) -> Json<Vec<catalog::CategoryMeta>> {
    Json(catalog::all_categories())
}

/// 系列と現在値から統計と予測をまとめて計算する
async fn analyze_series(
    State(_): State<Arc<AppState>>,
    Json(request): Json<SeriesAnalysisRequest>,
) -> Json<SeriesAnalysisResponse> {
    let log = DEFAULT.new(o!(
        "function" => "web::analyze_series",
        "points" => request.points.len(),
    ));
    info!(log, "start");

    let statistics = statistics::compute_statistics(&request.points, request.current_value);
    let forecast = forecast::compute_forecast(&request.points, request.current_value);

    info!(log, "success";
        "trend" => ?statistics.trend,
        "trend_strength" => ?forecast.trend_strength,
    );
    Json(SeriesAnalysisResponse {
        statistics,
        forecast,
    })
}

async fn get_signal_data(
    State(_): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Json<ApiResponse<Vec<DataPoint>, String>> {
    let log = DEFAULT.new(o!("function" => "web::get_signal_data", "signal" => id.clone()));

    match sources::fetch_signal_data(&id).await {
        Ok(Some(points)) => Json(ApiResponse::Success(points)),
        Ok(None) => Json(ApiResponse::Error(format!(
            "no live data source for signal: {id}"
        ))),
        Err(e) => {
            error!(log, "fetch failed"; "error" => %e);
            Json(ApiResponse::Error(format!("failed to fetch {id}: {e}")))
        }
    }
}

async fn get_country_data(
    State(_): State<Arc<AppState>>,
    Path((id, country)): Path<(String, String)>,
) -> Json<ApiResponse<Vec<DataPoint>, String>> {
    let log = DEFAULT.new(o!(
        "function" => "web::get_country_data",
        "signal" => id.clone(),
        "country" => country.clone(),
    ));

    match sources::fetch_country_series(&id, &country).await {
        Ok(Some(points)) => Json(ApiResponse::Success(points)),
        Ok(None) => Json(ApiResponse::Error(format!(
            "signal does not support country selection: {id}"
        ))),
        Err(e) => {
            error!(log, "fetch failed"; "error" => %e);
            Json(ApiResponse::Error(format!("failed to fetch {id}: {e}")))
        }
    }
}

async fn get_source_info(
    State(_): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Json<catalog::SourceInfo> {
    Json(catalog::source_info(&id))
}

async fn get_countries(
    State(_): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Json<Vec<countries::Country>> {
    Json(countries::countries_for_signal(&id).to_vec())
}
