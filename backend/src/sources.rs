pub mod fred;
pub mod giss;
pub mod mock;
pub mod noaa;

use crate::Result;
use crate::catalog::countries;
use crate::logging::*;
use signal_common::config;
use signal_common::types::DataPoint;
use thiserror::Error;

/// 外部データソースのエラー
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("unexpected status from {provider}: {status}")]
    Status { provider: &'static str, status: u16 },

    #[error("malformed payload from {provider}: {reason}")]
    Malformed { provider: &'static str, reason: String },
}

/// 1回の取得で要求する観測数
fn observation_limit() -> usize {
    config::get("SOURCE_OBSERVATION_LIMIT")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(30)
}

/// シグナルIDに対応するライブ系列を取得する
///
/// ライブAPIの無いシグナルと、APIキー未設定で空になった系列は Ok(None)
pub async fn fetch_signal_data(signal_id: &str) -> Result<Option<Vec<DataPoint>>> {
    let log = DEFAULT.new(o!(
        "function" => "sources::fetch_signal_data",
        "signal" => signal_id.to_string(),
    ));
    info!(log, "start");

    let limit = observation_limit();
    let data = match signal_id {
        "gdp-growth" => fred::fetch_series("GDP", limit).await?,
        "inflation-cpi" => fred::fetch_series("CPIAUCSL", limit).await?,
        "unemployment" => fred::fetch_series("UNRATE", limit).await?,
        "consumer-sentiment" => fred::fetch_series("UMCSENT", limit).await?,
        "temp-anomaly" => giss::fetch_anomalies().await?,
        "co2-level" => noaa::fetch_co2_trend().await?,
        _ => {
            info!(log, "no live source");
            return Ok(None);
        }
    };

    info!(log, "success"; "points" => data.len());
    Ok(if data.is_empty() { None } else { Some(data) })
}

/// 国別の系列を取得する
///
/// FRED 系列のマッピングが無い国別対応外のシグナルは Ok(None)。
/// ライブ取得が空振りまたは失敗した場合は決定的なモック系列で補う
pub async fn fetch_country_series(
    signal_id: &str,
    country_code: &str,
) -> Result<Option<Vec<DataPoint>>> {
    let log = DEFAULT.new(o!(
        "function" => "sources::fetch_country_series",
        "signal" => signal_id.to_string(),
        "country" => country_code.to_string(),
    ));
    info!(log, "start");

    let Some(series_id) = countries::fred_series_for_country(signal_id, country_code) else {
        if countries::COUNTRY_ENABLED_SIGNALS.contains(&signal_id) {
            info!(log, "no series mapping, using mock series");
            return Ok(Some(mock::country_series(signal_id, country_code)));
        }
        warn!(log, "signal does not support country selection");
        return Ok(None);
    };

    let data = match fred::fetch_series(series_id, observation_limit()).await {
        Ok(data) => data,
        Err(e) => {
            warn!(log, "live fetch failed, falling back to mock"; "error" => %e);
            Vec::new()
        }
    };

    if !data.is_empty() {
        info!(log, "success"; "points" => data.len());
        return Ok(Some(data));
    }

    info!(log, "live series empty, using mock series");
    Ok(Some(mock::country_series(signal_id, country_code)))
}
