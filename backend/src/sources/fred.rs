use crate::Result;
use crate::logging::*;
use crate::sources::SourceError;
use anyhow::anyhow;
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::Deserialize;
use signal_common::config;
use signal_common::types::DataPoint;

/// FRED observations API のレスポンス
#[derive(Debug, Deserialize)]
struct FredResponse {
    observations: Vec<FredObservation>,
}

#[derive(Debug, Deserialize)]
struct FredObservation {
    date: String,
    value: String,
}

/// FRED の系列を新しい順に取得し、時系列順に並べ替えて返す
///
/// APIキーが未設定なら空の系列を返す（呼び出し側でモックに倒すため、
/// エラーにはしない）。
pub async fn fetch_series(series_id: &str, limit: usize) -> Result<Vec<DataPoint>> {
    let log = DEFAULT.new(o!(
        "function" => "fred::fetch_series",
        "series_id" => series_id.to_string(),
    ));

    let Ok(api_key) = config::get("FRED_API_KEY") else {
        warn!(log, "API key not configured, returning empty series");
        return Ok(Vec::new());
    };

    let base_url = config::get("FRED_BASE_URL")?;
    let url = format!(
        "{base_url}/series/observations?series_id={series_id}&api_key={api_key}&file_type=json&sort_order=desc&limit={limit}"
    );

    let response = reqwest::get(&url).await?;
    if !response.status().is_success() {
        return Err(anyhow!(SourceError::Status {
            provider: "fred",
            status: response.status().as_u16(),
        }));
    }

    let body: FredResponse = response.json().await?;

    let mut points = Vec::with_capacity(body.observations.len());
    for obs in &body.observations {
        // 欠測値は "." で表現される
        if obs.value == "." {
            continue;
        }
        let value: f64 = obs.value.parse().map_err(|_| {
            anyhow!(SourceError::Malformed {
                provider: "fred",
                reason: format!("not a number: {}", obs.value),
            })
        })?;
        points.push(DataPoint::new(parse_observation_date(&obs.date)?, value));
    }
    points.reverse();

    info!(log, "success"; "points" => points.len());
    Ok(points)
}

fn parse_observation_date(raw: &str) -> Result<DateTime<Utc>> {
    let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|e| {
        anyhow!(SourceError::Malformed {
            provider: "fred",
            reason: format!("bad date {raw}: {e}"),
        })
    })?;
    Ok(date.and_time(NaiveTime::MIN).and_utc())
}
