use crate::Result;
use crate::logging::*;
use crate::sources::SourceError;
use anyhow::anyhow;
use chrono::{NaiveDate, NaiveTime};
use signal_common::config;
use signal_common::types::DataPoint;

/// 末尾から読む行数（直近30観測分）
const TAIL_ROWS: usize = 30;

/// NOAA の全球CO₂トレンドCSVを取得する
pub async fn fetch_co2_trend() -> Result<Vec<DataPoint>> {
    let log = DEFAULT.new(o!("function" => "noaa::fetch_co2_trend"));

    let base_url = config::get("NOAA_BASE_URL")?;
    let url = format!("{base_url}/webdata/ccgg/trends/co2/co2_trend_gl.csv");

    let response = reqwest::get(&url).await?;
    if !response.status().is_success() {
        return Err(anyhow!(SourceError::Status {
            provider: "noaa",
            status: response.status().as_u16(),
        }));
    }

    let text = response.text().await?;
    let points = parse_csv(&text);

    info!(log, "success"; "points" => points.len());
    Ok(points)
}

/// コメント行（# 始まり）を除き、年・月とトレンド値（4列目）を取り出す
fn parse_csv(text: &str) -> Vec<DataPoint> {
    let lines: Vec<&str> = text
        .lines()
        .filter(|line| !line.starts_with('#') && !line.trim().is_empty())
        .collect();
    let tail = &lines[lines.len().saturating_sub(TAIL_ROWS)..];

    let mut points = Vec::new();
    for line in tail {
        let parts: Vec<&str> = line.split(',').collect();
        if parts.len() < 4 {
            continue;
        }
        let (Ok(year), Ok(month), Ok(value)) = (
            parts[0].trim().parse::<i32>(),
            parts[1].trim().parse::<u32>(),
            parts[3].trim().parse::<f64>(),
        ) else {
            continue;
        };
        let Some(date) = NaiveDate::from_ymd_opt(year, month, 1) else {
            continue;
        };
        points.push(DataPoint::new(date.and_time(NaiveTime::MIN).and_utc(), value));
    }
    points
}
