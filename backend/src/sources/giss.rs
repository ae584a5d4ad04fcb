use crate::Result;
use crate::logging::*;
use crate::sources::SourceError;
use anyhow::anyhow;
use chrono::{NaiveDate, NaiveTime};
use signal_common::config;
use signal_common::types::DataPoint;

/// 末尾から読む行数（直近30年分）
const TAIL_ROWS: usize = 30;

/// NASA GISS の全球気温偏差CSV（GLB.Ts+dSST）を取得する
pub async fn fetch_anomalies() -> Result<Vec<DataPoint>> {
    let log = DEFAULT.new(o!("function" => "giss::fetch_anomalies"));

    let base_url = config::get("GISS_BASE_URL")?;
    let url = format!("{base_url}/gistemp/tabledata_v4/GLB.Ts+dSST.csv");

    let response = reqwest::get(&url).await?;
    if !response.status().is_success() {
        return Err(anyhow!(SourceError::Status {
            provider: "giss",
            status: response.status().as_u16(),
        }));
    }

    let text = response.text().await?;
    let points = parse_csv(&text);

    info!(log, "success"; "points" => points.len());
    Ok(points)
}

/// ヘッダ2行を読み飛ばし、年（1列目）と年間平均（14列目）を取り出す
///
/// 解析できない行は黙って読み飛ばす（年末の未確定行など）
fn parse_csv(text: &str) -> Vec<DataPoint> {
    let lines: Vec<&str> = text.lines().skip(2).collect();
    let tail = &lines[lines.len().saturating_sub(TAIL_ROWS)..];

    let mut points = Vec::new();
    for line in tail {
        let parts: Vec<&str> = line.split(',').collect();
        if parts.len() < 14 || parts[0].is_empty() {
            continue;
        }
        let (Ok(year), Ok(value)) = (parts[0].parse::<i32>(), parts[13].parse::<f64>()) else {
            continue;
        };
        let Some(date) = NaiveDate::from_ymd_opt(year, 1, 1) else {
            continue;
        };
        points.push(DataPoint::new(date.and_time(NaiveTime::MIN).and_utc(), value));
    }
    points
}
