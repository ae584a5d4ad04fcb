#[cfg(test)]
mod tests;

use chrono::Utc;

use super::types::{Extreme, MovingAverages, SeriesStatistics, Trend, VolatilityIndex};
use crate::types::DataPoint;

/// トレンド分類の変化率閾値（%）
const TREND_THRESHOLD_PCT: f64 = 5.0;

/// 時系列全体の記述統計を計算する
///
/// `current_value` は履歴の最終値とは限らない。呼び出し側が表示中の値を渡し、
/// パーセンタイル順位はその値を履歴と比較して求める。
/// 空の系列ではエラーにせず既定値を返す（履歴の無いシグナルのフォールバック）。
pub fn compute_statistics(series: &[DataPoint], current_value: f64) -> SeriesStatistics {
    if series.is_empty() {
        return default_statistics();
    }

    let values: Vec<f64> = series.iter().map(|p| p.value).collect();
    let n = values.len();

    // 最小・最大。厳密な比較なので同値は最初の出現が勝つ
    let mut min_idx = 0;
    let mut max_idx = 0;
    for i in 1..n {
        if values[i] < values[min_idx] {
            min_idx = i;
        }
        if values[i] > values[max_idx] {
            max_idx = i;
        }
    }

    let mean = average(&values);

    // 中央値はコピーをソートして求める（入力は変更しない）
    let mut sorted = values.clone();
    sorted.sort_by(|a, b| a.total_cmp(b));
    let median = if n % 2 == 0 {
        (sorted[n / 2 - 1] + sorted[n / 2]) / 2.0
    } else {
        sorted[n / 2]
    };

    // 母分散（n で割る）
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n as f64;
    let std_dev = variance.sqrt();

    // current_value 未満の値の割合。同値は数えない
    let below = values.iter().filter(|&&v| v < current_value).count();
    let percentile_rank = (below as f64 / n as f64) * 100.0;

    let moving_averages = MovingAverages {
        ma7: trailing_average(&values, 7),
        ma30: trailing_average(&values, 30),
        ma90: trailing_average(&values, 90),
    };

    SeriesStatistics {
        min: Extreme {
            value: values[min_idx],
            date: series[min_idx].date,
        },
        max: Extreme {
            value: values[max_idx],
            date: series[max_idx].date,
        },
        mean,
        median,
        std_dev,
        variance,
        percentile_rank,
        moving_averages,
        yoy_change: year_over_year(&values),
        trend: classify_trend(&values),
        volatility_index: classify_volatility(std_dev, mean),
    }
}

fn average(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// 末尾 window 個の単純平均。系列が足りなければ None
fn trailing_average(values: &[f64], window: usize) -> Option<f64> {
    if values.len() >= window {
        Some(average(&values[values.len() - window..]))
    } else {
        None
    }
}

/// 前年同期比（12ポイント前との変化率）
///
/// 12ポイント前の値がゼロの場合もゼロ除算を避けて None
fn year_over_year(values: &[f64]) -> Option<f64> {
    let n = values.len();
    if n < 12 {
        return None;
    }
    let year_ago = values[n - 12];
    if year_ago == 0.0 {
        return None;
    }
    Some((values[n - 1] - year_ago) / year_ago.abs() * 100.0)
}

/// 直近3点の平均をその直前3点の平均と比較して短期モメンタムを分類する
fn classify_trend(values: &[f64]) -> Trend {
    let n = values.len();
    if n < 6 {
        return Trend::Stable;
    }

    let recent_avg = average(&values[n - 3..]);
    let older_avg = average(&values[n - 6..n - 3]);

    let pct_change = (recent_avg - older_avg) / older_avg.abs() * 100.0;

    if pct_change > TREND_THRESHOLD_PCT {
        Trend::Accelerating
    } else if pct_change < -TREND_THRESHOLD_PCT {
        Trend::Decelerating
    } else {
        Trend::Stable
    }
}

/// 変動係数（CV）によるボラティリティ分類
fn classify_volatility(std_dev: f64, mean: f64) -> VolatilityIndex {
    // 平均ゼロの系列は CV が定義できないので中間の分類に倒す
    if mean == 0.0 {
        return VolatilityIndex::Moderate;
    }

    let cv = std_dev / mean.abs() * 100.0;

    if cv < 10.0 {
        VolatilityIndex::Low
    } else if cv < 25.0 {
        VolatilityIndex::Moderate
    } else if cv < 50.0 {
        VolatilityIndex::High
    } else {
        VolatilityIndex::Extreme
    }
}

/// 履歴の無いシグナルに返す既定値
fn default_statistics() -> SeriesStatistics {
    let now = Utc::now();
    SeriesStatistics {
        min: Extreme {
            value: 0.0,
            date: now,
        },
        max: Extreme {
            value: 0.0,
            date: now,
        },
        mean: 0.0,
        median: 0.0,
        std_dev: 0.0,
        variance: 0.0,
        percentile_rank: 50.0,
        moving_averages: MovingAverages {
            ma7: None,
            ma30: None,
            ma90: None,
        },
        yoy_change: None,
        trend: Trend::Stable,
        volatility_index: VolatilityIndex::Moderate,
    }
}

// ==================== 表示用フォーマット ====================

/// 統計値を指定桁数で文字列化する
pub fn format_stat_value(value: f64, decimals: usize) -> String {
    format!("{value:.decimals$}")
}

/// パーセンタイル順位を序数表記にする（1st, 2nd, 3rd, 4th, ...）
pub fn format_percentile(rank: f64) -> String {
    let p = rank.round() as i64;
    let suffix = match p {
        1 => "st",
        2 => "nd",
        3 => "rd",
        _ => "th",
    };
    format!("{p}{suffix}")
}
