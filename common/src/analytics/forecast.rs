
use super::types::{Direction, ForecastResult, HorizonForecast, TrendStrength};
use crate::types::DataPoint;

/// 回帰に必要な最小サンプル数
const MIN_SAMPLES: usize = 5;

/// ホライズンごとの先読みステップ数（系列と同じ周期の単位）
const SHORT_TERM_PERIODS: f64 = 3.0;
const MEDIUM_TERM_PERIODS: f64 = 12.0;
const LONG_TERM_PERIODS: f64 = 24.0;

/// ボラティリティ警告の閾値
const VOLATILITY_ALERT_THRESHOLD: f64 = 0.3;

/// 方向分類の変化率閾値（%）
const DIRECTION_THRESHOLD_PCT: f64 = 2.0;

/// 最小二乗法による直線あてはめの結果
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearFit {
    pub slope: f64,
    pub intercept: f64,
    pub r_squared: f64,
}

/// 添字を説明変数とした単回帰（OLS）
///
/// 分母がゼロになる退化系列では slope と r² をゼロに倒す。
pub fn linear_regression(series: &[DataPoint]) -> LinearFit {
    let n = series.len() as f64;
    let x_mean = (n - 1.0) / 2.0;
    let y_mean = series.iter().map(|p| p.value).sum::<f64>() / n;

    let mut ss_xy = 0.0;
    let mut ss_xx = 0.0;
    let mut ss_yy = 0.0;
    for (i, point) in series.iter().enumerate() {
        let x_diff = i as f64 - x_mean;
        let y_diff = point.value - y_mean;
        ss_xy += x_diff * y_diff;
        ss_xx += x_diff * x_diff;
        ss_yy += y_diff * y_diff;
    }

    let slope = if ss_xx != 0.0 { ss_xy / ss_xx } else { 0.0 };
    let intercept = y_mean - slope * x_mean;
    let r_squared = if ss_xx != 0.0 && ss_yy != 0.0 {
        (ss_xy * ss_xy) / (ss_xx * ss_yy)
    } else {
        0.0
    };

    LinearFit {
        slope,
        intercept,
        r_squared,
    }
}

/// 時系列から3ホライズンの線形予測を計算する
///
/// 5点未満の系列は回帰せず、低信頼の「変化なし」予測を返す。
/// `current_value` に予測値を入れて再度呼んでも構わない（予測値と実測値を
/// 区別しない）。
pub fn compute_forecast(series: &[DataPoint], current_value: f64) -> ForecastResult {
    if series.len() < MIN_SAMPLES {
        return low_confidence_default(current_value);
    }

    let fit = linear_regression(series);
    let n = series.len() as f64;

    // 母集団ボラティリティ。平均ゼロの退化系列はゼロとして扱う
    let values: Vec<f64> = series.iter().map(|p| p.value).collect();
    let mean = values.iter().sum::<f64>() / n;
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
    let volatility = if mean == 0.0 {
        0.0
    } else {
        variance.sqrt() / mean.abs()
    };

    let short_value = current_value + fit.slope * SHORT_TERM_PERIODS;
    let medium_value = current_value + fit.slope * MEDIUM_TERM_PERIODS;
    let long_value = current_value + fit.slope * LONG_TERM_PERIODS;

    // 決定係数から基礎信頼度を求め、ボラティリティでペナルティを課す。
    // ホライズンが延びるほど信頼度は単調に下がり、下限で止まる
    let base_confidence = (fit.r_squared + 0.1).min(0.95);
    let volatility_penalty = (volatility * 0.5).min(0.4);

    let short_confidence = (base_confidence - volatility_penalty).max(0.2);
    let medium_confidence = (short_confidence - 0.15).max(0.15);
    let long_confidence = (medium_confidence - 0.2).max(0.1);

    let trend_strength = if fit.r_squared > 0.7 {
        TrendStrength::Strong
    } else if fit.r_squared > 0.4 {
        TrendStrength::Moderate
    } else {
        TrendStrength::Weak
    };

    ForecastResult {
        short_term: HorizonForecast {
            value: short_value,
            confidence: short_confidence,
            direction: classify_direction(current_value, short_value),
        },
        medium_term: HorizonForecast {
            value: medium_value,
            confidence: medium_confidence,
            direction: classify_direction(current_value, medium_value),
        },
        long_term: HorizonForecast {
            value: long_value,
            confidence: long_confidence,
            direction: classify_direction(current_value, long_value),
        },
        volatility_alert: volatility > VOLATILITY_ALERT_THRESHOLD,
        trend_strength,
    }
}

/// 射影値の変化方向（±2% 閾値）
///
/// 現在値ゼロは変化率が定義できないので射影値の符号で分類する
fn classify_direction(current: f64, projected: f64) -> Direction {
    if current == 0.0 {
        return if projected > 0.0 {
            Direction::Up
        } else if projected < 0.0 {
            Direction::Down
        } else {
            Direction::Stable
        };
    }

    let pct_change = (projected - current) / current.abs() * 100.0;

    if pct_change > DIRECTION_THRESHOLD_PCT {
        Direction::Up
    } else if pct_change < -DIRECTION_THRESHOLD_PCT {
        Direction::Down
    } else {
        Direction::Stable
    }
}

/// サンプル不足時の低信頼フォールバック
fn low_confidence_default(current_value: f64) -> ForecastResult {
    ForecastResult {
        short_term: HorizonForecast {
            value: current_value,
            confidence: 0.3,
            direction: Direction::Stable,
        },
        medium_term: HorizonForecast {
            value: current_value,
            confidence: 0.2,
            direction: Direction::Stable,
        },
        long_term: HorizonForecast {
            value: current_value,
            confidence: 0.1,
            direction: Direction::Stable,
        },
        volatility_alert: false,
        trend_strength: TrendStrength::Weak,
    }
}
