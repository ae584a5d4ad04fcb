use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ==================== 記述統計 ====================

/// 極値とその観測日時
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Extreme {
    pub value: f64,
    pub date: DateTime<Utc>,
}

/// 末尾ウィンドウの移動平均
///
/// 系列がウィンドウ幅に満たない場合は None（部分ウィンドウでは計算しない）
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MovingAverages {
    pub ma7: Option<f64>,
    pub ma30: Option<f64>,
    pub ma90: Option<f64>,
}

/// 短期モメンタムの分類
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Accelerating,
    Decelerating,
    Stable,
}

/// 変動係数によるボラティリティ分類
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VolatilityIndex {
    Low,
    Moderate,
    High,
    Extreme,
}

/// 時系列の記述統計
///
/// 呼び出しごとに新しく計算されるスナップショット。共有状態は持たない。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesStatistics {
    pub min: Extreme,
    pub max: Extreme,
    pub mean: f64,
    pub median: f64,
    pub std_dev: f64,
    pub variance: f64,
    /// 現在値が履歴の中でどの位置にあるか（0-100）
    pub percentile_rank: f64,
    pub moving_averages: MovingAverages,
    /// 前年同期比の変化率（%）。12ポイント未満の系列では None
    pub yoy_change: Option<f64>,
    pub trend: Trend,
    pub volatility_index: VolatilityIndex,
}

// ==================== 予測 ====================

/// 予測値の変化方向
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Stable,
}

/// トレンドの強さ（決定係数ベース）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendStrength {
    Weak,
    Moderate,
    Strong,
}

/// 単一ホライズンの予測値
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HorizonForecast {
    pub value: f64,
    /// 信頼度（0-1）
    pub confidence: f64,
    pub direction: Direction,
}

/// 短期・中期・長期の3ホライズン予測
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ForecastResult {
    pub short_term: HorizonForecast,
    pub medium_term: HorizonForecast,
    pub long_term: HorizonForecast,
    pub volatility_alert: bool,
    pub trend_strength: TrendStrength,
}
