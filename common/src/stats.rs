use serde::{Deserialize, Serialize};

use crate::analytics::types::{ForecastResult, SeriesStatistics};
use crate::types::DataPoint;

/// 系列分析リクエスト
///
/// `points` は時刻昇順で渡す。`current_value` は表示中の値で、
/// 系列の最終値と一致していなくてもよい。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesAnalysisRequest {
    pub points: Vec<DataPoint>,
    pub current_value: f64,
}

/// 系列分析レスポンス
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesAnalysisResponse {
    pub statistics: SeriesStatistics,
    pub forecast: ForecastResult,
}
