use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ==================== 時系列データ ====================

/// シグナルの観測点
///
/// 系列内では `date` の昇順に並んでいることを呼び出し側が保証する。
/// 各エンジンは配列の添字を時間順の代理として扱う。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub date: DateTime<Utc>,
    pub value: f64,
}

impl DataPoint {
    pub fn new(date: DateTime<Utc>, value: f64) -> Self {
        Self { date, value }
    }
}

// ==================== シグナル分類 ====================

/// シグナルのカテゴリ
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SignalCategory {
    Economic,
    Climate,
    Tech,
    Social,
}
