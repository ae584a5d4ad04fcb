pub mod countries;

use serde::Serialize;
use signal_common::types::SignalCategory;

// ==================== シグナル定義 ====================

/// 観測頻度
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    Daily,
    Weekly,
    Monthly,
    Quarterly,
    Annual,
}

impl Frequency {
    pub fn label(&self) -> &'static str {
        match self {
            Frequency::Daily => "Daily",
            Frequency::Weekly => "Weekly",
            Frequency::Monthly => "Monthly",
            Frequency::Quarterly => "Quarterly",
            Frequency::Annual => "Annual",
        }
    }
}

/// カタログ上のシグナル定義
#[derive(Debug, Clone, Serialize)]
pub struct SignalMeta {
    pub id: &'static str,
    pub title: &'static str,
    pub category: SignalCategory,
    pub unit: &'static str,
    pub source_name: &'static str,
    pub frequency: Frequency,
    /// ライブAPIから取得できるか（無ければモック系列のみ）
    pub has_live_api: bool,
}

static SIGNALS: &[SignalMeta] = &[
    SignalMeta {
        id: "gdp-growth",
        title: "GDP Growth Rate",
        category: SignalCategory::Economic,
        unit: "%",
        source_name: "FRED (Federal Reserve)",
        frequency: Frequency::Quarterly,
        has_live_api: true,
    },
    SignalMeta {
        id: "inflation-cpi",
        title: "Inflation Rate",
        category: SignalCategory::Economic,
        unit: "%",
        source_name: "FRED (Federal Reserve)",
        frequency: Frequency::Monthly,
        has_live_api: true,
    },
    SignalMeta {
        id: "unemployment",
        title: "Unemployment Rate",
        category: SignalCategory::Economic,
        unit: "%",
        source_name: "FRED (Federal Reserve)",
        frequency: Frequency::Monthly,
        has_live_api: true,
    },
    SignalMeta {
        id: "consumer-sentiment",
        title: "Consumer Sentiment",
        category: SignalCategory::Economic,
        unit: "index",
        source_name: "University of Michigan",
        frequency: Frequency::Monthly,
        has_live_api: true,
    },
    SignalMeta {
        id: "temp-anomaly",
        title: "Global Temperature Anomaly",
        category: SignalCategory::Climate,
        unit: "°C",
        source_name: "NASA GISS",
        frequency: Frequency::Monthly,
        has_live_api: true,
    },
    SignalMeta {
        id: "arctic-ice",
        title: "Arctic Sea Ice Extent",
        category: SignalCategory::Climate,
        unit: "M km²",
        source_name: "NSIDC",
        frequency: Frequency::Daily,
        has_live_api: false,
    },
    SignalMeta {
        id: "co2-level",
        title: "Atmospheric CO₂",
        category: SignalCategory::Climate,
        unit: "ppm",
        source_name: "NOAA",
        frequency: Frequency::Weekly,
        has_live_api: true,
    },
    SignalMeta {
        id: "ai-adoption",
        title: "AI/ML Adoption Index",
        category: SignalCategory::Tech,
        unit: "%",
        source_name: "Stack Overflow Trends",
        frequency: Frequency::Annual,
        has_live_api: false,
    },
    SignalMeta {
        id: "rust-growth",
        title: "Rust Language Growth",
        category: SignalCategory::Tech,
        unit: "% YoY",
        source_name: "GitHub",
        frequency: Frequency::Annual,
        has_live_api: false,
    },
    SignalMeta {
        id: "cloud-native",
        title: "Cloud-Native Adoption",
        category: SignalCategory::Tech,
        unit: "%",
        source_name: "CNCF Survey",
        frequency: Frequency::Annual,
        has_live_api: false,
    },
    SignalMeta {
        id: "remote-work",
        title: "Remote Work Interest",
        category: SignalCategory::Social,
        unit: "index",
        source_name: "Google Trends",
        frequency: Frequency::Weekly,
        has_live_api: false,
    },
    SignalMeta {
        id: "mental-health",
        title: "Mental Health Awareness",
        category: SignalCategory::Social,
        unit: "index",
        source_name: "Google Trends",
        frequency: Frequency::Weekly,
        has_live_api: false,
    },
    SignalMeta {
        id: "climate-action",
        title: "Climate Action Interest",
        category: SignalCategory::Social,
        unit: "index",
        source_name: "Google Trends",
        frequency: Frequency::Weekly,
        has_live_api: false,
    },
];

pub fn all_signals() -> &'static [SignalMeta] {
    SIGNALS
}

pub fn find(signal_id: &str) -> Option<&'static SignalMeta> {
    SIGNALS.iter().find(|s| s.id == signal_id)
}

// ==================== データソース情報 ====================

/// データソースの表示情報
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceInfo {
    pub name: &'static str,
    pub frequency: &'static str,
    pub has_live_api: bool,
}

/// 未知のIDでもエラーにせずプレースホルダを返す
pub fn source_info(signal_id: &str) -> SourceInfo {
    match find(signal_id) {
        Some(meta) => SourceInfo {
            name: meta.source_name,
            frequency: meta.frequency.label(),
            has_live_api: meta.has_live_api,
        },
        None => SourceInfo {
            name: "Unknown",
            frequency: "Unknown",
            has_live_api: false,
        },
    }
}

// ==================== カテゴリ情報 ====================

/// カテゴリの表示メタデータ
#[derive(Debug, Clone, Serialize)]
pub struct CategoryMeta {
    pub category: SignalCategory,
    pub label: &'static str,
    pub description: &'static str,
}

pub fn category_meta(category: SignalCategory) -> CategoryMeta {
    match category {
        SignalCategory::Economic => CategoryMeta {
            category,
            label: "Economic",
            description: "Growth, inflation, employment, sectoral shifts",
        },
        SignalCategory::Climate => CategoryMeta {
            category,
            label: "Climate",
            description: "Temperature anomalies, extreme events, patterns",
        },
        SignalCategory::Tech => CategoryMeta {
            category,
            label: "Technology",
            description: "Framework trends, adoption curves, shifts",
        },
        SignalCategory::Social => CategoryMeta {
            category,
            label: "Public Interest",
            description: "Search spikes, trending topics, sentiment",
        },
    }
}

pub fn all_categories() -> Vec<CategoryMeta> {
    [
        SignalCategory::Economic,
        SignalCategory::Climate,
        SignalCategory::Tech,
        SignalCategory::Social,
    ]
    .into_iter()
    .map(category_meta)
    .collect()
}

/// カタログ応答用の1行（カテゴリラベル込み）
#[derive(Debug, Clone, Serialize)]
pub struct CatalogEntry {
    pub id: &'static str,
    pub title: &'static str,
    pub category: SignalCategory,
    pub category_label: &'static str,
    pub unit: &'static str,
    pub source: SourceInfo,
}

pub fn catalog_entries() -> Vec<CatalogEntry> {
    SIGNALS
        .iter()
        .map(|meta| CatalogEntry {
            id: meta.id,
            title: meta.title,
            category: meta.category,
            category_label: category_meta(meta.category).label,
            unit: meta.unit,
            source: source_info(meta.id),
        })
        .collect()
}
