use super::*;
use crate::analytics::types::{Trend, VolatilityIndex};
use assertables::assert_in_delta;
use chrono::{Duration, TimeZone, Utc};
use proptest::prelude::*;

fn series(values: &[f64]) -> Vec<DataPoint> {
    let base = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    values
        .iter()
        .enumerate()
        .map(|(i, &v)| DataPoint::new(base + Duration::days(i as i64), v))
        .collect()
}

#[test]
fn test_empty_series_defaults() {
    let stats = compute_statistics(&[], 42.0);

    assert_eq!(stats.min.value, 0.0);
    assert_eq!(stats.max.value, 0.0);
    assert_eq!(stats.mean, 0.0);
    assert_eq!(stats.median, 0.0);
    assert_eq!(stats.std_dev, 0.0);
    assert_eq!(stats.variance, 0.0);
    assert_eq!(stats.percentile_rank, 50.0);
    assert_eq!(stats.moving_averages.ma7, None);
    assert_eq!(stats.moving_averages.ma30, None);
    assert_eq!(stats.moving_averages.ma90, None);
    assert_eq!(stats.yoy_change, None);
    assert_eq!(stats.trend, Trend::Stable);
    assert_eq!(stats.volatility_index, VolatilityIndex::Moderate);
}

#[test]
fn test_extremes_first_occurrence_wins() {
    // 同値の極値は最初の出現の日時が採用される
    let data = series(&[5.0, 1.0, 1.0, 9.0, 9.0]);
    let stats = compute_statistics(&data, 5.0);

    assert_eq!(stats.min.value, 1.0);
    assert_eq!(stats.min.date, data[1].date);
    assert_eq!(stats.max.value, 9.0);
    assert_eq!(stats.max.date, data[3].date);
}

#[test]
fn test_median_odd_and_even() {
    let odd = compute_statistics(&series(&[3.0, 1.0, 2.0]), 2.0);
    assert_eq!(odd.median, 2.0);

    let even = compute_statistics(&series(&[4.0, 1.0, 3.0, 2.0]), 2.0);
    assert_eq!(even.median, 2.5);
}

#[test]
fn test_population_variance() {
    // 母分散の古典的な例: 平均 5, 分散 4, 標準偏差 2
    let data = series(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]);
    let stats = compute_statistics(&data, 5.0);

    assert_eq!(stats.mean, 5.0);
    assert_in_delta!(stats.variance, 4.0, 1e-12);
    assert_in_delta!(stats.std_dev, 2.0, 1e-12);
}

#[test]
fn test_percentile_rank_excludes_ties() {
    let data = series(&[1.0, 2.0, 3.0]);

    // 同値は「未満」に数えない
    let stats = compute_statistics(&data, 2.0);
    assert_in_delta!(stats.percentile_rank, 100.0 / 3.0, 1e-12);

    assert_eq!(compute_statistics(&data, 0.0).percentile_rank, 0.0);
    assert_eq!(compute_statistics(&data, 10.0).percentile_rank, 100.0);
}

#[test]
fn test_moving_average_windows() {
    // 6点では ma7 はまだ計算されない
    let six: Vec<f64> = (1..=6).map(|i| i as f64).collect();
    let stats = compute_statistics(&series(&six), 6.0);
    assert_eq!(stats.moving_averages.ma7, None);

    // 7点で末尾7点の平均
    let seven: Vec<f64> = (1..=7).map(|i| i as f64).collect();
    let stats = compute_statistics(&series(&seven), 7.0);
    assert_eq!(stats.moving_averages.ma7, Some(4.0));
    assert_eq!(stats.moving_averages.ma30, None);

    // 90点で3本すべて揃う
    let ninety: Vec<f64> = (1..=90).map(|i| i as f64).collect();
    let stats = compute_statistics(&series(&ninety), 90.0);
    assert_eq!(stats.moving_averages.ma7, Some(87.0));
    assert_eq!(stats.moving_averages.ma30, Some(75.5));
    assert_eq!(stats.moving_averages.ma90, Some(45.5));
}

#[test]
fn test_yoy_change() {
    // 12点未満では計算しない
    let eleven: Vec<f64> = (0..11).map(|i| 100.0 + i as f64).collect();
    assert_eq!(compute_statistics(&series(&eleven), 110.0).yoy_change, None);

    // 12点前がゼロの場合もゼロ除算を避けて None
    let mut with_zero: Vec<f64> = (0..12).map(|i| 100.0 + i as f64).collect();
    with_zero[0] = 0.0;
    assert_eq!(
        compute_statistics(&series(&with_zero), 111.0).yoy_change,
        None
    );
}

#[test]
fn test_trend_classification() {
    // 6点未満は Stable
    let stats = compute_statistics(&series(&[1.0, 2.0, 3.0, 4.0, 5.0]), 5.0);
    assert_eq!(stats.trend, Trend::Stable);

    // 直近3点平均 102 vs 直前3点平均 108 → -5.56% < -5 で Decelerating
    let falling = series(&[110.0, 108.0, 106.0, 104.0, 102.0, 100.0]);
    assert_eq!(compute_statistics(&falling, 100.0).trend, Trend::Decelerating);

    // 横ばいは Stable
    let flat = series(&[100.0; 8]);
    assert_eq!(compute_statistics(&flat, 100.0).trend, Trend::Stable);
}

#[test]
fn test_volatility_classification() {
    // cv = std/|mean| * 100 の境界を順に踏む
    assert_eq!(
        compute_statistics(&series(&[99.0, 101.0]), 100.0).volatility_index,
        VolatilityIndex::Low
    );
    // cv = 10 ちょうどは Low に入らない
    assert_eq!(
        compute_statistics(&series(&[90.0, 110.0]), 100.0).volatility_index,
        VolatilityIndex::Moderate
    );
    assert_eq!(
        compute_statistics(&series(&[70.0, 130.0]), 100.0).volatility_index,
        VolatilityIndex::High
    );
    assert_eq!(
        compute_statistics(&series(&[50.0, 150.0]), 100.0).volatility_index,
        VolatilityIndex::Extreme
    );
    // 平均ゼロの系列は Moderate に倒す
    assert_eq!(
        compute_statistics(&series(&[-1.0, 1.0]), 0.0).volatility_index,
        VolatilityIndex::Moderate
    );
}

#[test]
fn test_monotonic_monthly_scenario() {
    // 月次の単調増加系列: 100, 102, ..., 122
    let values: Vec<f64> = (0..12).map(|i| 100.0 + 2.0 * i as f64).collect();
    let stats = compute_statistics(&series(&values), 122.0);

    assert_eq!(stats.min.value, 100.0);
    assert_eq!(stats.max.value, 122.0);
    assert_eq!(stats.mean, 111.0);
    assert_eq!(stats.median, 111.0);
    assert_in_delta!(stats.variance, 572.0 / 12.0, 1e-9);
    assert_in_delta!(stats.yoy_change.unwrap(), 22.0, 1e-12);
    assert_in_delta!(stats.percentile_rank, 1100.0 / 12.0, 1e-9);
    assert_eq!(stats.moving_averages.ma7, Some(116.0));
    assert_eq!(stats.moving_averages.ma30, None);
    // 直近3点平均 120 vs 直前3点平均 114 → +5.26% > 5
    assert_eq!(stats.trend, Trend::Accelerating);
    assert_eq!(stats.volatility_index, VolatilityIndex::Low);
}

#[test]
fn test_flat_series_scenario() {
    let stats = compute_statistics(&series(&[50.0; 5]), 50.0);

    assert_eq!(stats.mean, 50.0);
    assert_eq!(stats.std_dev, 0.0);
    assert_eq!(stats.variance, 0.0);
    assert_eq!(stats.volatility_index, VolatilityIndex::Low);
    // 50 未満の値は無いので順位は 0
    assert_eq!(stats.percentile_rank, 0.0);
}

#[test]
fn test_format_helpers() {
    assert_eq!(format_stat_value(1.2345, 2), "1.23");
    assert_eq!(format_stat_value(7.0, 1), "7.0");

    assert_eq!(format_percentile(1.4), "1st");
    assert_eq!(format_percentile(2.0), "2nd");
    assert_eq!(format_percentile(3.0), "3rd");
    assert_eq!(format_percentile(11.0), "11th");
    assert_eq!(format_percentile(91.7), "92th");
}

proptest! {
    #[test]
    fn prop_extremes_bound_all_values(
        values in proptest::collection::vec(-1.0e6f64..1.0e6, 1..120),
    ) {
        let stats = compute_statistics(&series(&values), values[0]);
        for &v in &values {
            prop_assert!(stats.min.value <= v);
            prop_assert!(v <= stats.max.value);
        }
        prop_assert!(stats.min.value - 1e-6 <= stats.mean);
        prop_assert!(stats.mean <= stats.max.value + 1e-6);
    }

    #[test]
    fn prop_std_dev_squares_to_variance(
        values in proptest::collection::vec(-1.0e6f64..1.0e6, 1..120),
    ) {
        let stats = compute_statistics(&series(&values), 0.0);
        let diff = (stats.std_dev * stats.std_dev - stats.variance).abs();
        prop_assert!(diff <= 1e-6 * stats.variance.max(1.0));
    }

    #[test]
    fn prop_percentile_rank_monotonic(
        values in proptest::collection::vec(-1.0e6f64..1.0e6, 1..120),
        a in -1.0e6f64..1.0e6,
        b in -1.0e6f64..1.0e6,
    ) {
        let data = series(&values);
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let lo_rank = compute_statistics(&data, lo).percentile_rank;
        let hi_rank = compute_statistics(&data, hi).percentile_rank;
        prop_assert!(lo_rank <= hi_rank);
    }

    #[test]
    fn prop_moving_average_presence(len in 1usize..120) {
        let values: Vec<f64> = (0..len).map(|i| i as f64).collect();
        let stats = compute_statistics(&series(&values), 0.0);
        prop_assert_eq!(stats.moving_averages.ma7.is_some(), len >= 7);
        prop_assert_eq!(stats.moving_averages.ma30.is_some(), len >= 30);
        prop_assert_eq!(stats.moving_averages.ma90.is_some(), len >= 90);
    }
}
