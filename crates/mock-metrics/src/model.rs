//! Dashboard data shapes.
//!
//! These types serialize to the camelCase JSON the dashboard frontend reads.
//! Every value is built fresh per generator call and never mutated afterwards.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::platform::Platform;

/// One point of a trend chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSeriesDataPoint {
    /// Axis label, either a calendar date (`"Oct 19"`) or an hour (`"13:00"`).
    pub time: String,
    /// Sampled value.
    pub value: f64,
}

/// Direction of a metric's period-over-period change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeType {
    /// The change is zero or positive.
    Increase,
    /// The change is negative.
    Decrease,
}

impl ChangeType {
    /// Classifies a signed change; zero counts as an increase.
    #[must_use]
    pub const fn from_change(change: f64) -> Self {
        if change >= 0.0 {
            Self::Increase
        } else {
            Self::Decrease
        }
    }
}

/// A headline KPI with its formatted value, change and trend.
///
/// # Example
///
/// ```
/// use mock_metrics::{ChangeType, Metric};
///
/// let metric = Metric {
///     label: "Avg. Txn Speed".to_owned(),
///     value: "512ms".to_owned(),
///     change: "-1.25%".to_owned(),
///     change_type: ChangeType::Decrease,
///     data: vec![],
///     raw_value: 512.0,
///     raw_change: -1.25,
/// };
///
/// assert_eq!(metric.change_type, ChangeType::Decrease);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metric {
    /// Display label.
    pub label: String,
    /// Formatted value including prefix and suffix, e.g. `"$1,234.50"`.
    pub value: String,
    /// Formatted signed percentage, e.g. `"-2.31%"`.
    pub change: String,
    /// Direction derived from the sign of the change.
    pub change_type: ChangeType,
    /// Thirty-point trend centred on the sampled value.
    pub data: Vec<TimeSeriesDataPoint>,
    /// Unformatted sampled value.
    pub raw_value: f64,
    /// Unformatted sampled change, in percent.
    pub raw_change: f64,
}

/// Trend series for the three chart windows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartData {
    /// Hourly points for the last day.
    #[serde(rename = "24H")]
    pub last_day: Vec<TimeSeriesDataPoint>,
    /// Daily points for the last week.
    #[serde(rename = "7D")]
    pub last_week: Vec<TimeSeriesDataPoint>,
    /// Daily points for the last month.
    #[serde(rename = "30D")]
    pub last_month: Vec<TimeSeriesDataPoint>,
}

/// The metric panel for a single platform.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformMetrics {
    /// Cross-border payment volume in billions of dollars.
    pub payment_volume: Metric,
    /// Average transaction speed in milliseconds.
    pub transaction_speed: Metric,
    /// Average gas fee in dollars.
    pub gas_fees: Metric,
    /// Synthetic ETF price in dollars.
    pub etf_price: Metric,
    /// Volume trend chart.
    pub cross_border_volume: ChartData,
    /// Gas fee trend chart.
    pub gas_fee_trend: ChartData,
}

/// Raw per-country figures for the regional breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionalMetric {
    /// ISO 3166-1 alpha-2 code.
    pub country_code: String,
    /// English display name.
    pub country_name: String,
    /// Payment volume in dollars.
    pub payment_volume: f64,
    /// Transaction speed in milliseconds.
    pub transaction_speed: f64,
    /// Gas fee in dollars.
    pub gas_fee: f64,
}

/// Names a metric of [`PlatformMetrics`] that an alert refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MetricKey {
    /// [`PlatformMetrics::payment_volume`].
    PaymentVolume,
    /// [`PlatformMetrics::transaction_speed`].
    TransactionSpeed,
    /// [`PlatformMetrics::gas_fees`].
    GasFees,
    /// [`PlatformMetrics::etf_price`].
    EtfPrice,
}

/// An alert shown in the dashboard's alert feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TriggeredAlert {
    /// Stable alert identifier.
    pub id: String,
    /// Platform the alert fired for.
    pub platform: Platform,
    /// Metric that crossed its threshold.
    pub metric: MetricKey,
    /// Human-readable description.
    pub message: String,
    /// Moment the alert fired.
    pub timestamp: DateTime<Utc>,
}
