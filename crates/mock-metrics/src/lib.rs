//! Synthetic blockchain dashboard metrics for demonstration purposes.
//!
//! This crate fabricates plausible-looking payment volume, transaction speed,
//! gas fee and ETF price figures, regional breakdowns and an alert feed for a
//! dashboard UI. Nothing is ingested from a live network: every value is
//! sampled uniformly from hardcoded ranges.
//!
//! # Overview
//!
//! - [`MockDataGenerator`] owns an injectable random source and clock, so the
//!   same seed and clock always produce the same dashboard
//! - [`Platform`] is a closed set with a static range profile per platform
//! - [`DashboardSnapshot`] bundles every generator's output for one render
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use mock_metrics::{ChangeType, MockDataGenerator, Platform};
//! use mockable::DefaultClock;
//!
//! let mut generator = MockDataGenerator::seeded(42, Arc::new(DefaultClock));
//! let metrics = generator.platform_metrics(Platform::Ethereum);
//!
//! assert_eq!(metrics.transaction_speed.data.len(), 30);
//! assert_eq!(
//!     metrics.gas_fees.change_type,
//!     ChangeType::from_change(metrics.gas_fees.raw_change)
//! );
//! ```

mod alerts;
mod error;
mod format;
mod generator;
mod model;
mod platform;
mod range;
mod region;
mod snapshot;

pub use error::PlatformParseError;
pub use format::{format_grouped, format_percent, format_value};
pub use generator::{
    CHANGE_RANGE, DEFAULT_FRACTION_DIGITS, METRIC_TREND_POINTS, MetricSpec, MockDataGenerator,
    PAYMENT_VOLUME_RANGE, REGIONAL_FEE_RANGE, REGIONAL_SPEED_RANGE, REGIONAL_VOLUME_RANGE,
    generate_mock_metrics, generate_regional_mock_data, generate_triggered_alerts,
};
pub use model::{
    ChangeType, ChartData, Metric, MetricKey, PlatformMetrics, RegionalMetric,
    TimeSeriesDataPoint, TriggeredAlert,
};
pub use platform::{Platform, PlatformProfile};
pub use range::ValueRange;
pub use region::{COUNTRIES, Country};
pub use snapshot::{DashboardSnapshot, PlatformSnapshot};
