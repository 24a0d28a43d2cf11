//! Random metric generation.
//!
//! [`MockDataGenerator`] owns the random source and the clock so every
//! generator can be driven deterministically in tests: a fixed seed and a
//! fixed clock always reproduce the same output.

use std::sync::Arc;

use chrono::{DateTime, Days, NaiveDate, Utc};
use mockable::{Clock, DefaultClock};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use crate::alerts::alerts_at;
use crate::format::{format_percent, format_value};
use crate::model::{
    ChangeType, ChartData, Metric, PlatformMetrics, RegionalMetric, TimeSeriesDataPoint,
    TriggeredAlert,
};
use crate::platform::Platform;
use crate::range::ValueRange;
use crate::region::COUNTRIES;

/// Calendar label format for daily points, e.g. `"Oct 19"`.
const DATE_LABEL_FORMAT: &str = "%b %d";

const HOURLY_POINTS: usize = 24;
const HOURLY_RANGE: ValueRange = ValueRange::new(1_000.0, 5_000.0);
const WEEKLY_POINTS: usize = 7;
const WEEKLY_RANGE: ValueRange = ValueRange::new(5_000.0, 20_000.0);
const MONTHLY_POINTS: usize = 30;
const MONTHLY_RANGE: ValueRange = ValueRange::new(20_000.0, 100_000.0);

/// Number of points in a metric's trend series.
pub const METRIC_TREND_POINTS: usize = 30;

/// Percentage change range shared by every metric.
pub const CHANGE_RANGE: ValueRange = ValueRange::new(-5.0, 5.0);

/// Cross-border volume range in billions, shared by all platforms.
pub const PAYMENT_VOLUME_RANGE: ValueRange = ValueRange::new(50.0, 150.0);

/// Regional payment volume range in dollars.
pub const REGIONAL_VOLUME_RANGE: ValueRange = ValueRange::new(50_000_000.0, 1_050_000_000.0);

/// Regional transaction speed range in milliseconds.
pub const REGIONAL_SPEED_RANGE: ValueRange = ValueRange::new(400.0, 5_400.0);

/// Regional gas fee range in dollars.
pub const REGIONAL_FEE_RANGE: ValueRange = ValueRange::new(0.01, 2.01);

const TREND_LOW_FACTOR: f64 = 0.8;
const TREND_HIGH_FACTOR: f64 = 1.2;

/// Fractional digits used when a metric does not override them.
pub const DEFAULT_FRACTION_DIGITS: usize = 2;

/// Describes how a single metric is sampled and displayed.
///
/// # Example
///
/// ```
/// use mock_metrics::{MetricSpec, ValueRange};
///
/// let spec = MetricSpec::new("Avg. Gas Fee", ValueRange::new(0.1, 0.3))
///     .with_prefix("$")
///     .with_fraction_digits(4);
///
/// assert_eq!(spec.fraction_digits(), 4);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct MetricSpec {
    label: String,
    prefix: &'static str,
    suffix: &'static str,
    range: ValueRange,
    fraction_digits: usize,
}

impl MetricSpec {
    /// Creates a metric description with no prefix or suffix and two
    /// fractional digits.
    #[must_use]
    pub fn new(label: impl Into<String>, range: ValueRange) -> Self {
        Self {
            label: label.into(),
            prefix: "",
            suffix: "",
            range,
            fraction_digits: DEFAULT_FRACTION_DIGITS,
        }
    }

    /// Sets the text placed before the formatted value.
    #[must_use]
    pub fn with_prefix(self, prefix: &'static str) -> Self {
        Self { prefix, ..self }
    }

    /// Sets the text placed after the formatted value.
    #[must_use]
    pub fn with_suffix(self, suffix: &'static str) -> Self {
        Self { suffix, ..self }
    }

    /// Sets the number of fractional digits shown.
    #[must_use]
    pub fn with_fraction_digits(self, fraction_digits: usize) -> Self {
        Self {
            fraction_digits,
            ..self
        }
    }

    /// Returns the display label.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns the sampling range.
    #[must_use]
    pub const fn range(&self) -> ValueRange {
        self.range
    }

    /// Returns the text placed before the formatted value.
    #[must_use]
    pub const fn prefix(&self) -> &'static str {
        self.prefix
    }

    /// Returns the text placed after the formatted value.
    #[must_use]
    pub const fn suffix(&self) -> &'static str {
        self.suffix
    }

    /// Returns the number of fractional digits shown.
    #[must_use]
    pub const fn fraction_digits(&self) -> usize {
        self.fraction_digits
    }
}

/// Produces dashboard data from an injected random source and clock.
pub struct MockDataGenerator<R = ChaCha8Rng> {
    rng: R,
    clock: Arc<dyn Clock>,
}

impl MockDataGenerator<ChaCha8Rng> {
    /// Creates a generator whose output is fully determined by `seed` and
    /// the clock.
    ///
    /// # Example
    ///
    /// ```
    /// use std::sync::Arc;
    ///
    /// use mock_metrics::{MockDataGenerator, Platform};
    /// use mockable::DefaultClock;
    ///
    /// let mut generator = MockDataGenerator::seeded(2026, Arc::new(DefaultClock));
    /// let metrics = generator.platform_metrics(Platform::Solana);
    ///
    /// assert_eq!(metrics.etf_price.label, "SOL ETF Price");
    /// ```
    #[must_use]
    pub fn seeded(seed: u64, clock: Arc<dyn Clock>) -> Self {
        debug!(seed, "seeding mock data generator");
        Self::new(ChaCha8Rng::seed_from_u64(seed), clock)
    }

    /// Creates a generator seeded from the thread-local entropy source.
    #[must_use]
    pub fn from_entropy(clock: Arc<dyn Clock>) -> Self {
        Self::seeded(random_seed(), clock)
    }
}

impl<R: Rng> MockDataGenerator<R> {
    /// Creates a generator from any random source.
    #[must_use]
    pub const fn new(rng: R, clock: Arc<dyn Clock>) -> Self {
        Self { rng, clock }
    }

    /// Returns the current time according to the injected clock.
    #[must_use]
    pub fn now(&self) -> DateTime<Utc> {
        self.clock.utc()
    }

    /// Generates `count` daily points ending today, oldest first.
    ///
    /// Each value is sampled uniformly from `range`; each label is the
    /// calendar day the point represents in the clock's local time zone.
    pub fn time_series(&mut self, count: usize, range: ValueRange) -> Vec<TimeSeriesDataPoint> {
        let today = self.clock.local().date_naive();
        (0..count)
            .rev()
            .map(|days_ago| TimeSeriesDataPoint {
                time: days_before(today, days_ago)
                    .format(DATE_LABEL_FORMAT)
                    .to_string(),
                value: range.sample(&mut self.rng),
            })
            .collect()
    }

    /// Generates the 24-hour, 7-day and 30-day chart windows.
    ///
    /// The 24-hour window carries hour labels `"0:00"` to `"23:00"` in place
    /// of calendar dates.
    pub fn chart_data(&mut self) -> ChartData {
        let last_day = self
            .time_series(HOURLY_POINTS, HOURLY_RANGE)
            .into_iter()
            .enumerate()
            .map(|(hour, point)| TimeSeriesDataPoint {
                time: format!("{hour}:00"),
                ..point
            })
            .collect();
        let last_week = self.time_series(WEEKLY_POINTS, WEEKLY_RANGE);
        let last_month = self.time_series(MONTHLY_POINTS, MONTHLY_RANGE);

        ChartData {
            last_day,
            last_week,
            last_month,
        }
    }

    /// Samples a metric value and change and formats them for display.
    ///
    /// The attached trend series is drawn from 80% to 120% of the sampled
    /// value so the chart sits around the headline figure.
    pub fn metric(&mut self, spec: &MetricSpec) -> Metric {
        let value = spec.range().sample(&mut self.rng);
        let change = CHANGE_RANGE.sample(&mut self.rng);
        let data = self.time_series(
            METRIC_TREND_POINTS,
            ValueRange::around(value, TREND_LOW_FACTOR, TREND_HIGH_FACTOR),
        );

        Metric {
            label: spec.label().to_owned(),
            value: format_value(spec.prefix(), value, spec.suffix(), spec.fraction_digits()),
            change: format_percent(change),
            change_type: ChangeType::from_change(change),
            data,
            raw_value: value,
            raw_change: change,
        }
    }

    /// Generates the full metric panel for `platform`.
    ///
    /// The two chart blocks are sampled independently of the headline
    /// metrics.
    pub fn platform_metrics(&mut self, platform: Platform) -> PlatformMetrics {
        debug!(%platform, "generating platform metrics");
        let profile = platform.profile();

        let volume = MetricSpec::new("Cross-Border Volume", PAYMENT_VOLUME_RANGE)
            .with_prefix("$")
            .with_suffix("B");
        let speed = MetricSpec::new("Avg. Txn Speed", profile.speed)
            .with_suffix("ms")
            .with_fraction_digits(0);
        let fee = MetricSpec::new("Avg. Gas Fee", profile.fee)
            .with_prefix("$")
            .with_fraction_digits(4);
        let etf = MetricSpec::new(format!("{} ETF Price", profile.symbol), profile.etf)
            .with_prefix("$");

        PlatformMetrics {
            payment_volume: self.metric(&volume),
            transaction_speed: self.metric(&speed),
            gas_fees: self.metric(&fee),
            etf_price: self.metric(&etf),
            cross_border_volume: self.chart_data(),
            gas_fee_trend: self.chart_data(),
        }
    }

    /// Generates one regional record per country, in table order.
    pub fn regional_metrics(&mut self) -> Vec<RegionalMetric> {
        debug!(countries = COUNTRIES.len(), "generating regional metrics");
        COUNTRIES
            .iter()
            .map(|country| RegionalMetric {
                country_code: country.code.to_owned(),
                country_name: country.name.to_owned(),
                payment_volume: REGIONAL_VOLUME_RANGE.sample(&mut self.rng),
                transaction_speed: REGIONAL_SPEED_RANGE.sample(&mut self.rng),
                gas_fee: REGIONAL_FEE_RANGE.sample(&mut self.rng),
            })
            .collect()
    }

    /// Returns the fixed alert feed, timestamped relative to the clock.
    #[must_use]
    pub fn triggered_alerts(&self) -> Vec<TriggeredAlert> {
        alerts_at(self.clock.utc())
    }
}

/// Generates a metric panel using fresh entropy and the system clock.
///
/// # Example
///
/// ```
/// use mock_metrics::{Platform, generate_mock_metrics};
///
/// let metrics = generate_mock_metrics(Platform::Ethereum);
/// assert_eq!(metrics.payment_volume.data.len(), 30);
/// ```
#[must_use]
pub fn generate_mock_metrics(platform: Platform) -> PlatformMetrics {
    MockDataGenerator::from_entropy(Arc::new(DefaultClock)).platform_metrics(platform)
}

/// Generates the regional breakdown using fresh entropy.
#[must_use]
pub fn generate_regional_mock_data() -> Vec<RegionalMetric> {
    MockDataGenerator::from_entropy(Arc::new(DefaultClock)).regional_metrics()
}

/// Returns the alert feed relative to the system clock.
#[must_use]
pub fn generate_triggered_alerts() -> Vec<TriggeredAlert> {
    alerts_at(DefaultClock.utc())
}

fn random_seed() -> u64 {
    rand::rng().random()
}

fn days_before(today: NaiveDate, days_ago: usize) -> NaiveDate {
    u64::try_from(days_ago)
        .ok()
        .and_then(|days| today.checked_sub_days(Days::new(days)))
        .unwrap_or(NaiveDate::MIN)
}
