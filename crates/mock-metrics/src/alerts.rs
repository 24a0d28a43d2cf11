//! Fixed alert feed for the dashboard demo.

use chrono::{DateTime, TimeDelta, Utc};

use crate::model::{MetricKey, TriggeredAlert};
use crate::platform::Platform;

struct AlertFixture {
    id: &'static str,
    platform: Platform,
    metric: MetricKey,
    message: &'static str,
    minutes_ago: i64,
}

/// Alerts ordered newest first.
const ALERT_FIXTURES: [AlertFixture; 3] = [
    AlertFixture {
        id: "t1",
        platform: Platform::Ethereum,
        metric: MetricKey::GasFees,
        message: "Gas fees are above $5.00, currently at $5.12.",
        minutes_ago: 5,
    },
    AlertFixture {
        id: "t2",
        platform: Platform::Solana,
        metric: MetricKey::EtfPrice,
        message: "ETF price dropped below $150, currently at $148.76.",
        minutes_ago: 22,
    },
    AlertFixture {
        id: "t3",
        platform: Platform::Bsc,
        metric: MetricKey::TransactionSpeed,
        message: "Transaction speed is above 5000ms, currently at 5123ms.",
        minutes_ago: 58,
    },
];

/// Builds the alert feed relative to `now`.
pub(crate) fn alerts_at(now: DateTime<Utc>) -> Vec<TriggeredAlert> {
    ALERT_FIXTURES
        .iter()
        .map(|fixture| TriggeredAlert {
            id: fixture.id.to_owned(),
            platform: fixture.platform,
            metric: fixture.metric,
            message: fixture.message.to_owned(),
            timestamp: now
                .checked_sub_signed(TimeDelta::minutes(fixture.minutes_ago))
                .unwrap_or(DateTime::<Utc>::MIN_UTC),
        })
        .collect()
}
