//! Complete dashboard payloads.
//!
//! A snapshot bundles every generator's output for a single render of the
//! dashboard, stamped with the moment it was generated.

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::generator::MockDataGenerator;
use crate::model::{PlatformMetrics, RegionalMetric, TriggeredAlert};
use crate::platform::Platform;

/// Metric panel tagged with the platform it belongs to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformSnapshot {
    /// Platform the metrics describe.
    pub platform: Platform,
    /// Generated metric panel.
    pub metrics: PlatformMetrics,
}

/// Everything the dashboard renders in one pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSnapshot {
    /// Moment the snapshot was generated.
    pub generated_at: DateTime<Utc>,
    /// Metric panels, one per requested platform.
    pub platforms: Vec<PlatformSnapshot>,
    /// Regional breakdown.
    pub regional: Vec<RegionalMetric>,
    /// Alert feed.
    pub alerts: Vec<TriggeredAlert>,
}

impl DashboardSnapshot {
    /// Returns the metric panel for `platform`, if it was generated.
    #[must_use]
    pub fn platform(&self, platform: Platform) -> Option<&PlatformMetrics> {
        self.platforms
            .iter()
            .find(|entry| entry.platform == platform)
            .map(|entry| &entry.metrics)
    }
}

impl<R: Rng> MockDataGenerator<R> {
    /// Generates a snapshot covering every supported platform.
    pub fn snapshot(&mut self) -> DashboardSnapshot {
        self.snapshot_for(&Platform::ALL)
    }

    /// Generates a snapshot covering only `platforms`, in the given order.
    ///
    /// # Example
    ///
    /// ```
    /// use std::sync::Arc;
    ///
    /// use mock_metrics::{MockDataGenerator, Platform};
    /// use mockable::DefaultClock;
    ///
    /// let mut generator = MockDataGenerator::seeded(7, Arc::new(DefaultClock));
    /// let snapshot = generator.snapshot_for(&[Platform::Bsc]);
    ///
    /// assert_eq!(snapshot.platforms.len(), 1);
    /// assert_eq!(snapshot.regional.len(), 18);
    /// assert_eq!(snapshot.alerts.len(), 3);
    /// ```
    pub fn snapshot_for(&mut self, platforms: &[Platform]) -> DashboardSnapshot {
        let generated_at = self.now();
        let panels = platforms
            .iter()
            .map(|&platform| PlatformSnapshot {
                platform,
                metrics: self.platform_metrics(platform),
            })
            .collect();
        let regional = self.regional_metrics();
        let alerts = self.triggered_alerts();
        debug!(
            platforms = platforms.len(),
            regions = regional.len(),
            alerts = alerts.len(),
            "dashboard snapshot generated"
        );

        DashboardSnapshot {
            generated_at,
            platforms: panels,
            regional,
            alerts,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use chrono::Local;
    use mockable::Clock;

    use super::*;

    struct FixtureClock(DateTime<Utc>);

    impl Clock for FixtureClock {
        fn local(&self) -> DateTime<Local> {
            self.0.with_timezone(&Local)
        }

        fn utc(&self) -> DateTime<Utc> {
            self.0
        }
    }

    fn generator(seed: u64) -> MockDataGenerator {
        let now = DateTime::parse_from_rfc3339("2026-10-19T09:30:00Z")
            .expect("valid timestamp")
            .with_timezone(&Utc);
        MockDataGenerator::seeded(seed, Arc::new(FixtureClock(now)))
    }

    #[test]
    fn snapshot_covers_all_platforms_in_order() {
        let snapshot = generator(3).snapshot();
        let platforms: Vec<_> = snapshot.platforms.iter().map(|p| p.platform).collect();

        assert_eq!(platforms, Platform::ALL);
        assert!(snapshot.platform(Platform::Ethereum).is_some());
    }

    #[test]
    fn filtered_snapshot_omits_other_platforms() {
        let snapshot = generator(3).snapshot_for(&[Platform::Solana]);

        assert!(snapshot.platform(Platform::Solana).is_some());
        assert!(snapshot.platform(Platform::Bsc).is_none());
    }

    #[test]
    fn snapshot_is_stamped_with_clock_time() {
        let mut generator = generator(3);
        let now = generator.now();

        assert_eq!(generator.snapshot().generated_at, now);
    }

    #[test]
    fn snapshot_json_is_reproducible() {
        let first = serde_json::to_string(&generator(99).snapshot()).expect("serialize");
        let second = serde_json::to_string(&generator(99).snapshot()).expect("serialize");

        assert_eq!(first, second);
        assert!(first.contains("\"generatedAt\""));
        assert!(first.contains("\"crossBorderVolume\""));
        assert!(first.contains("\"24H\""));
    }
}
