//! Shared fixtures for mock-metrics integration tests.

use std::sync::Arc;

use chrono::{DateTime, Local, Utc};
use mockable::Clock;

/// Fixed instant used by every integration test clock.
pub const FIXTURE_NOW: &str = "2026-10-19T09:30:00Z";

/// Clock pinned to a single instant.
pub struct FixtureClock {
    utc_now: DateTime<Utc>,
}

impl Clock for FixtureClock {
    fn local(&self) -> DateTime<Local> {
        self.utc_now.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.utc_now
    }
}

/// Returns a clock pinned to [`FIXTURE_NOW`].
#[must_use]
pub fn fixture_clock() -> Arc<dyn Clock> {
    Arc::new(FixtureClock {
        utc_now: fixture_now(),
    })
}

/// Returns [`FIXTURE_NOW`] as a UTC timestamp.
#[must_use]
pub fn fixture_now() -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(FIXTURE_NOW)
        .map_or_else(|_| DateTime::default(), |ts| ts.with_timezone(&Utc))
}
