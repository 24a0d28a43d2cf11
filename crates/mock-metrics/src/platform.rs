//! Supported blockchain platforms and their static range profiles.
//!
//! The platform set is closed: every lookup is a `match` over [`Platform`],
//! so an unknown platform cannot reach the generators.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PlatformParseError;
use crate::range::ValueRange;

/// A blockchain network shown on the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Platform {
    /// Solana mainnet.
    Solana,
    /// Ethereum mainnet.
    Ethereum,
    /// BNB Smart Chain.
    #[serde(rename = "BSC")]
    Bsc,
}

/// Per-platform display symbol and sampling ranges.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlatformProfile {
    /// Ticker symbol used in the ETF price label.
    pub symbol: &'static str,
    /// Transaction confirmation time in milliseconds.
    pub speed: ValueRange,
    /// Average gas fee in US dollars.
    pub fee: ValueRange,
    /// Synthetic ETF price in US dollars.
    pub etf: ValueRange,
}

impl Platform {
    /// Every supported platform, in dashboard display order.
    pub const ALL: [Self; 3] = [Self::Solana, Self::Ethereum, Self::Bsc];

    /// Returns the static range profile for this platform.
    ///
    /// # Example
    ///
    /// ```
    /// use mock_metrics::Platform;
    ///
    /// assert_eq!(Platform::Ethereum.profile().symbol, "ETH");
    /// ```
    #[must_use]
    pub const fn profile(self) -> PlatformProfile {
        match self {
            Self::Solana => PlatformProfile {
                symbol: "SOL",
                speed: ValueRange::new(400.0, 800.0),
                fee: ValueRange::new(0.0001, 0.0005),
                etf: ValueRange::new(150.0, 250.0),
            },
            Self::Ethereum => PlatformProfile {
                symbol: "ETH",
                speed: ValueRange::new(12_000.0, 15_000.0),
                fee: ValueRange::new(2.5, 5.0),
                etf: ValueRange::new(3_000.0, 4_000.0),
            },
            Self::Bsc => PlatformProfile {
                symbol: "BNB",
                speed: ValueRange::new(3_000.0, 5_000.0),
                fee: ValueRange::new(0.1, 0.3),
                etf: ValueRange::new(500.0, 700.0),
            },
        }
    }

    /// Returns the display name, matching the serialized form.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Solana => "Solana",
            Self::Ethereum => "Ethereum",
            Self::Bsc => "BSC",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = PlatformParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        Self::ALL
            .into_iter()
            .find(|platform| platform.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| PlatformParseError::Unknown {
                value: value.to_owned(),
            })
    }
}
