//! Error types for the mock-metrics crate.
//!
//! Generators are infallible; errors only arise where platform names arrive
//! as text.

use thiserror::Error;

/// Errors raised when a platform name cannot be mapped to a [`Platform`].
///
/// [`Platform`]: crate::Platform
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlatformParseError {
    /// The supplied name does not match any supported platform.
    #[error("unknown platform '{value}': expected one of Solana, Ethereum, BSC")]
    Unknown {
        /// The unrecognised platform name.
        value: String,
    },
}
