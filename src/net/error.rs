//! Failure taxonomy for the analysis-service call.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use thiserror::Error;

/// Everything that can go wrong between submit and a decoded response.
///
/// Empty input never reaches this type: the submit path silently ignores
/// it before any request is formed. All three variants surface the same
/// way (an error transcript entry plus the banner) and none are retried.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum QueryError {
    /// The request never completed (network failure, DNS, timeout).
    #[error("request failed: {0}")]
    Transport(String),
    /// The service answered with a status outside the 2xx range.
    #[error("HTTP error! status: {0}")]
    Protocol(u16),
    /// The body could not be decoded into the expected JSON shape.
    #[error("malformed response: {0}")]
    Decode(String),
}
