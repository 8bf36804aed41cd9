//! Shared error types for the library.
//!
//! Failures are values throughout: a filter that cannot honor its
//! configuration refuses to exist, and a lookup that misses names the stage
//! that missed. Nothing here aborts the process.

use thiserror::Error;

/// Errors produced while building image filters.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FilterError {
    /// The filter's parameters are outside the accepted range.
    #[error("invalid configuration for {filter}: {reason}")]
    InvalidConfiguration {
        filter: &'static str,
        reason: String,
    },

    /// A pixel format name no known format answers to.
    #[error("unknown pixel format {0:?}")]
    UnknownFormat(String),
}

impl FilterError {
    /// Create an invalid-configuration error for the named filter.
    pub fn invalid(filter: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            filter,
            reason: reason.into(),
        }
    }
}

/// Errors produced by staged gazetteer lookups.
///
/// One variant per stage, so callers can branch on which stage failed
/// without inspecting message text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    /// Stage one missed: the country has no recorded capital.
    #[error("no capital recorded for {0:?}")]
    CapitalNotFound(String),

    /// Stage two missed: the city has no recorded population.
    #[error("no population recorded for {0:?}")]
    PopulationNotFound(String),
}
