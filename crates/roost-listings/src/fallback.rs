//! Remote-to-mock substitution for read paths.
//!
//! Every read funnels its upstream result through [`resolve`]. An
//! [`UpstreamError`] is classified into a [`FallbackCause`], logged at warn
//! level, and replaced by the mock catalog's answer for the same normalized
//! request. Writes never pass through here.

use crate::error::{FallbackCause, UpstreamError};

/// Where a read's answer came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataSource {
    Upstream,
    /// Mock mode is switched on; the upstream was not contacted.
    Mock,
    Fallback(FallbackCause),
}

/// A read result tagged with its [`DataSource`].
#[derive(Debug, Clone, PartialEq)]
pub struct Sourced<T> {
    pub value: T,
    pub source: DataSource,
}

impl<T> Sourced<T> {
    pub(crate) fn mock(value: T) -> Self {
        Self {
            value,
            source: DataSource::Mock,
        }
    }
}

/// Returns the upstream value, or logs the failure and substitutes `mock()`.
pub(crate) fn resolve<T>(
    endpoint: &'static str,
    result: Result<T, UpstreamError>,
    mock: impl FnOnce() -> T,
) -> Sourced<T> {
    match result {
        Ok(value) => Sourced {
            value,
            source: DataSource::Upstream,
        },
        Err(error) => {
            let cause = error.cause();
            log_fallback(endpoint, cause, &error);
            Sourced {
                value: mock(),
                source: DataSource::Fallback(cause),
            }
        }
    }
}

pub(crate) fn log_fallback(endpoint: &'static str, cause: FallbackCause, error: &UpstreamError) {
    tracing::warn!(endpoint, %cause, %error, "upstream read failed, serving mock data");
}
