//! Data-integrity errors raised while building or deriving sweep datasets.

use thiserror::Error;

use crate::core::sweep::Variant;

/// Errors raised during dataset construction and derivation.
///
/// Every variant names the metric and, where there is one, the offending
/// cell so a failed run can be traced back to the literal table.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DatasetError {
    #[error(
        "{metric}: missing cell for {variant} at {thread_count} threads, {message_size} bytes"
    )]
    IncompleteData {
        metric: String,
        variant: Variant,
        thread_count: u32,
        message_size: u32,
    },

    #[error(
        "{metric}: negative value {value} for {variant} at {thread_count} threads, {message_size} bytes"
    )]
    NegativeValue {
        metric: String,
        variant: Variant,
        thread_count: u32,
        message_size: u32,
        value: f64,
    },

    #[error(
        "{metric}: non-finite value {value} for {variant} at {thread_count} threads, {message_size} bytes"
    )]
    NonFiniteValue {
        metric: String,
        variant: Variant,
        thread_count: u32,
        message_size: u32,
        value: f64,
    },

    #[error("{metric}: shape mismatch: {reason}")]
    ShapeMismatch { metric: String, reason: String },

    #[error(
        "{metric}: zero denominator for {variant} at {thread_count} threads, {message_size} bytes"
    )]
    DivideByZero {
        metric: String,
        variant: Variant,
        thread_count: u32,
        message_size: u32,
    },

    #[error("invalid sweep domain: {reason}")]
    InvalidDomain { reason: String },
}

impl DatasetError {
    pub(crate) fn shape(metric: &str, reason: impl Into<String>) -> Self {
        Self::ShapeMismatch {
            metric: metric.to_string(),
            reason: reason.into(),
        }
    }
}
