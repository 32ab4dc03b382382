//! Sweep data model: domains, datasets and derived metrics.

pub mod dataset;
pub mod derived;
pub mod error;
pub mod sweep;
