//! Metrics recorded while building connection strings
//!
//! Uses the `metrics` facade; no recorder is installed by this crate.

pub mod counters;
pub mod histograms;
pub mod labels;
