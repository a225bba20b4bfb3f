//! Histogram metrics

use super::labels;

/// Record the fragment count of an encoded connection string
pub fn descriptor_fragments(count: usize) {
    let histogram = ::metrics::histogram!(labels::DESCRIPTOR_FRAGMENTS);
    histogram.record(count as f64);
}
