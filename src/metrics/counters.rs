//! Counter metrics

use super::labels;
use crate::descriptor::Compatibility;

/// Record one encoded connection string
pub fn descriptor_encoded(compatibility: Compatibility) {
    let mode = match compatibility {
        Compatibility::Standard => labels::COMPATIBILITY_STANDARD,
        Compatibility::Legacy => labels::COMPATIBILITY_LEGACY,
    };
    let counter = ::metrics::counter!(labels::DESCRIPTORS_ENCODED, labels::COMPATIBILITY => mode);
    counter.increment(1);
}
