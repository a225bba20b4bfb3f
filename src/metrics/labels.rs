//! Metric names and label keys

/// Connection strings encoded
pub const DESCRIPTORS_ENCODED: &str = "sqlbuilder_mysql_descriptors_encoded_total";

/// Fragments per encoded connection string
pub const DESCRIPTOR_FRAGMENTS: &str = "sqlbuilder_mysql_descriptor_fragments";

/// Compatibility mode label key
pub const COMPATIBILITY: &str = "compatibility";

/// Standard compatibility label value
pub const COMPATIBILITY_STANDARD: &str = "standard";

/// Legacy compatibility label value
pub const COMPATIBILITY_LEGACY: &str = "legacy";
