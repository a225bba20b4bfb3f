//! Connection string encoding
//!
//! This module handles:
//! * The option table (key, emission rule, and default per option)
//! * Fragment emission in declaration order
//! * Historical compatibility quirks

mod encode;
pub(crate) mod rules;

pub use encode::{
    ambiguous_keys, encode_descriptor, encode_descriptor_with, fragments, option_keys,
    Compatibility, Fragment, FRAGMENT_SEPARATOR, KEY_VALUE_SEPARATOR,
};
pub(crate) use encode::write_descriptor;
