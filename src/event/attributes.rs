//! Attribute lookup by argument name.

use crate::types::Attribute;

/// Return the index of the first attribute whose key equals `name`.
///
/// Duplicate keys are allowed; the earliest one wins.
pub fn search_attributes(attributes: &[Attribute], name: &str) -> Option<usize> {
    attributes.iter().position(|attr| attr.key == name)
}
