//! Core types on both sides of the translation.
//!
//! [`SourceEvent`] is what the module runtime emits; [`Log`] is what the
//! execution layer appends to its receipts.

use ethers::types::{Address, H256};
use serde::{Deserialize, Serialize};

/// A single `key=value` attribute of a module event.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
    pub key: String,
    pub value: String,
}

impl Attribute {
    /// Create a new attribute.
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// An event emitted by a module while processing a transaction.
///
/// Attribute order is whatever the module chose; keys may repeat.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceEvent {
    /// Module event type, e.g. `transfer` or `delegate`.
    #[serde(rename = "type")]
    pub event_type: String,
    pub attributes: Vec<Attribute>,
}

impl SourceEvent {
    /// Create an event with no attributes.
    pub fn new(event_type: impl Into<String>) -> Self {
        Self {
            event_type: event_type.into(),
            attributes: Vec::new(),
        }
    }

    /// Append an attribute, keeping insertion order.
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push(Attribute::new(key, value));
        self
    }

    /// Number of attributes carried by the event.
    pub fn num_attributes(&self) -> usize {
        self.attributes.len()
    }
}

/// Ethereum-formatted log produced from one [`SourceEvent`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Log {
    /// Address standing in for the emitting module.
    pub address: Address,
    /// Event id followed by up to three indexed argument topics.
    pub topics: Vec<H256>,
    /// ABI-encoded non-indexed arguments.
    pub data: Vec<u8>,
}

impl Log {
    /// Convert into the `ethers` log type expected by EVM receipt builders.
    ///
    /// Block and transaction fields are left empty for the sink to fill.
    pub fn into_ethers_log(self) -> ethers::types::Log {
        ethers::types::Log {
            address: self.address,
            topics: self.topics,
            data: self.data.into(),
            ..Default::default()
        }
    }
}
