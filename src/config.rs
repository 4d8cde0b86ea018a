//! Registry configuration.
//!
//! Binds module event types to ABI event signatures and owner addresses.
//! Signatures may be written human-readable or as JSON ABI fragments:
//!
//! ```json
//! {
//!   "bindings": [
//!     {
//!       "event_type": "transfer",
//!       "owner": "0x93354845030274cd4bf1686abd60ab28ec52e1a7",
//!       "signature": "event Transfer(address indexed sender, address indexed recipient, uint256 amount)"
//!     }
//!   ]
//! }
//! ```

use std::path::Path;

use ethers::abi::Event;
use ethers::types::Address;
use serde::Deserialize;

use crate::abi::parse_event_signature;
use crate::error::{Result, TranslationError};

/// Top-level configuration file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RegistryConfig {
    #[serde(default)]
    pub bindings: Vec<EventBinding>,
}

/// One module event type mapped to an ABI event.
#[derive(Debug, Clone, Deserialize)]
pub struct EventBinding {
    /// Module event type, e.g. `delegate`.
    pub event_type: String,
    /// Address of the precompile standing in for the module.
    pub owner: Address,
    pub signature: EventSignature,
}

/// Event signature as written in the configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum EventSignature {
    /// `event Name(type indexed name, ...)`
    HumanReadable(String),
    /// JSON ABI event fragment.
    Fragment(Event),
}

impl EventSignature {
    /// Parse into an ABI event.
    pub fn to_event(&self) -> Result<Event> {
        match self {
            EventSignature::HumanReadable(s) => parse_event_signature(s),
            EventSignature::Fragment(event) => Ok(event.clone()),
        }
    }
}

impl RegistryConfig {
    /// Parse a JSON configuration document.
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| TranslationError::Config(e.to_string()))
    }

    /// Read and parse a JSON configuration file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .map_err(|e| TranslationError::Config(format!("{}: {}", path.display(), e)))?;
        Self::from_json_str(&raw)
    }
}
