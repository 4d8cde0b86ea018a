//! # precompile-log
//!
//! Translate Cosmos module events into Ethereum logs.
//!
//! A stateful precompile wraps a Cosmos module. When the module emits an
//! event (a type name plus ordered `key=value` string attributes), the EVM
//! side needs a log shaped like the precompile's Solidity event: the event
//! id and up to three indexed arguments as topics, the remaining arguments
//! ABI-encoded as data.
//!
//! ## Quick Start
//!
//! ```rust
//! use precompile_log::{EventRegistry, SourceEvent, parse_event_signature};
//! use ethers::types::Address;
//!
//! let mut registry = EventRegistry::with_cosmos_defaults();
//! let transfer = parse_event_signature(
//!     "event Transfer(address indexed sender, address indexed recipient, uint256 amount)",
//! ).unwrap();
//! registry.register("transfer", Address::from_low_u64_be(0x69), &transfer).unwrap();
//!
//! let event = SourceEvent::new("transfer")
//!     .with_attribute("recipient", "0x00000000000000000000000000000000000000bb")
//!     .with_attribute("sender", "0x00000000000000000000000000000000000000aa")
//!     .with_attribute("amount", "100stake");
//!
//! let log = registry.translate(&event).unwrap();
//! assert_eq!(log.topics.len(), 3);
//! assert_eq!(log.data.len(), 32);
//! ```
//!
//! ## Failure model
//!
//! Translation is all-or-nothing: a missing attribute, an unknown decoder
//! key, a value that fails to decode, or a value that does not fit its ABI
//! type aborts the log with a [`TranslationError`].

// Module declarations
pub mod abi;
pub mod config;
pub mod decoders;
pub mod error;
pub mod event;
pub mod registry;
pub mod types;
pub mod utils;

// Re-export core functionality
pub use abi::{parse_event_signature, split_arguments, MAX_INDEXED_ARGUMENTS};
pub use config::{EventBinding, EventSignature, RegistryConfig};
pub use decoders::cosmos_defaults;
pub use event::{search_attributes, DecodeResult, DecoderTable, EventDescriptor, ValueDecoder};
pub use registry::EventRegistry;

// Re-export types
pub use error::{DecodeFailure, Result, TranslationError};
pub use types::{Attribute, Log, SourceEvent};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Maximum number of topics on a log (event id plus three indexed arguments).
pub const MAX_TOPICS: usize = MAX_INDEXED_ARGUMENTS + 1;
