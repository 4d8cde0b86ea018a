//! Error types for event translation.
//!
//! Every failure is returned to the caller of the translation entry points;
//! nothing is retried or swallowed inside the crate.

use thiserror::Error;

/// Errors that can occur while turning a module event into an Ethereum log.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TranslationError {
    /// The source event carries fewer attributes than the descriptor has arguments.
    #[error("not enough event attributes provided for event {event_type}: {required} required, {provided} provided")]
    InsufficientAttributes {
        event_type: String,
        required: usize,
        provided: usize,
    },
    /// No attribute key matches a required argument name.
    #[error("no attribute key found for event {event_type} argument {argument}")]
    MissingAttribute { event_type: String, argument: String },
    /// Neither the descriptor overrides nor the default table can decode this key.
    #[error("event attribute key {0} is not mapped to a value decoder function")]
    NoDecoderForKey(String),
    /// A decoder exists but the attribute value did not parse.
    #[error("failed to decode value of attribute {key}: {cause}")]
    DecodeError { key: String, cause: DecodeFailure },
    /// The decoded values do not fit the ABI argument types.
    #[error("abi encoding failed: {0}")]
    Encoding(String),
    /// An event signature declares more indexed arguments than there are topic slots.
    #[error("event {event} declares {count} indexed arguments (max 3)")]
    TooManyIndexed { event: String, count: usize },
    /// An event signature could not be parsed or is unusable.
    #[error("invalid event signature: {0}")]
    InvalidSignature(String),
    /// No descriptor is registered for the source event type.
    #[error("no descriptor registered for event type {0}")]
    UnknownEventType(String),
    /// Registry configuration could not be read.
    #[error("invalid registry configuration: {0}")]
    Config(String),
}

/// Failure reported by a single value decoder.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{0}")]
pub struct DecodeFailure(pub String);

impl DecodeFailure {
    /// Build a failure from any displayable message.
    pub fn new(reason: impl Into<String>) -> Self {
        Self(reason.into())
    }
}

/// Result type alias for translation operations.
pub type Result<T> = core::result::Result<T, TranslationError>;
