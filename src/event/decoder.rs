//! Attribute value decoders.
//!
//! Decoders are keyed by attribute key, not by argument position or type.
//! A descriptor's overrides are consulted first, then the shared default table.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use ethers::abi::Token;

use crate::error::{DecodeFailure, Result, TranslationError};

/// Outcome of decoding one attribute value.
pub type DecodeResult = core::result::Result<Token, DecodeFailure>;

/// Parses one attribute value string into an ABI value.
///
/// Implementations must be deterministic and free of side effects.
pub trait ValueDecoder: Send + Sync {
    /// Decode `value` into a token.
    fn decode(&self, value: &str) -> DecodeResult;
}

impl<F> ValueDecoder for F
where
    F: Fn(&str) -> DecodeResult + Send + Sync,
{
    fn decode(&self, value: &str) -> DecodeResult {
        self(value)
    }
}

/// Mapping from attribute key to decoder.
#[derive(Clone, Default)]
pub struct DecoderTable {
    decoders: HashMap<String, Arc<dyn ValueDecoder>>,
}

impl DecoderTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with<D>(mut self, key: impl Into<String>, decoder: D) -> Self
    where
        D: ValueDecoder + 'static,
    {
        self.insert(key, decoder);
        self
    }

    /// Map `key` to `decoder`, replacing any previous entry.
    pub fn insert<D>(&mut self, key: impl Into<String>, decoder: D)
    where
        D: ValueDecoder + 'static,
    {
        self.decoders.insert(key.into(), Arc::new(decoder));
    }

    /// Look up the decoder for `key`.
    pub fn get(&self, key: &str) -> Option<&dyn ValueDecoder> {
        self.decoders.get(key).map(|d| d.as_ref())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.decoders.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.decoders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.decoders.is_empty()
    }
}

impl fmt::Debug for DecoderTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut keys: Vec<&String> = self.decoders.keys().collect();
        keys.sort();
        f.debug_struct("DecoderTable").field("keys", &keys).finish()
    }
}

/// Find the decoder for `key`: overrides first, then defaults.
pub fn resolve<'a>(
    overrides: &'a DecoderTable,
    defaults: &'a DecoderTable,
    key: &str,
) -> Result<&'a dyn ValueDecoder> {
    overrides
        .get(key)
        .or_else(|| defaults.get(key))
        .ok_or_else(|| TranslationError::NoDecoderForKey(key.to_string()))
}

/// Resolve and run the decoder for one attribute.
pub fn decode_attribute(
    overrides: &DecoderTable,
    defaults: &DecoderTable,
    key: &str,
    value: &str,
) -> Result<Token> {
    let decoder = resolve(overrides, defaults, key)?;
    decoder
        .decode(value)
        .map_err(|cause| TranslationError::DecodeError {
            key: key.to_string(),
            cause,
        })
}
