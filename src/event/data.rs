//! Non-indexed argument packing.

use ethers::abi::{self, EventParam, Token};

use crate::abi::check_token;
use crate::error::{Result, TranslationError};

/// ABI-encode `values` as the tuple described by `params`.
///
/// Values must line up one-to-one with `params` and match their types.
pub fn pack_values(params: &[EventParam], values: &[Token]) -> Result<Vec<u8>> {
    if params.len() != values.len() {
        return Err(TranslationError::Encoding(format!(
            "argument count mismatch: expected {}, got {}",
            params.len(),
            values.len()
        )));
    }
    for (param, value) in params.iter().zip(values) {
        check_token(&param.kind, value)?;
    }
    Ok(abi::encode(values))
}
