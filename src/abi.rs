//! ABI event signature loading.
//!
//! Accepts either a human-readable signature
//! (`event Transfer(address indexed from, uint256 amount)`) or a JSON ABI
//! event fragment, and splits the parsed argument list into topic and data
//! arguments.

use ethers::abi::{AbiParser, Event, EventParam, ParamType, Token};

use crate::error::{Result, TranslationError};

/// Topic slots available to indexed arguments (slot 0 holds the event id).
pub const MAX_INDEXED_ARGUMENTS: usize = 3;

/// Parse an event signature in human-readable or JSON form.
pub fn parse_event_signature(signature: &str) -> Result<Event> {
    let signature = signature.trim();
    if signature.starts_with('{') {
        return serde_json::from_str(signature)
            .map_err(|e| TranslationError::InvalidSignature(format!("{}: {}", signature, e)));
    }

    let normalized = if signature.starts_with("event ") {
        signature.to_string()
    } else {
        format!("event {}", signature)
    };
    AbiParser::default()
        .parse_event(&normalized)
        .map_err(|e| TranslationError::InvalidSignature(format!("{}: {}", signature, e)))
}

/// Split an event's inputs into `(indexed, non_indexed)`, preserving declaration order.
///
/// Fails if the event is anonymous or has more indexed inputs than topic slots.
pub fn split_arguments(event: &Event) -> Result<(Vec<EventParam>, Vec<EventParam>)> {
    if event.anonymous {
        return Err(TranslationError::InvalidSignature(format!(
            "anonymous event {} has no identifier topic",
            event.name
        )));
    }

    let (indexed, non_indexed): (Vec<EventParam>, Vec<EventParam>) =
        event.inputs.iter().cloned().partition(|p| p.indexed);

    if indexed.len() > MAX_INDEXED_ARGUMENTS {
        return Err(TranslationError::TooManyIndexed {
            event: event.name.clone(),
            count: indexed.len(),
        });
    }
    Ok((indexed, non_indexed))
}

/// Check that a decoded value can be encoded as the declared argument type.
pub fn check_token(kind: &ParamType, token: &Token) -> Result<()> {
    if !token.type_check(kind) {
        return Err(TranslationError::Encoding(format!(
            "value {} does not match type {}",
            token, kind
        )));
    }
    check_width(kind, token)
}

// Integer widths, applied recursively through arrays and tuples.
fn check_width(kind: &ParamType, token: &Token) -> Result<()> {
    match (kind, token) {
        (ParamType::Uint(bits), Token::Uint(value)) => {
            if value.bits() > *bits {
                return Err(TranslationError::Encoding(format!(
                    "value {} overflows uint{}",
                    value, bits
                )));
            }
        }
        (ParamType::Int(bits), Token::Int(word)) => {
            // Two's complement: a negative word fits intN when its complement does.
            let magnitude = if word.bit(255) { !*word } else { *word };
            if magnitude.bits() >= *bits {
                return Err(TranslationError::Encoding(format!(
                    "value {:#x} overflows int{}",
                    word, bits
                )));
            }
        }
        (ParamType::Array(inner), Token::Array(items))
        | (ParamType::FixedArray(inner, _), Token::FixedArray(items)) => {
            for item in items {
                check_width(inner, item)?;
            }
        }
        (ParamType::Tuple(kinds), Token::Tuple(items)) => {
            for (kind, item) in kinds.iter().zip(items) {
                check_width(kind, item)?;
            }
        }
        _ => {}
    }
    Ok(())
}
