//! Default decoders for well-known module attribute keys.
//!
//! The table returned by [`cosmos_defaults`] is built once at startup and
//! shared read-only by every translation. The primitive decoders are public
//! so precompiles can reuse them in their own overrides.

use ethers::abi::Token;
use ethers::types::{Address, U256};

use crate::error::DecodeFailure;
use crate::event::decoder::{DecodeResult, DecoderTable};

/// Attribute keys whose value is a token amount (`100` or `100stake`).
pub const AMOUNT_KEYS: &[&str] = &["amount", "value", "shares", "new_shares"];

/// Attribute keys whose value is an account or validator address.
pub const ADDRESS_KEYS: &[&str] = &[
    "sender",
    "recipient",
    "receiver",
    "spender",
    "minter",
    "burner",
    "delegator",
    "validator",
    "source_validator",
    "destination_validator",
    "withdraw_address",
    "owner",
    "from",
    "to",
];

/// Attribute keys whose value is a block height.
pub const HEIGHT_KEYS: &[&str] = &["creation_height", "height"];

/// Attribute keys passed through as strings.
pub const STRING_KEYS: &[&str] = &["denom", "memo", "completion_time"];

/// Attribute keys holding boolean flags.
pub const BOOL_KEYS: &[&str] = &["approved", "success"];

/// Attribute keys holding 32-byte hashes.
pub const HASH_KEYS: &[&str] = &["tx_hash", "hash"];

/// Build the default decoder table for standard module attributes.
pub fn cosmos_defaults() -> DecoderTable {
    let mut table = DecoderTable::new();
    for key in AMOUNT_KEYS {
        table.insert(*key, coin_amount);
    }
    for key in ADDRESS_KEYS {
        table.insert(*key, address);
    }
    for key in HEIGHT_KEYS {
        table.insert(*key, uint256);
    }
    for key in STRING_KEYS {
        table.insert(*key, string);
    }
    for key in BOOL_KEYS {
        table.insert(*key, boolean);
    }
    for key in HASH_KEYS {
        table.insert(*key, bytes32);
    }
    table
}

/// Unsigned integer from a decimal string, or `0x`-prefixed hex.
pub fn uint256(value: &str) -> DecodeResult {
    parse_u256(value).map(Token::Uint)
}

/// Signed integer from a decimal string, encoded as 256-bit two's complement.
pub fn int256(value: &str) -> DecodeResult {
    let value = value.trim();
    let (negative, digits) = match value.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, value.strip_prefix('+').unwrap_or(value)),
    };
    let magnitude = parse_decimal(digits)?;

    // |int256::MIN| = 2^255 is the only magnitude with the top bit set.
    let limit = U256::one() << 255;
    if magnitude > limit || (!negative && magnitude == limit) {
        return Err(DecodeFailure::new(format!("{} overflows int256", value)));
    }
    let word = if negative {
        (!magnitude).overflowing_add(U256::one()).0
    } else {
        magnitude
    };
    Ok(Token::Int(word))
}

/// Amount from a plain integer or a single coin string such as `100stake`.
///
/// The denomination is dropped; only the amount is encoded.
pub fn coin_amount(value: &str) -> DecodeResult {
    let value = value.trim();
    if value.contains(',') {
        return Err(DecodeFailure::new(format!(
            "expected a single coin, got {}",
            value
        )));
    }
    let split = value
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(value.len());
    let (amount, denom) = value.split_at(split);
    if !denom.is_empty() && !is_valid_denom(denom) {
        return Err(DecodeFailure::new(format!("invalid coin denomination in {}", value)));
    }
    parse_decimal(amount).map(Token::Uint)
}

/// Address from a bech32 account or validator string (`cosmos1…`,
/// `cosmosvaloper1…`), or from a 20-byte hex string.
///
/// Any human-readable prefix is accepted; only the payload length is checked.
pub fn address(value: &str) -> DecodeResult {
    let value = value.trim();
    let raw = if value.starts_with("0x") || value.starts_with("0X") {
        decode_hex(value)?
    } else {
        match bech32::decode(value) {
            Ok((_, payload)) => payload,
            Err(bech32_err) => decode_hex(value).map_err(|_| {
                DecodeFailure::new(format!(
                    "not a bech32 or hex address {}: {}",
                    value, bech32_err
                ))
            })?,
        }
    };
    if raw.len() != Address::len_bytes() {
        return Err(DecodeFailure::new(format!(
            "address must be 20 bytes, got {}",
            raw.len()
        )));
    }
    Ok(Token::Address(Address::from_slice(&raw)))
}

/// Boolean from `true`/`false`/`1`/`0` (case-insensitive).
pub fn boolean(value: &str) -> DecodeResult {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" => Ok(Token::Bool(true)),
        "false" | "0" => Ok(Token::Bool(false)),
        other => Err(DecodeFailure::new(format!("not a boolean: {}", other))),
    }
}

/// The attribute value verbatim.
pub fn string(value: &str) -> DecodeResult {
    Ok(Token::String(value.to_string()))
}

/// 32-byte value from a hex string.
pub fn bytes32(value: &str) -> DecodeResult {
    let raw = decode_hex(value)?;
    if raw.len() != 32 {
        return Err(DecodeFailure::new(format!(
            "bytes32 must be 32 bytes, got {}",
            raw.len()
        )));
    }
    Ok(Token::FixedBytes(raw))
}

/// Dynamic bytes from a hex string.
pub fn bytes(value: &str) -> DecodeResult {
    decode_hex(value).map(Token::Bytes)
}

fn parse_u256(value: &str) -> Result<U256, DecodeFailure> {
    let value = value.trim();
    match value.strip_prefix("0x").or_else(|| value.strip_prefix("0X")) {
        Some(digits) => {
            if digits.is_empty() || digits.len() > 64 {
                return Err(DecodeFailure::new(format!("invalid hex integer {}", value)));
            }
            U256::from_str_radix(digits, 16)
                .map_err(|e| DecodeFailure::new(format!("invalid hex integer {}: {}", value, e)))
        }
        None => parse_decimal(value),
    }
}

fn parse_decimal(digits: &str) -> Result<U256, DecodeFailure> {
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(DecodeFailure::new(format!("not a decimal integer: {:?}", digits)));
    }
    U256::from_dec_str(digits)
        .map_err(|e| DecodeFailure::new(format!("invalid integer {}: {}", digits, e)))
}

fn decode_hex(value: &str) -> Result<Vec<u8>, DecodeFailure> {
    let value = value.trim();
    let digits = value
        .strip_prefix("0x")
        .or_else(|| value.strip_prefix("0X"))
        .unwrap_or(value);
    hex::decode(digits).map_err(|e| DecodeFailure::new(format!("invalid hex {}: {}", value, e)))
}

// Module denominations: `[a-zA-Z][a-zA-Z0-9/:._-]{2,127}`.
fn is_valid_denom(denom: &str) -> bool {
    if !(3..=128).contains(&denom.len()) {
        return false;
    }
    let mut chars = denom.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || "/:._-".contains(c))
}
