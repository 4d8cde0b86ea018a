//! Indexed argument topic encoding.
//!
//! Value types (address, integers, bool, `bytesN`) become their 32-byte word.
//! `string` and `bytes` become the keccak256 of their contents. Arrays and
//! tuples become the keccak256 of their in-place encoding: each element
//! padded to whole words, with no length or offset words.

use ethers::abi::Token;
use ethers::types::H256;

use crate::error::{Result, TranslationError};
use crate::utils::{keccak256, left_pad_32, pad_to_words, right_pad_32};

/// Build the topic list `[id, topic(v1), ...]` for already-decoded indexed values.
pub fn build_topics(id: H256, indexed_values: &[Token]) -> Result<Vec<H256>> {
    let mut topics = Vec::with_capacity(indexed_values.len() + 1);
    topics.push(id);
    for value in indexed_values {
        topics.push(encode_topic(value)?);
    }
    Ok(topics)
}

/// Encode a single indexed value as a topic.
pub fn encode_topic(value: &Token) -> Result<H256> {
    let word = match value {
        Token::String(s) => keccak256(s.as_bytes()),
        Token::Bytes(b) => keccak256(b),
        Token::Array(items) | Token::FixedArray(items) | Token::Tuple(items) => {
            let mut encoded = Vec::with_capacity(items.len() * 32);
            for item in items {
                encode_in_place(item, &mut encoded)?;
            }
            keccak256(&encoded)
        }
        _ => static_word(value)?,
    };
    Ok(H256::from(word))
}

fn encode_in_place(value: &Token, out: &mut Vec<u8>) -> Result<()> {
    match value {
        Token::String(s) => out.extend_from_slice(&pad_to_words(s.as_bytes())),
        Token::Bytes(b) => out.extend_from_slice(&pad_to_words(b)),
        Token::Array(items) | Token::FixedArray(items) | Token::Tuple(items) => {
            for item in items {
                encode_in_place(item, out)?;
            }
        }
        _ => out.extend_from_slice(&static_word(value)?),
    }
    Ok(())
}

fn static_word(value: &Token) -> Result<[u8; 32]> {
    let word = match value {
        Token::Address(addr) => left_pad_32(addr.as_bytes()),
        Token::Uint(n) | Token::Int(n) => {
            // Int is already two's complement across 256 bits.
            let mut word = [0u8; 32];
            n.to_big_endian(&mut word);
            Some(word)
        }
        Token::Bool(b) => left_pad_32(&[*b as u8]),
        Token::FixedBytes(b) => right_pad_32(b),
        _ => None,
    };
    word.ok_or_else(|| TranslationError::Encoding(format!("cannot encode {} as a topic word", value)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ethers::types::{Address, U256};

    #[test]
    fn test_id_is_first_topic() {
        let id = H256::repeat_byte(0x42);
        let topics = build_topics(id, &[]).unwrap();
        assert_eq!(topics, vec![id]);
    }

    #[test]
    fn test_address_left_padded() {
        let addr = Address::repeat_byte(0xAA);
        let topic = encode_topic(&Token::Address(addr)).unwrap();

        assert_eq!(&topic.as_bytes()[..12], &[0u8; 12]);
        assert_eq!(&topic.as_bytes()[12..], addr.as_bytes());
    }

    #[test]
    fn test_uint_and_bool() {
        let topic = encode_topic(&Token::Uint(U256::from(100))).unwrap();
        assert_eq!(topic.to_low_u64_be(), 100);

        let topic = encode_topic(&Token::Bool(true)).unwrap();
        assert_eq!(topic.to_low_u64_be(), 1);
    }

    #[test]
    fn test_negative_int_is_sign_extended() {
        let minus_one = U256::MAX;
        let topic = encode_topic(&Token::Int(minus_one)).unwrap();
        assert_eq!(topic, H256::repeat_byte(0xFF));
    }

    #[test]
    fn test_fixed_bytes_right_padded() {
        let topic = encode_topic(&Token::FixedBytes(vec![0xDE, 0xAD])).unwrap();
        assert_eq!(&topic.as_bytes()[..2], &[0xDE, 0xAD]);
        assert_eq!(&topic.as_bytes()[2..], &[0u8; 30]);
    }

    #[test]
    fn test_dynamic_values_are_hashed() {
        let topic = encode_topic(&Token::String("stake".into())).unwrap();
        assert_eq!(topic, H256::from(keccak256(b"stake")));

        let topic = encode_topic(&Token::Bytes(vec![1, 2, 3])).unwrap();
        assert_eq!(topic, H256::from(keccak256(&[1, 2, 3])));
    }

    #[test]
    fn test_array_hashes_in_place_encoding() {
        let array = Token::Array(vec![Token::Uint(U256::from(1)), Token::Uint(U256::from(2))]);
        let mut expected = [0u8; 64];
        expected[31] = 1;
        expected[63] = 2;

        assert_eq!(encode_topic(&array).unwrap(), H256::from(keccak256(&expected)));
    }

    #[test]
    fn test_string_inside_array_is_padded() {
        let array = Token::Array(vec![Token::String("ab".into())]);
        let mut expected = [0u8; 32];
        expected[..2].copy_from_slice(b"ab");

        assert_eq!(encode_topic(&array).unwrap(), H256::from(keccak256(&expected)));
    }

    #[test]
    fn test_oversized_fixed_bytes_rejected() {
        let result = encode_topic(&Token::FixedBytes(vec![0u8; 33]));
        assert!(matches!(result, Err(TranslationError::Encoding(_))));
    }
}
