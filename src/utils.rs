//! Hashing and word-padding helpers shared by the topic and data builders.

use sha3::{Digest, Keccak256};

/// Size of one ABI word.
pub const WORD_SIZE: usize = 32;

/// Keccak-256 hash helper.
pub fn keccak256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Keccak256::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// Copy `bytes` into the low-order end of a word (numbers, addresses).
///
/// Returns `None` if the input is longer than a word.
pub fn left_pad_32(bytes: &[u8]) -> Option<[u8; 32]> {
    if bytes.len() > WORD_SIZE {
        return None;
    }
    let mut word = [0u8; 32];
    word[WORD_SIZE - bytes.len()..].copy_from_slice(bytes);
    Some(word)
}

/// Copy `bytes` into the high-order end of a word (`bytesN`).
pub fn right_pad_32(bytes: &[u8]) -> Option<[u8; 32]> {
    if bytes.len() > WORD_SIZE {
        return None;
    }
    let mut word = [0u8; 32];
    word[..bytes.len()].copy_from_slice(bytes);
    Some(word)
}

/// Zero-extend `bytes` to the next multiple of the word size.
pub fn pad_to_words(bytes: &[u8]) -> Vec<u8> {
    let padded_len = bytes.len().div_ceil(WORD_SIZE) * WORD_SIZE;
    let mut out = Vec::with_capacity(padded_len);
    out.extend_from_slice(bytes);
    out.resize(padded_len, 0);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keccak256_empty() {
        // keccak256("") is a well-known constant
        assert_eq!(
            hex::encode(keccak256(b"")),
            "c5d2460186f7233c927e7db2dcc703c0e500b653ca82273b7bfad8045d85a470"
        );
    }

    #[test]
    fn test_transfer_event_id() {
        assert_eq!(
            hex::encode(keccak256(b"Transfer(address,address,uint256)")),
            "ddf252ad1be2c89b69c2b068fc378daa952ba7f163c4a11628f55a4df523b3ef"
        );
    }

    #[test]
    fn test_padding() {
        let left = left_pad_32(&[0xAB]).unwrap();
        assert_eq!(left[31], 0xAB);
        assert_eq!(left[..31], [0u8; 31]);

        let right = right_pad_32(&[0xAB]).unwrap();
        assert_eq!(right[0], 0xAB);
        assert_eq!(right[1..], [0u8; 31]);

        assert!(left_pad_32(&[0u8; 33]).is_none());
        assert!(right_pad_32(&[0u8; 33]).is_none());
    }

    #[test]
    fn test_pad_to_words() {
        assert!(pad_to_words(&[]).is_empty());
        assert_eq!(pad_to_words(&[1]).len(), 32);
        assert_eq!(pad_to_words(&[1u8; 32]).len(), 32);
        assert_eq!(pad_to_words(&[1u8; 33]).len(), 64);
    }
}
