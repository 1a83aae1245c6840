//! Hashing primitives the binary codec relies on for transaction and
//! signing-claim identifiers.
//!
//! Key generation and signing themselves are external collaborators
//! (see the crate's scope notes); this module only exposes the SHA-512
//! derivatives the codec and its callers need.

pub mod exceptions;
pub mod utils;

use alloc::vec::Vec;

pub use self::utils::{get_account_id, sha512_first_half};

/// Prefix rippled prepends to a signed transaction blob before hashing
/// it to obtain the transaction's ID.
const TRANSACTION_ID_PREFIX: [u8; 4] = [0x54, 0x58, 0x4E, 0x00];

/// `sha512Half`: the first 32 bytes of the SHA-512 digest of `message`.
///
/// This is the hash rippled uses everywhere a "half-SHA-512" is called
/// for -- ledger hashes, transaction hashes, signing hashes.
pub fn sha512_half(message: &[u8]) -> [u8; 32] {
    sha512_first_half(message)
}

/// Compute the canonical transaction ID for a serialized (signed)
/// transaction blob: `sha512Half([0x54, 0x58, 0x4E, 0x00] || bytes)`.
pub fn transaction_id(serialized_transaction: &[u8]) -> [u8; 32] {
    let mut prefixed = Vec::with_capacity(TRANSACTION_ID_PREFIX.len() + serialized_transaction.len());
    prefixed.extend_from_slice(&TRANSACTION_ID_PREFIX);
    prefixed.extend_from_slice(serialized_transaction);
    sha512_half(&prefixed)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_sha512_half_is_32_bytes() {
        assert_eq!(32, sha512_half(b"Hello World!").len());
    }

    #[test]
    fn test_transaction_id_is_deterministic() {
        let a = transaction_id(&[0x01, 0x02, 0x03]);
        let b = transaction_id(&[0x01, 0x02, 0x03]);
        assert_eq!(a, b);
    }
}
