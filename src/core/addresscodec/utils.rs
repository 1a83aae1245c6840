//! This module contains commonly-used constants and the base58 codec
//! shared by classic-address and X-address encoding.

use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;
use bs58::Alphabet;

use super::exceptions::XRPLAddressCodecException;

/// The dictionary used for XRPL base58 encodings
/// Sourced from the [`bs58`] crate.
///
/// [`bs58`]: bs58::Alphabet
pub const XRPL_ALPHABET: Alphabet = *bs58::Alphabet::RIPPLE;

/// base58 encodings: `<https://xrpl.org/base58-encodings.html>`
/// Account address (20 bytes)
pub const CLASSIC_ADDRESS_PREFIX: [u8; 1] = [0x0];

pub const CLASSIC_ADDRESS_LENGTH: u8 = 20;
pub const CLASSIC_ADDRESS_ID_LENGTH: usize = 20;

/// `[0x05, 0x44]`
pub const ADDRESS_PREFIX_BYTES_MAIN: [u8; 2] = [0x05, 0x44];
/// `[0x04, 0x93]`
pub const ADDRESS_PREFIX_BYTES_TEST: [u8; 2] = [0x04, 0x93];

/// Returns the base58 encoding of the bytestring, with the
/// given data prefix (which indicates type) and while
/// ensuring the bytestring is the expected length.
///
/// See [`bs58::encode`]
///
/// [`bs58::encode`]: bs58::encode
pub fn encode_base58(
    bytestring: &[u8],
    prefix: &[u8],
    expected_length: Option<usize>,
) -> Result<String, XRPLAddressCodecException> {
    if expected_length != Some(bytestring.len()) {
        Err(XRPLAddressCodecException::UnexpectedPayloadLength {
            expected: expected_length.unwrap_or_default(),
            found: bytestring.len(),
        })
    } else {
        let mut payload = vec![];

        payload.extend_from_slice(prefix);
        payload.extend_from_slice(bytestring);

        Ok(bs58::encode(payload)
            .with_alphabet(&XRPL_ALPHABET)
            .with_check()
            .into_string())
    }
}

/// Returns the byte decoding of the base58-encoded string.
///
/// See [`bs58::decode`]
///
/// [`bs58::decode`]: bs58::decode
pub fn decode_base58(
    b58_string: &str,
    prefix: &[u8],
) -> Result<Vec<u8>, XRPLAddressCodecException> {
    let prefix_len = prefix.len();
    let decoded = bs58::decode(b58_string)
        .with_alphabet(&XRPL_ALPHABET)
        .with_check(None)
        .into_vec()?;

    if &decoded[..prefix_len] != prefix {
        Err(XRPLAddressCodecException::InvalidEncodingPrefixLength)
    } else {
        Ok(decoded[prefix_len..].to_vec())
    }
}
