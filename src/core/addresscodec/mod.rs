//! Base58-with-checksum codec for XRPL classic addresses and X-Addresses.
//!
//! General format of an X-Address:
//! `[← 2 byte prefix →|← 160 bits of account ID →|← 8 bits of flags →|← 64 bits of tag →]`
//! See `<https://github.com/xrp-community/standards-drafts/issues/6>`.

pub mod exceptions;
#[cfg(test)]
pub mod test_cases;
pub mod utils;

use crate::core::addresscodec::exceptions::XRPLAddressCodecException;
use crate::core::addresscodec::utils::*;
use alloc::string::String;
use alloc::vec::Vec;

use super::exceptions::XRPLCoreResult;

/// Returns whether a decoded X-Address is a test address.
fn _is_test_address(prefix: &[u8]) -> XRPLCoreResult<bool> {
    if ADDRESS_PREFIX_BYTES_MAIN == prefix {
        Ok(false)
    } else if ADDRESS_PREFIX_BYTES_TEST == prefix {
        Ok(true)
    } else {
        Err(XRPLAddressCodecException::InvalidXAddressPrefix.into())
    }
}

/// Returns the destination tag extracted from the suffix
/// of the X-Address.
fn _get_tag_from_buffer(buffer: &[u8]) -> XRPLCoreResult<Option<u64>> {
    let flag = &buffer[0];

    if flag >= &2 {
        Err(XRPLAddressCodecException::UnsupportedXAddress.into())
    } else if flag == &1 {
        // Little-endian to big-endian
        Ok(Some(
            buffer[1] as u64
                + buffer[2] as u64 * 0x100
                + buffer[3] as u64 * 0x10000
                + buffer[4] as u64 * 0x1000000,
        ))
        // inverse of what happens in encode
    } else if flag != &0 {
        Err(XRPLAddressCodecException::InvalidXAddressZeroNoTag.into())
    } else if hex::decode("0000000000000000")? != buffer[1..9] {
        Err(XRPLAddressCodecException::InvalidXAddressZeroRemain.into())
    } else {
        Ok(None)
    }
}

/// Returns the X-Address representation of the data.
///
/// # Examples
///
/// ## Basic usage
///
/// ```
/// use xrpl::core::addresscodec::classic_address_to_xaddress;
/// use xrpl::core::addresscodec::exceptions::XRPLAddressCodecException;
/// use xrpl::core::exceptions::XRPLCoreException;
///
/// let classic_address: &str = "r9cZA1mLK5R5Am25ArfXFmqgNwjZgnfk59".into();
/// let tag: Option<u64> = None;
/// let is_test_network: bool = false;
/// let xaddress: String = "X7AcgcsBL6XDcUb289X4mJ8djcdyKaB5hJDWMArnXr61cqZ".into();
///
/// let conversion: Option<String> = match classic_address_to_xaddress(
///         classic_address,
///         tag,
///         is_test_network
/// ) {
///     Ok(address) => Some(address),
///     Err(e) => match e {
///         XRPLCoreException::XRPLAddressCodecError(XRPLAddressCodecException::InvalidXAddressPrefix) => None,
///         XRPLCoreException::XRPLAddressCodecError(XRPLAddressCodecException::UnsupportedXAddress) => None,
///         XRPLCoreException::XRPLAddressCodecError(XRPLAddressCodecException::InvalidXAddressZeroNoTag) => None,
///         XRPLCoreException::XRPLAddressCodecError(XRPLAddressCodecException::InvalidXAddressZeroRemain) => None,
///         XRPLCoreException::XRPLAddressCodecError(XRPLAddressCodecException::UnexpectedPayloadLength {
///             expected: _,
///             found: _,
///         }) => None,
///         _ => None,
///     }
/// };
///
/// assert_eq!(Some(xaddress), conversion);
/// ```
pub fn classic_address_to_xaddress(
    classic_address: &str,
    tag: Option<u64>,
    is_test_network: bool,
) -> XRPLCoreResult<String> {
    let classic_address_bytes = decode_classic_address(classic_address)?;
    let flag: bool = tag.is_some();
    let tag_val: u64;

    if classic_address_bytes.len() != CLASSIC_ADDRESS_ID_LENGTH {
        Err(XRPLAddressCodecException::InvalidCAddressIdLength {
            length: CLASSIC_ADDRESS_ID_LENGTH,
        }
        .into())
    } else if tag.is_some() && tag > Some(u32::MAX.into()) {
        Err(XRPLAddressCodecException::InvalidCAddressTag.into())
    } else {
        if let Some(tval) = tag {
            tag_val = tval;
        } else {
            tag_val = 0;
        }

        let mut bytestring = match is_test_network {
            true => ADDRESS_PREFIX_BYTES_TEST,
            false => ADDRESS_PREFIX_BYTES_MAIN,
        }
        .to_vec();

        bytestring.extend_from_slice(&classic_address_bytes);

        let encoded_tag = [
            flag as u8,
            (tag_val & 0xFF) as u8,
            (tag_val >> 8 & 0xFF) as u8,
            (tag_val >> 16 & 0xFF) as u8,
            (tag_val >> 24 & 0xFF) as u8,
            0,
            0,
            0,
            0,
        ];

        bytestring.extend_from_slice(&encoded_tag);

        Ok(bs58::encode(bytestring)
            .with_alphabet(&XRPL_ALPHABET)
            .with_check()
            .into_string())
    }
}

/// Returns a tuple containing the classic address, tag,
/// and whether the address is on a test network for an
/// X-Address.
///
/// # Examples
///
/// ## Basic usage
///
/// ```
/// use xrpl::core::addresscodec::xaddress_to_classic_address;
/// use xrpl::core::addresscodec::exceptions::XRPLAddressCodecException;
/// use xrpl::core::exceptions::XRPLCoreException;
///
/// let xaddress: &str = "X7AcgcsBL6XDcUb289X4mJ8djcdyKaB5hJDWMArnXr61cqZ";
/// let classic: (String, Option<u64>, bool) = (
///     "r9cZA1mLK5R5Am25ArfXFmqgNwjZgnfk59".into(),
///     None,
///     false,
/// );
///
/// let conversion: Option<(String, Option<u64>, bool)> = match xaddress_to_classic_address(xaddress) {
///     Ok((address, tag, is_test_network)) => Some((address, tag, is_test_network)),
///     Err(e) => match e {
///         XRPLCoreException::XRPLAddressCodecError(XRPLAddressCodecException::InvalidXAddressPrefix) => None,
///         XRPLCoreException::XRPLAddressCodecError(XRPLAddressCodecException::UnsupportedXAddress) => None,
///         XRPLCoreException::XRPLAddressCodecError(XRPLAddressCodecException::InvalidXAddressZeroNoTag) => None,
///         XRPLCoreException::XRPLAddressCodecError(XRPLAddressCodecException::InvalidXAddressZeroRemain) => None,
///         XRPLCoreException::XRPLAddressCodecError(XRPLAddressCodecException::UnexpectedPayloadLength {
///             expected: _,
///             found: _,
///         }) => None,
///         _ => None,
///     }
/// };
///
/// assert_eq!(Some(classic), conversion);
/// ```
pub fn xaddress_to_classic_address(xaddress: &str) -> XRPLCoreResult<(String, Option<u64>, bool)> {
    // Convert b58 to bytes
    let decoded = bs58::decode(xaddress)
        .with_alphabet(&XRPL_ALPHABET)
        .with_check(None)
        .into_vec()?;

    let is_test_network = _is_test_address(&decoded[..2])?;
    let classic_address_bytes = &decoded[2..22];
    // extracts the destination tag
    let tag = _get_tag_from_buffer(&decoded[22..])?;

    let classic_address = encode_classic_address(classic_address_bytes)?;
    Ok((classic_address, tag, is_test_network))
}

/// Returns the classic address encoding of these bytes
/// as a base58 string.
///
/// # Examples
///
/// ## Basic usage
///
/// ```
/// use xrpl::core::addresscodec::encode_classic_address;
/// use xrpl::core::addresscodec::exceptions::XRPLAddressCodecException;
/// use xrpl::core::exceptions::XRPLCoreException;
///
/// let bytes: &[u8] = &[
///     94, 123, 17, 37, 35, 246, 141, 47, 94, 135, 157, 180,
///     234, 197, 28, 102, 152, 166, 147, 4
/// ];
/// let address: String = "r9cZA1mLK5R5Am25ArfXFmqgNwjZgnfk59".into();
///
/// let encoding: Option<String> = match encode_classic_address(bytes) {
///     Ok(address) => Some(address),
///     Err(e) => match e {
///         XRPLCoreException::XRPLAddressCodecError(XRPLAddressCodecException::UnexpectedPayloadLength {
///             expected: _,
///             found: _,
///         }) => None,
///         _ => None,
///     }
/// };
///
/// assert_eq!(Some(address), encoding);
/// ```
pub fn encode_classic_address(bytestring: &[u8]) -> XRPLCoreResult<String> {
    Ok(encode_base58(
        bytestring,
        &CLASSIC_ADDRESS_PREFIX,
        Some(CLASSIC_ADDRESS_LENGTH.into()),
    )?)
}

/// Returns the decoded bytes of the classic address.
///
/// # Examples
///
/// ## Basic usage
///
/// ```
/// use xrpl::core::addresscodec::decode_classic_address;
/// use xrpl::core::addresscodec::exceptions::XRPLAddressCodecException;
/// use xrpl::core::exceptions::XRPLCoreException;
/// extern crate alloc;
/// use alloc::vec;
///
/// let key: &str = "r9cZA1mLK5R5Am25ArfXFmqgNwjZgnfk59";
/// let bytes: Vec<u8> = vec![
///     94, 123, 17, 37, 35, 246, 141, 47, 94, 135, 157, 180,
///     234, 197, 28, 102, 152, 166, 147, 4
/// ];
///
/// let decoding: Option<Vec<u8>> = match decode_classic_address(key) {
///     Ok(bytes) => Some(bytes),
///     Err(e) => match e {
///         XRPLCoreException::XRPLAddressCodecError(XRPLAddressCodecException::InvalidEncodingPrefixLength) => None,
///         _ => None,
///     }
/// };
///
/// assert_eq!(Some(bytes), decoding);
/// ```
pub fn decode_classic_address(classic_address: &str) -> XRPLCoreResult<Vec<u8>> {
    Ok(decode_base58(classic_address, &CLASSIC_ADDRESS_PREFIX)?)
}

/// Returns whether `classic_address` is a valid classic address.
///
/// # Examples
///
/// ## Basic usage
///
/// ```
/// use xrpl::core::addresscodec::is_valid_classic_address;
///
/// let address: &str = "rpGaCyHRYbgKhErgFih3RdjJqXDsYBouz3";
///
/// assert!(is_valid_classic_address(address));
/// ```
pub fn is_valid_classic_address(classic_address: &str) -> bool {
    decode_base58(classic_address, &CLASSIC_ADDRESS_PREFIX).is_ok()
}

/// Returns whether ``xaddress`` is a valid X-Address.
///
/// # Examples
///
/// ## Basic usage
///
/// ```
/// use xrpl::core::addresscodec::is_valid_xaddress;
///
/// let address: &str = "X7AcgcsBL6XDcUb289X4mJ8djcdyKaB5hJDWMArnXr61cqZ";
///
/// assert!(is_valid_xaddress(address));
/// ```
pub fn is_valid_xaddress(xaddress: &str) -> bool {
    xaddress_to_classic_address(xaddress).is_ok()
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::alloc::string::ToString;
    use crate::core::addresscodec::test_cases::*;

    #[test]
    fn test_classic_address_to_xaddress() {
        for case in ADDRESS_TEST_CASES {
            assert_eq!(
                classic_address_to_xaddress(case.address, case.tag, true),
                Ok(case.test_xaddress.to_string()),
            );

            assert_eq!(
                classic_address_to_xaddress(case.address, case.tag, false),
                Ok(case.main_xaddress.to_string()),
            );
        }
    }

    #[test]
    fn test_xaddress_to_classic_address() {
        for case in ADDRESS_TEST_CASES {
            let (classic_address, tag, is_test) =
                xaddress_to_classic_address(case.test_xaddress).unwrap();

            assert_eq!(*case.address, classic_address);
            assert_eq!(case.tag, tag);
            assert!(is_test);

            let (classic_address, tag, is_test) =
                xaddress_to_classic_address(case.main_xaddress).unwrap();

            assert_eq!(*case.address, classic_address);
            assert_eq!(case.tag, tag);
            assert!(!is_test);
        }
    }

    #[test]
    fn test_is_valid_classic_address() {
        for case in ADDRESS_TEST_CASES {
            assert!(is_valid_classic_address(case.address))
        }
    }

    #[test]
    fn test_is_valid_xaddress() {
        for case in ADDRESS_TEST_CASES {
            assert!(is_valid_xaddress(case.test_xaddress))
        }
    }
}
