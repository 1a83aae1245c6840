//! Codec for the `currency` property inside an XRPL issued currency amount.

use alloc::string::String;
use alloc::string::ToString;
use alloc::vec;
use alloc::vec::Vec;
use core::convert::TryFrom;
use core::convert::TryInto;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::constants::HEX_CURRENCY_REGEX;
use crate::constants::ISO_CURRENCY_REGEX;
use crate::core::exceptions::XRPLCoreException;
use crate::core::exceptions::XRPLCoreResult;
use crate::core::BinaryParser;
use crate::utils::exceptions::ISOCodeException;

use super::Hash160;
use super::TryFromParser;
use super::XRPLType;

pub const CURRENCY_CODE_LENGTH: usize = 20;
pub const NATIVE_HEX_CODE: &str = "0000000000000000000000000000000000000000";
pub const NATIVE_CODE: &str = "XRP";

/// Codec for serializing and deserializing currency codes.
///
/// See "Currency codes" in Amount Fields:
/// `<https://xrpl.org/serialization.html#amount-fields>`
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(try_from = "&str", into = "String")]
pub struct Currency(Hash160);

/// Tests if value is a valid 3-char iso code.
pub(crate) fn _is_iso_code(value: &str) -> bool {
    let regex = Regex::new(ISO_CURRENCY_REGEX).expect("_is_iso_code");
    regex.is_match(value)
}

/// Tests if value is a valid 40-char hex string.
pub(crate) fn _is_hex(value: &str) -> bool {
    let regex = Regex::new(HEX_CURRENCY_REGEX).expect("_is_hex");
    regex.is_match(value)
}

fn _iso_code_from_hex(value: &[u8]) -> Result<Option<String>, ISOCodeException> {
    if value.len() != CURRENCY_CODE_LENGTH {
        return Err(ISOCodeException::InvalidISOLength);
    }
    if value[..12].iter().any(|b| *b != 0) || value[15..].iter().any(|b| *b != 0) {
        return Ok(None);
    }

    let candidate_iso = match core::str::from_utf8(&value[12..15]) {
        Ok(candidate) => candidate.to_string(),
        Err(_) => return Ok(None),
    };

    if candidate_iso == NATIVE_CODE {
        Err(ISOCodeException::InvalidXRPBytes)
    } else if _is_iso_code(&candidate_iso) {
        Ok(Some(candidate_iso))
    } else {
        Ok(None)
    }
}

/// Convert an ISO code to a 160-bit (20 byte) encoded representation.
///
/// See "Currency codes" subheading in Amount Fields:
/// `<https://xrpl.org/serialization.html#amount-fields>`
pub(crate) fn _iso_to_bytes(value: &str) -> Result<[u8; CURRENCY_CODE_LENGTH], ISOCodeException> {
    if !_is_iso_code(value) {
        Err(ISOCodeException::InvalidISOCode)
    } else if value == NATIVE_CODE {
        Ok([0; CURRENCY_CODE_LENGTH])
    } else {
        let iso_bytes = value.as_bytes();
        let pad_left: [u8; 12] = [0; 12];
        let pad_right: [u8; 5] = [0; 5];
        let mut result: Vec<u8> = vec![];

        result.extend_from_slice(&pad_left);
        result.extend_from_slice(iso_bytes);
        result.extend_from_slice(&pad_right);

        result
            .try_into()
            .map_err(|_| ISOCodeException::InvalidISOLength)
    }
}

impl Currency {
    /// Whether this currency's canonical bytes are the all-zero native code.
    pub fn is_native(&self) -> bool {
        self.0.as_ref().iter().all(|b| *b == 0)
    }
}

impl XRPLType for Currency {
    type Error = XRPLCoreException;

    /// Construct a Currency. Defaults to the native (XRP) code when no
    /// buffer is given.
    fn new(buffer: Option<&[u8]>) -> XRPLCoreResult<Self, Self::Error> {
        let hash160 = Hash160::new(buffer.or(Some(&[0; CURRENCY_CODE_LENGTH])))?;
        Ok(Currency(hash160))
    }
}

impl TryFromParser for Currency {
    type Error = XRPLCoreException;

    /// Construct a Currency from a BinaryParser; always fixed-width, 20 bytes.
    fn from_parser(
        parser: &mut BinaryParser,
        length: Option<usize>,
    ) -> XRPLCoreResult<Self, Self::Error> {
        Ok(Currency(Hash160::from_parser(parser, length)?))
    }
}

impl TryFrom<&str> for Currency {
    type Error = XRPLCoreException;

    /// Construct a Currency object from a string representation of a
    /// currency: a 3-char ISO code or a 40-char hex currency code.
    fn try_from(value: &str) -> XRPLCoreResult<Self, Self::Error> {
        if _is_iso_code(value) {
            let hash160 = Hash160::new(Some(&_iso_to_bytes(value)?))?;
            Ok(Currency(hash160))
        } else if _is_hex(value) {
            Ok(Currency(Hash160::new(Some(&hex::decode(value)?))?))
        } else {
            Err(ISOCodeException::UnsupportedCurrencyRepresentation.into())
        }
    }
}

impl ToString for Currency {
    fn to_string(&self) -> String {
        let buffer = self.0.as_ref();

        if hex::encode(buffer) == NATIVE_HEX_CODE {
            NATIVE_CODE.to_string()
        } else {
            match _iso_code_from_hex(buffer) {
                Ok(Some(code)) => code,
                _ => hex::encode_upper(buffer),
            }
        }
    }
}

impl From<Currency> for String {
    fn from(currency: Currency) -> Self {
        currency.to_string()
    }
}

impl AsRef<[u8]> for Currency {
    fn as_ref(&self) -> &[u8] {
        self.0.as_ref()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    const ILLEGAL_NATIVE_HEX_CODE: &str = "0000000000000000000000005852500000000000";
    const USD_HEX_CODE: &str = "0000000000000000000000005553440000000000";
    const NONSTANDARD_HEX_CODE: &str = "015841551A748AD2C1F76FF6ECB0CCCD00000000";
    const USD_ISO: &str = "USD";

    #[test]
    fn test_is_iso_code() {
        let valid_code = "ABC";
        let valid_code_numeric = "123";
        let invalid_code_long = "LONG";
        let invalid_code_short = "NO";

        assert!(_is_iso_code(valid_code));
        assert!(_is_iso_code(valid_code_numeric));
        assert!(!_is_iso_code(invalid_code_long));
        assert!(!_is_iso_code(invalid_code_short));
    }

    #[test]
    fn test_is_hex() {
        let valid_hex: &str = "0000000000000000000000005553440000000000";
        let invalid_hex_chars: &str = "USD0000000000000000000005553440000000000";
        let invalid_hex_long: &str = "0000000000000000000000005553440000000000123455";
        let invalid_hex_short: &str = "1234";

        assert!(_is_hex(valid_hex));
        assert!(!_is_hex(invalid_hex_long));
        assert!(!_is_hex(invalid_hex_short));
        assert!(!_is_hex(invalid_hex_chars));
    }

    #[test]
    fn test_iso_to_bytes() {
        let usd_iso_bytes = _iso_to_bytes(USD_ISO).unwrap();
        let xrp_iso_bytes = _iso_to_bytes(NATIVE_CODE).unwrap();
        let invalid_iso = "INVALID";

        assert_eq!(USD_HEX_CODE, hex::encode(usd_iso_bytes));
        assert_eq!(NATIVE_HEX_CODE, hex::encode(xrp_iso_bytes));
        assert!(_iso_to_bytes(invalid_iso).is_err());
    }

    #[test]
    fn test_currency_try_from() {
        let from_hex_xrp = Currency::try_from(NATIVE_HEX_CODE).unwrap();
        let from_hex_ic = Currency::try_from(USD_HEX_CODE).unwrap();
        let from_iso_xrp = Currency::try_from(NATIVE_CODE).unwrap();
        let from_iso_ic = Currency::try_from(USD_ISO).unwrap();
        let from_ns = Currency::try_from(NONSTANDARD_HEX_CODE).unwrap();

        assert_eq!(NATIVE_CODE, from_hex_xrp.to_string());
        assert_eq!(USD_ISO, from_hex_ic.to_string());
        assert!(from_iso_xrp.is_native());
        assert_eq!(NATIVE_CODE, from_iso_xrp.to_string());
        assert_eq!(USD_ISO, from_iso_ic.to_string());
        assert_eq!(NONSTANDARD_HEX_CODE, from_ns.to_string());
    }

    #[test]
    fn test_illegal_native_hex_is_not_native() {
        let currency = Currency::try_from(ILLEGAL_NATIVE_HEX_CODE).unwrap();
        assert!(!currency.is_native());
    }
}
