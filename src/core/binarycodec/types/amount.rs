//! Codec for serializing and deserializing Amount fields: either a native
//! XRP drops integer, or an issued-currency value/currency/issuer triple.
//!
//! See Amount Fields:
//! `<https://xrpl.org/serialization.html#amount-fields>`

use alloc::format;
use alloc::string::String;
use alloc::string::ToString;
use alloc::vec::Vec;
use core::convert::TryFrom;
use core::str::FromStr;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::ser::Error as SerdeError;
use serde::Serializer;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::core::binarycodec::exceptions::XRPLBinaryCodecException;
use crate::core::exceptions::{XRPLCoreException, XRPLCoreResult};
use crate::core::BinaryParser;

use super::account_id::AccountId;
use super::currency::Currency;
use super::exceptions::XRPLTypeException;
use super::{TryFromParser, XRPLType};

const MIN_MANTISSA: i128 = 1_000_000_000_000_000;
const MAX_MANTISSA: i128 = 9_999_999_999_999_999;
const MIN_IOU_EXPONENT: i32 = -96;
const MAX_IOU_EXPONENT: i32 = 80;

const NOT_XRP_BIT_MASK: u8 = 0x80;
const POS_SIGN_BIT_MASK: u64 = 0x4000_0000_0000_0000;
const ZERO_CURRENCY_AMOUNT_HEX: u64 = 0x8000_0000_0000_0000;
const DROPS_MASK: u64 = (1u64 << 62) - 1;
const MANTISSA_MASK: u64 = (1u64 << 54) - 1;

const NATIVE_AMOUNT_BYTE_LENGTH: usize = 8;
const CURRENCY_AMOUNT_BYTE_LENGTH: usize = 48;
const MAX_DROPS: u64 = 100_000_000_000_000_000;

const VALUE: &str = "value";
const CURRENCY_KEY: &str = "currency";
const ISSUER: &str = "issuer";

/// The `{value, currency, issuer}` JSON shape of an issued-currency amount,
/// prior to normalization into an [`Amount`]'s canonical bytes.
#[derive(Debug, Clone)]
pub struct IssuedCurrency {
    pub value: String,
    pub currency: Currency,
    pub issuer: AccountId,
}

impl TryFrom<Value> for IssuedCurrency {
    type Error = XRPLCoreException;

    fn try_from(value: Value) -> XRPLCoreResult<Self, Self::Error> {
        let obj = value
            .as_object()
            .ok_or(XRPLTypeException::UnexpectedJSONType)?;
        let value_str = obj
            .get(VALUE)
            .and_then(Value::as_str)
            .ok_or(XRPLTypeException::UnexpectedJSONType)?;
        let currency = obj
            .get(CURRENCY_KEY)
            .and_then(Value::as_str)
            .ok_or(XRPLTypeException::UnexpectedJSONType)?;
        let issuer = obj
            .get(ISSUER)
            .and_then(Value::as_str)
            .ok_or(XRPLTypeException::UnexpectedJSONType)?;

        Ok(IssuedCurrency {
            value: value_str.to_string(),
            currency: Currency::try_from(currency)?,
            issuer: AccountId::try_from(issuer)?,
        })
    }
}

/// Codec for serializing and deserializing Amount fields.
///
/// See Amount Fields:
/// `<https://xrpl.org/serialization.html#amount-fields>`
#[derive(Debug, Deserialize, Clone)]
#[serde(try_from = "&str")]
pub struct Amount(Vec<u8>);

fn _contains_decimal(value: &str) -> bool {
    value.contains('.')
}

/// Serializes a native XRP drops amount: a non-negative integer string
/// no greater than [`MAX_DROPS`].
fn _serialize_xrp_amount(
    value: &str,
) -> Result<[u8; NATIVE_AMOUNT_BYTE_LENGTH], XRPLBinaryCodecException> {
    if _contains_decimal(value) {
        return Err(XRPLBinaryCodecException::InvalidNativeAmount);
    }

    let decimal =
        Decimal::from_str(value).map_err(|_| XRPLBinaryCodecException::InvalidNativeAmount)?;

    if decimal.is_sign_negative() {
        return Err(XRPLBinaryCodecException::InvalidNativeAmount);
    }

    let drops = decimal
        .to_u64()
        .ok_or(XRPLBinaryCodecException::InvalidNativeAmount)?;

    if drops > MAX_DROPS {
        return Err(XRPLBinaryCodecException::InvalidNativeAmount);
    }

    Ok((drops | POS_SIGN_BIT_MASK).to_be_bytes())
}

/// Serializes the value field of an issued currency amount to its 8-byte
/// wire representation, normalizing the mantissa into `[10^15, 10^16)`.
fn _serialize_issued_currency_value(value: &str) -> Result<[u8; 8], XRPLBinaryCodecException> {
    let decimal = Decimal::from_str(value).map_err(|_| XRPLBinaryCodecException::TypeMismatch)?;

    if decimal.is_zero() {
        return Ok(ZERO_CURRENCY_AMOUNT_HEX.to_be_bytes());
    }

    let mut exponent: i32 = -(decimal.scale() as i32);
    let mut mantissa: i128 = decimal.mantissa().abs();

    while mantissa < MIN_MANTISSA && exponent > MIN_IOU_EXPONENT {
        mantissa *= 10;
        exponent -= 1;
    }

    while mantissa > MAX_MANTISSA {
        if exponent >= MAX_IOU_EXPONENT {
            return Err(XRPLBinaryCodecException::OverflowAmount);
        }
        mantissa /= 10;
        exponent += 1;
    }

    if exponent < MIN_IOU_EXPONENT || mantissa < MIN_MANTISSA {
        return Err(XRPLBinaryCodecException::UnderflowAmount);
    }
    if exponent > MAX_IOU_EXPONENT || mantissa > MAX_MANTISSA {
        return Err(XRPLBinaryCodecException::OverflowAmount);
    }

    let mut serial: u64 = ZERO_CURRENCY_AMOUNT_HEX;

    if decimal.is_sign_positive() {
        serial |= POS_SIGN_BIT_MASK;
    }

    serial |= ((exponent + 97) as u64) << 54;
    serial |= mantissa as u64;

    Ok(serial.to_be_bytes())
}

/// Renders a normalized `(mantissa, exponent)` pair as a plain decimal
/// string, trimming insignificant trailing zeros after the point.
fn _format_issued_value(mantissa: u64, exponent: i32) -> String {
    let digits = mantissa.to_string();
    let len = digits.len() as i32;

    if exponent >= 0 {
        format!("{}{}", digits, "0".repeat(exponent as usize))
    } else {
        let shift = -exponent;

        if shift < len {
            let split = (len - shift) as usize;
            let (int_part, frac_part) = digits.split_at(split);
            let frac_trimmed = frac_part.trim_end_matches('0');

            if frac_trimmed.is_empty() {
                int_part.to_string()
            } else {
                format!("{}.{}", int_part, frac_trimmed)
            }
        } else {
            let zeros = (shift - len) as usize;
            let frac = format!("{}{}", "0".repeat(zeros), digits);
            let frac_trimmed = frac.trim_end_matches('0');

            if frac_trimmed.is_empty() {
                "0".to_string()
            } else {
                format!("0.{}", frac_trimmed)
            }
        }
    }
}

impl Amount {
    /// Whether this Amount holds native XRP drops (bit 63 clear) rather
    /// than an issued-currency value.
    pub fn is_native(&self) -> bool {
        self.0[0] & NOT_XRP_BIT_MASK == 0
    }

    /// Whether the sign bit (bit 62) is set, i.e. this Amount is
    /// non-negative.
    pub fn is_positive(&self) -> bool {
        self.0[0] & 0x40 != 0
    }

    /// Render this Amount as its canonical JSON: a decimal drops string
    /// for native XRP, or a `{value, currency, issuer}` object for issued
    /// currencies.
    pub fn to_json(&self) -> XRPLCoreResult<Value> {
        if self.is_native() {
            let mut buf = [0u8; NATIVE_AMOUNT_BYTE_LENGTH];
            buf.copy_from_slice(&self.0[..NATIVE_AMOUNT_BYTE_LENGTH]);
            let raw = u64::from_be_bytes(buf);
            let positive = raw & POS_SIGN_BIT_MASK != 0;
            let drops = raw & DROPS_MASK;
            let value = if positive {
                drops.to_string()
            } else {
                format!("-{}", drops)
            };

            Ok(Value::String(value))
        } else {
            let mut buf = [0u8; 8];
            buf.copy_from_slice(&self.0[..8]);
            let raw = u64::from_be_bytes(buf);
            let currency = Currency::new(Some(&self.0[8..28]))?;
            let issuer = AccountId::new(Some(&self.0[28..48]))?;

            let value = if raw == ZERO_CURRENCY_AMOUNT_HEX {
                "0".to_string()
            } else {
                let positive = raw & POS_SIGN_BIT_MASK != 0;
                let exponent = ((raw >> 54) & 0xFF) as i32 - 97;
                let mantissa = raw & MANTISSA_MASK;
                let formatted = _format_issued_value(mantissa, exponent);

                if positive {
                    formatted
                } else {
                    format!("-{}", formatted)
                }
            };

            let mut map = Map::new();
            map.insert(VALUE.to_string(), Value::String(value));
            map.insert(
                CURRENCY_KEY.to_string(),
                Value::String(currency.to_string()),
            );
            map.insert(ISSUER.to_string(), Value::String(issuer.to_string()));

            Ok(Value::Object(map))
        }
    }
}

impl XRPLType for Amount {
    type Error = XRPLCoreException;

    fn new(buffer: Option<&[u8]>) -> XRPLCoreResult<Self, Self::Error> {
        Ok(Amount(buffer.unwrap_or(&[]).to_vec()))
    }
}

impl TryFromParser for Amount {
    type Error = XRPLCoreException;

    /// Construct an Amount from a BinaryParser. Peeks the leading byte to
    /// decide between the 8-byte native and 48-byte issued-currency shapes.
    fn from_parser(
        parser: &mut BinaryParser,
        _length: Option<usize>,
    ) -> XRPLCoreResult<Self, Self::Error> {
        use crate::core::Parser;

        let first_byte = parser
            .peek()
            .ok_or(XRPLBinaryCodecException::UnexpectedEnd)?;
        let num_bytes = if first_byte & NOT_XRP_BIT_MASK == 0 {
            NATIVE_AMOUNT_BYTE_LENGTH
        } else {
            CURRENCY_AMOUNT_BYTE_LENGTH
        };

        Ok(Amount(parser.read(num_bytes)?))
    }
}

impl Serialize for Amount {
    /// Construct a JSON value representing this Amount: a drops string or
    /// a `{value, currency, issuer}` object.
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let json = self.to_json().map_err(S::Error::custom)?;
        json.serialize(serializer)
    }
}

impl TryFrom<&str> for Amount {
    type Error = XRPLCoreException;

    /// Construct a native XRP Amount from its decimal drops string.
    fn try_from(value: &str) -> XRPLCoreResult<Self, Self::Error> {
        let serialized = _serialize_xrp_amount(value)?;
        Ok(Amount(serialized.to_vec()))
    }
}

impl TryFrom<IssuedCurrency> for Amount {
    type Error = XRPLCoreException;

    /// Construct an issued-currency Amount, normalizing its value.
    fn try_from(value: IssuedCurrency) -> XRPLCoreResult<Self, Self::Error> {
        let value_bytes = _serialize_issued_currency_value(&value.value)?;
        let mut buf = value_bytes.to_vec();

        buf.extend_from_slice(value.currency.as_ref());
        buf.extend_from_slice(value.issuer.as_ref());

        Ok(Amount(buf))
    }
}

impl AsRef<[u8]> for Amount {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::core::Parser;
    use serde_json::json;

    #[test]
    fn test_native_amount_round_trip() {
        let amount = Amount::try_from("1000").unwrap();
        assert!(amount.is_native());
        assert_eq!(json!("1000"), amount.to_json().unwrap());
    }

    #[test]
    fn test_native_amount_rejects_decimal() {
        assert!(Amount::try_from("1.5").is_err());
    }

    #[test]
    fn test_native_amount_rejects_over_max_drops() {
        assert!(Amount::try_from("100000000000000001").is_err());
    }

    #[test]
    fn test_issued_currency_round_trip() {
        let issued = IssuedCurrency {
            value: "1".to_string(),
            currency: Currency::try_from("USD").unwrap(),
            issuer: AccountId::try_from("rU4EE5NgLG5dVfR8cYYGQoKkE2ZFtrhyzk").unwrap(),
        };
        let amount = Amount::try_from(issued).unwrap();

        assert!(!amount.is_native());
        assert_eq!(
            json!({"value": "1", "currency": "USD", "issuer": "rU4EE5NgLG5dVfR8cYYGQoKkE2ZFtrhyzk"}),
            amount.to_json().unwrap()
        );
    }

    #[test]
    fn test_issued_currency_zero() {
        let issued = IssuedCurrency {
            value: "0".to_string(),
            currency: Currency::try_from("USD").unwrap(),
            issuer: AccountId::try_from("rU4EE5NgLG5dVfR8cYYGQoKkE2ZFtrhyzk").unwrap(),
        };
        let amount = Amount::try_from(issued).unwrap();
        let json = amount.to_json().unwrap();

        assert_eq!("0", json.get("value").unwrap().as_str().unwrap());
    }

    #[test]
    fn test_issued_currency_normalizes_trailing_zero() {
        let currency = Currency::try_from("USD").unwrap();
        let issuer = AccountId::try_from("rU4EE5NgLG5dVfR8cYYGQoKkE2ZFtrhyzk").unwrap();
        let a = Amount::try_from(IssuedCurrency {
            value: "1.0".to_string(),
            currency: currency.clone(),
            issuer: issuer.clone(),
        })
        .unwrap();
        let b = Amount::try_from(IssuedCurrency {
            value: "1".to_string(),
            currency,
            issuer,
        })
        .unwrap();

        assert_eq!(a.as_ref(), b.as_ref());
    }

    #[test]
    fn test_issued_currency_mantissa_bounds() {
        let currency = Currency::try_from("USD").unwrap();
        let issuer = AccountId::try_from("rU4EE5NgLG5dVfR8cYYGQoKkE2ZFtrhyzk").unwrap();

        let at_max_digits = Amount::try_from(IssuedCurrency {
            value: "9999999999999999".to_string(),
            currency: currency.clone(),
            issuer: issuer.clone(),
        });
        assert!(at_max_digits.is_ok());

        let renormalizes = Amount::try_from(IssuedCurrency {
            value: "10000000000000000".to_string(),
            currency,
            issuer,
        });
        assert!(
            renormalizes.is_ok(),
            "10^16 renormalizes to mantissa 10^15 at exponent+1"
        );
    }

    #[test]
    fn test_amount_from_parser_native() {
        let bytes = Amount::try_from("1000").unwrap().as_ref().to_vec();
        let mut parser = BinaryParser::from(bytes);
        let amount = Amount::from_parser(&mut parser, None).unwrap();

        assert!(parser.is_end());
        assert!(amount.is_native());
        assert_eq!(json!("1000"), amount.to_json().unwrap());
    }

    #[test]
    fn test_amount_from_parser_issued() {
        let issued = IssuedCurrency {
            value: "31.411".to_string(),
            currency: Currency::try_from("USD").unwrap(),
            issuer: AccountId::try_from("rU4EE5NgLG5dVfR8cYYGQoKkE2ZFtrhyzk").unwrap(),
        };
        let bytes = Amount::try_from(issued).unwrap().as_ref().to_vec();
        let mut parser = BinaryParser::from(bytes);
        let amount = Amount::from_parser(&mut parser, None).unwrap();

        assert!(parser.is_end());
        assert_eq!(
            json!("31.411"),
            *amount.to_json().unwrap().get("value").unwrap()
        );
    }
}
