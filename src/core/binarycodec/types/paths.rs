//! Codec for serializing and deserializing PathSet fields.
//!
//! See PathSet Fields:
//! `<https://xrpl.org/serialization.html#pathset-fields>`

use alloc::string::ToString;
use alloc::vec;
use alloc::vec::Vec;
use core::convert::TryFrom;

use serde::ser::Error as SerdeError;
use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

use crate::constants::ACCOUNT_ID_LENGTH;
use crate::core::binarycodec::exceptions::XRPLBinaryCodecException;
use crate::core::exceptions::{XRPLCoreException, XRPLCoreResult};
use crate::core::BinaryParser;

use super::account_id::AccountId;
use super::currency::Currency;
use super::exceptions::XRPLTypeException;
use super::utils::CURRENCY_CODE_LENGTH;
use super::{TryFromParser, XRPLType};

const TYPE_ACCOUNT: u8 = 0x01;
const TYPE_CURRENCY: u8 = 0x10;
const TYPE_ISSUER: u8 = 0x20;

const PATHSET_END_BYTE: u8 = 0x00;
const PATH_SEPARATOR_BYTE: u8 = 0xFF;

const ACCOUNT: &str = "account";
const CURRENCY: &str = "currency";
const ISSUER: &str = "issuer";

/// The on-wire length, in bytes, of a PathStep whose flag byte is `flag`:
/// the flag itself plus whichever of AccountID/Currency/Issuer it marks
/// present.
fn step_length(flag: u8) -> usize {
    let mut length = 1;

    if flag & TYPE_ACCOUNT != 0 {
        length += ACCOUNT_ID_LENGTH;
    }
    if flag & TYPE_CURRENCY != 0 {
        length += CURRENCY_CODE_LENGTH;
    }
    if flag & TYPE_ISSUER != 0 {
        length += ACCOUNT_ID_LENGTH;
    }

    length
}

/// Codec for a single step of a Path: an optional account, currency and
/// issuer hop, identified by a leading flag byte.
///
/// See Path Set Fields:
/// `<https://xrpl.org/serialization.html#pathset-fields>`
#[derive(Debug, Clone)]
pub struct PathStep(Vec<u8>);

impl PathStep {
    /// Render this PathStep as a `{account, currency, issuer}` object,
    /// omitting any key the flag byte marks absent.
    pub fn to_json(&self) -> XRPLCoreResult<Value> {
        let flag = self.0[0];
        let mut cursor = 1;
        let mut map = Map::new();

        if flag & TYPE_ACCOUNT != 0 {
            let account = AccountId::new(Some(&self.0[cursor..cursor + ACCOUNT_ID_LENGTH]))?;
            map.insert(ACCOUNT.to_string(), Value::String(account.to_string()));
            cursor += ACCOUNT_ID_LENGTH;
        }
        if flag & TYPE_CURRENCY != 0 {
            let currency = Currency::new(Some(&self.0[cursor..cursor + CURRENCY_CODE_LENGTH]))?;
            map.insert(CURRENCY.to_string(), Value::String(currency.to_string()));
            cursor += CURRENCY_CODE_LENGTH;
        }
        if flag & TYPE_ISSUER != 0 {
            let issuer = AccountId::new(Some(&self.0[cursor..cursor + ACCOUNT_ID_LENGTH]))?;
            map.insert(ISSUER.to_string(), Value::String(issuer.to_string()));
        }

        Ok(Value::Object(map))
    }
}

impl XRPLType for PathStep {
    type Error = XRPLCoreException;

    fn new(buffer: Option<&[u8]>) -> XRPLCoreResult<Self, Self::Error> {
        Ok(PathStep(buffer.unwrap_or(&[]).to_vec()))
    }
}

impl TryFromParser for PathStep {
    type Error = XRPLCoreException;

    /// Read a single PathStep: a flag byte followed by whichever of
    /// AccountID/Currency/Issuer it marks present, in that order.
    fn from_parser(
        parser: &mut BinaryParser,
        _length: Option<usize>,
    ) -> XRPLCoreResult<Self, Self::Error> {
        use crate::core::Parser;

        let flag = parser.read_uint8()?;
        let mut buffer = vec![flag];

        if flag & TYPE_ACCOUNT != 0 {
            buffer.extend_from_slice(&parser.read(ACCOUNT_ID_LENGTH)?);
        }
        if flag & TYPE_CURRENCY != 0 {
            buffer.extend_from_slice(&parser.read(CURRENCY_CODE_LENGTH)?);
        }
        if flag & TYPE_ISSUER != 0 {
            buffer.extend_from_slice(&parser.read(ACCOUNT_ID_LENGTH)?);
        }

        Ok(PathStep(buffer))
    }
}

impl TryFrom<&Value> for PathStep {
    type Error = XRPLCoreException;

    /// Construct a PathStep from its `{account, currency, issuer}` JSON
    /// object; at least one key must be present.
    fn try_from(value: &Value) -> XRPLCoreResult<Self, Self::Error> {
        let obj = value
            .as_object()
            .ok_or(XRPLTypeException::UnexpectedJSONType)?;
        let mut flag = 0u8;
        let mut body = vec![];

        if let Some(account) = obj.get(ACCOUNT).and_then(Value::as_str) {
            flag |= TYPE_ACCOUNT;
            body.extend_from_slice(AccountId::try_from(account)?.as_ref());
        }
        if let Some(currency) = obj.get(CURRENCY).and_then(Value::as_str) {
            flag |= TYPE_CURRENCY;
            body.extend_from_slice(Currency::try_from(currency)?.as_ref());
        }
        if let Some(issuer) = obj.get(ISSUER).and_then(Value::as_str) {
            flag |= TYPE_ISSUER;
            body.extend_from_slice(AccountId::try_from(issuer)?.as_ref());
        }

        if flag == 0 {
            return Err(XRPLBinaryCodecException::InvalidPathSet.into());
        }

        let mut buffer = vec![flag];
        buffer.extend_from_slice(&body);

        Ok(PathStep(buffer))
    }
}

impl Serialize for PathStep {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let json = self.to_json().map_err(S::Error::custom)?;
        json.serialize(serializer)
    }
}

impl AsRef<[u8]> for PathStep {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

/// Codec for a Path: an ordered sequence of PathSteps describing one
/// route for a cross-currency payment to take.
#[derive(Debug, Clone)]
pub struct Path(Vec<u8>);

impl Path {
    /// Render this Path as a JSON array of PathStep objects.
    pub fn to_json(&self) -> XRPLCoreResult<Value> {
        let mut steps = vec![];
        let mut cursor = 0;

        while cursor < self.0.len() {
            let flag = self.0[cursor];
            let length = step_length(flag);
            let step = PathStep::new(Some(&self.0[cursor..cursor + length]))?;

            steps.push(step.to_json()?);
            cursor += length;
        }

        Ok(Value::Array(steps))
    }
}

impl XRPLType for Path {
    type Error = XRPLCoreException;

    fn new(buffer: Option<&[u8]>) -> XRPLCoreResult<Self, Self::Error> {
        Ok(Path(buffer.unwrap_or(&[]).to_vec()))
    }
}

impl TryFrom<&Value> for Path {
    type Error = XRPLCoreException;

    /// Construct a Path from a JSON array of PathStep objects.
    fn try_from(value: &Value) -> XRPLCoreResult<Self, Self::Error> {
        let steps = value
            .as_array()
            .ok_or(XRPLTypeException::UnexpectedJSONType)?;
        let mut buffer = vec![];

        for step in steps {
            buffer.extend_from_slice(PathStep::try_from(step)?.as_ref());
        }

        Ok(Path(buffer))
    }
}

impl Serialize for Path {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let json = self.to_json().map_err(S::Error::custom)?;
        json.serialize(serializer)
    }
}

impl AsRef<[u8]> for Path {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

/// Codec for a PathSet: the alternative Paths offered between a sender
/// and a destination for a cross-currency payment. Paths are separated
/// by `0xFF` on the wire and the set is terminated by `0x00`.
#[derive(Debug, Clone)]
pub struct PathSet(Vec<u8>);

impl PathSet {
    /// Render this PathSet as a JSON array of Path arrays.
    pub fn to_json(&self) -> XRPLCoreResult<Value> {
        let mut paths = vec![];
        let mut path_bytes: Vec<u8> = vec![];
        let mut cursor = 0;

        while cursor < self.0.len() {
            let marker = self.0[cursor];

            if marker == PATHSET_END_BYTE || marker == PATH_SEPARATOR_BYTE {
                let path = Path::new(Some(&path_bytes))?;
                paths.push(path.to_json()?);
                path_bytes.clear();
                cursor += 1;

                if marker == PATHSET_END_BYTE {
                    break;
                }
                continue;
            }

            let length = step_length(marker);
            path_bytes.extend_from_slice(&self.0[cursor..cursor + length]);
            cursor += length;
        }

        Ok(Value::Array(paths))
    }
}

impl XRPLType for PathSet {
    type Error = XRPLCoreException;

    fn new(buffer: Option<&[u8]>) -> XRPLCoreResult<Self, Self::Error> {
        Ok(PathSet(buffer.unwrap_or(&[]).to_vec()))
    }
}

impl TryFromParser for PathSet {
    type Error = XRPLCoreException;

    /// Read Paths until the `0x00` PathSet terminator, recording `0xFF`
    /// path separators inline so the byte form round-trips through
    /// [`PathSet::to_json`].
    fn from_parser(
        parser: &mut BinaryParser,
        _length: Option<usize>,
    ) -> XRPLCoreResult<Self, Self::Error> {
        use crate::core::Parser;

        let mut buffer = vec![];

        loop {
            let marker = parser
                .peek()
                .ok_or(XRPLBinaryCodecException::InvalidPathSet)?;

            if marker == PATHSET_END_BYTE {
                parser.skip(1)?;
                buffer.push(PATHSET_END_BYTE);
                break;
            }
            if marker == PATH_SEPARATOR_BYTE {
                parser.skip(1)?;
                buffer.push(PATH_SEPARATOR_BYTE);
                continue;
            }

            let step = PathStep::from_parser(parser, None)?;
            buffer.extend_from_slice(step.as_ref());
        }

        Ok(PathSet(buffer))
    }
}

impl TryFrom<&Value> for PathSet {
    type Error = XRPLCoreException;

    /// Construct a PathSet from a JSON array of Path arrays.
    fn try_from(value: &Value) -> XRPLCoreResult<Self, Self::Error> {
        let paths = value
            .as_array()
            .ok_or(XRPLTypeException::UnexpectedJSONType)?;
        let mut buffer = vec![];

        for (index, path) in paths.iter().enumerate() {
            if index > 0 {
                buffer.push(PATH_SEPARATOR_BYTE);
            }
            buffer.extend_from_slice(Path::try_from(path)?.as_ref());
        }

        buffer.push(PATHSET_END_BYTE);

        Ok(PathSet(buffer))
    }
}

impl Serialize for PathSet {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let json = self.to_json().map_err(S::Error::custom)?;
        json.serialize(serializer)
    }
}

impl AsRef<[u8]> for PathSet {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use serde_json::json;

    const ACCOUNT_ONE: &str = "rU4EE5NgLG5dVfR8cYYGQoKkE2ZFtrhyzk";
    const ACCOUNT_TWO: &str = "rweYz56rfmQ98cAdRaeTxQS9wVMGnrdsFp";

    fn sample_pathset_json() -> Value {
        json!([
            [{"account": ACCOUNT_ONE}, {"currency": "USD", "issuer": ACCOUNT_TWO}],
            [{"account": ACCOUNT_TWO}]
        ])
    }

    #[test]
    fn test_pathstep_account_round_trip() {
        let step = PathStep::try_from(&json!({"account": ACCOUNT_ONE})).unwrap();
        assert_eq!(json!({"account": ACCOUNT_ONE}), step.to_json().unwrap());
    }

    #[test]
    fn test_pathstep_currency_issuer_round_trip() {
        let step =
            PathStep::try_from(&json!({"currency": "USD", "issuer": ACCOUNT_TWO})).unwrap();
        assert_eq!(
            json!({"currency": "USD", "issuer": ACCOUNT_TWO}),
            step.to_json().unwrap()
        );
    }

    #[test]
    fn test_pathstep_requires_a_field() {
        assert!(PathStep::try_from(&json!({})).is_err());
    }

    #[test]
    fn test_pathset_round_trip_via_json() {
        let input = sample_pathset_json();
        let path_set = PathSet::try_from(&input).unwrap();

        assert_eq!(input, path_set.to_json().unwrap());
    }

    #[test]
    fn test_pathset_from_parser_matches_bytes() {
        let input = sample_pathset_json();
        let encoded = PathSet::try_from(&input).unwrap();
        let mut parser = BinaryParser::from(encoded.as_ref());
        let decoded = PathSet::from_parser(&mut parser, None).unwrap();

        assert!(parser.is_end());
        assert_eq!(encoded.as_ref(), decoded.as_ref());
        assert_eq!(input, decoded.to_json().unwrap());
    }

    #[test]
    fn test_pathset_single_empty_path_is_just_terminator() {
        let path_set = PathSet::try_from(&json!([])).unwrap();
        assert_eq!(&[PATHSET_END_BYTE], path_set.as_ref());
        assert_eq!(json!([]), path_set.to_json().unwrap());
    }
}
