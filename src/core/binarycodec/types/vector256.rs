//! Codec for serializing and deserializing vectors of Hash256, used for
//! fields such as `NFTokenOffers` and `Hashes`.
//!
//! See Vector256 Fields:
//! `<https://xrpl.org/serialization.html#vector256-fields>`

use alloc::string::String;
use alloc::string::ToString;
use alloc::vec;
use alloc::vec::Vec;
use core::convert::TryFrom;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::core::exceptions::{XRPLCoreException, XRPLCoreResult};
use crate::core::BinaryParser;

use super::{Hash256, TryFromParser, XRPLType};

const _HASH_LENGTH_BYTES: usize = 32;

/// Codec for serializing and deserializing vectors of Hash256.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Vector256(Vec<u8>);

impl Vector256 {
    /// Render this Vector256 as a JSON array of uppercase hex strings.
    pub fn to_json(&self) -> Value {
        Value::Array(
            self.0
                .chunks(_HASH_LENGTH_BYTES)
                .map(|chunk| Value::String(hex::encode_upper(chunk)))
                .collect(),
        )
    }
}

impl XRPLType for Vector256 {
    type Error = XRPLCoreException;

    /// Construct a Vector256.
    fn new(buffer: Option<&[u8]>) -> XRPLCoreResult<Self, Self::Error> {
        Ok(Vector256(buffer.unwrap_or(&[]).to_vec()))
    }
}

impl TryFromParser for Vector256 {
    type Error = XRPLCoreException;

    /// Construct a Vector256 from a BinaryParser. Reads `length` bytes
    /// (or the rest of the buffer) as a sequence of 32-byte hashes.
    fn from_parser(
        parser: &mut BinaryParser,
        length: Option<usize>,
    ) -> XRPLCoreResult<Self, Self::Error> {
        use crate::core::Parser;

        let num_bytes = length.unwrap_or_else(|| parser.len());
        let num_hashes = num_bytes / _HASH_LENGTH_BYTES;
        let mut bytes = vec![];

        for _ in 0..num_hashes {
            bytes.extend_from_slice(Hash256::from_parser(parser, None)?.as_ref());
        }

        Ok(Vector256(bytes))
    }
}

impl TryFrom<&[&str]> for Vector256 {
    type Error = XRPLCoreException;

    /// Construct a Vector256 from a list of hex-encoded Hash256 strings.
    fn try_from(value: &[&str]) -> XRPLCoreResult<Self, Self::Error> {
        let mut bytes = vec![];

        for string in value {
            bytes.extend_from_slice(Hash256::try_from(*string)?.as_ref())
        }

        Ok(Vector256(bytes))
    }
}

impl TryFrom<&Value> for Vector256 {
    type Error = XRPLCoreException;

    /// Construct a Vector256 from a JSON array of hex-encoded Hash256
    /// strings.
    fn try_from(value: &Value) -> XRPLCoreResult<Self, Self::Error> {
        let array = value
            .as_array()
            .ok_or(super::exceptions::XRPLSerializeArrayException::ExpectedArray)?;
        let mut bytes = vec![];

        for hash in array {
            let hash = hash
                .as_str()
                .ok_or(super::exceptions::XRPLSerializeArrayException::ExpectedArray)?;
            bytes.extend_from_slice(Hash256::try_from(hash)?.as_ref());
        }

        Ok(Vector256(bytes))
    }
}

impl ToString for Vector256 {
    fn to_string(&self) -> String {
        hex::encode_upper(&self.0)
    }
}

impl AsRef<[u8]> for Vector256 {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

#[cfg(test)]
mod test {
    use super::*;

    const SERIALIZED: &str = "42426C4D4F1009EE67080A9B7965B44656D7714D104A72F9B4369F97ABF044EE4C97EBA926031A7CF7D7B36FDE3ED66DDA5421192D63DE53FFB46E43B9DC8373";
    const HASH1: &str = "42426C4D4F1009EE67080A9B7965B44656D7714D104A72F9B4369F97ABF044EE";
    const HASH2: &str = "4C97EBA926031A7CF7D7B36FDE3ED66DDA5421192D63DE53FFB46E43B9DC8373";
    const HASH_LIST: &[&str] = &[HASH1, HASH2];

    #[test]
    fn test_new() {
        let bytes = hex::decode(HASH1).unwrap();
        assert_eq!(HASH1, Vector256(bytes).to_string());
    }

    #[test]
    fn test_from_parser() {
        let mut parser = BinaryParser::from(hex::decode(SERIALIZED).unwrap());
        let result = Vector256::from_parser(&mut parser, None);

        assert!(result.is_ok());
        assert_eq!(SERIALIZED, result.unwrap().to_string());
    }

    #[test]
    fn test_try_from_str_list() {
        let result = Vector256::try_from(HASH_LIST);

        assert!(result.is_ok());
        assert_eq!(SERIALIZED, result.unwrap().to_string());
    }

    #[test]
    fn test_to_json() {
        let bytes = hex::decode(SERIALIZED).unwrap();
        let vector = Vector256::new(Some(&bytes)).unwrap();
        let json = vector.to_json();

        assert_eq!(
            serde_json::json!([HASH1, HASH2]),
            json
        );
    }
}
