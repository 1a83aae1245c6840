//! Codec for serializing and deserializing blob fields.
//!
//! See Blob Fields:
//! `<https://xrpl.org/serialization.html#blob-fields>`

use alloc::string::String;
use alloc::string::ToString;
use alloc::vec::Vec;
use core::convert::TryFrom;
use serde::Serializer;
use serde::{Deserialize, Serialize};

use crate::core::exceptions::{XRPLCoreException, XRPLCoreResult};
use crate::core::BinaryParser;

use super::{TryFromParser, XRPLType};

/// Codec for serializing and deserializing blob fields.
///
/// See Blob Fields:
/// `<https://xrpl.org/serialization.html#blob-fields>`
#[derive(Debug, Deserialize, Clone)]
#[serde(try_from = "&str")]
pub struct Blob(Vec<u8>);

impl XRPLType for Blob {
    type Error = XRPLCoreException;

    /// Construct a Blob.
    fn new(buffer: Option<&[u8]>) -> XRPLCoreResult<Self, Self::Error> {
        Ok(Blob(buffer.unwrap_or(&[]).to_vec()))
    }
}

impl TryFromParser for Blob {
    type Error = XRPLCoreException;

    /// Construct a Blob from a BinaryParser. Reads `length` bytes if
    /// given, otherwise consumes the rest of the buffer.
    fn from_parser(
        parser: &mut BinaryParser,
        length: Option<usize>,
    ) -> XRPLCoreResult<Self, Self::Error> {
        use crate::core::Parser;

        let read_length = length.unwrap_or_else(|| parser.len());
        Ok(Blob(parser.read(read_length)?))
    }
}

impl Serialize for Blob {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&hex::encode_upper(&self.0))
    }
}

impl TryFrom<&str> for Blob {
    type Error = XRPLCoreException;

    /// Construct a Blob from a hex string.
    fn try_from(value: &str) -> XRPLCoreResult<Self, Self::Error> {
        Self::new(Some(&hex::decode(value)?))
    }
}

impl ToString for Blob {
    fn to_string(&self) -> String {
        hex::encode_upper(&self.0)
    }
}

impl AsRef<[u8]> for Blob {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

#[cfg(test)]
mod test {
    use super::*;

    const TEST_HEX: &str = "00AA";

    #[test]
    fn test_blob_new() {
        let bytes = hex::decode(TEST_HEX).unwrap();
        let blob = Blob::new(Some(&bytes));

        assert!(blob.is_ok());
        assert_eq!(bytes, blob.unwrap().as_ref());
    }

    #[test]
    fn test_blob_try_from() {
        let bytes = hex::decode(TEST_HEX).unwrap();
        let blob = Blob::try_from(TEST_HEX);

        assert!(blob.is_ok());
        assert_eq!(bytes, blob.unwrap().as_ref());
    }

    #[test]
    fn test_blob_from_parser_reads_remaining_bytes() {
        let bytes = hex::decode(TEST_HEX).unwrap();
        let mut parser = BinaryParser::from(bytes.clone());
        let blob = Blob::from_parser(&mut parser, None).unwrap();

        assert_eq!(bytes, blob.as_ref());
    }

    #[test]
    fn test_blob_from_parser_reads_fixed_length() {
        let mut parser = BinaryParser::from(hex::decode("00AAFF").unwrap());
        let blob = Blob::from_parser(&mut parser, Some(2)).unwrap();

        assert_eq!(hex::decode(TEST_HEX).unwrap(), blob.as_ref());
        assert_eq!(1, {
            use crate::core::Parser;
            parser.len()
        });
    }
}
