//! Codecs for the fixed-width XRPL Hash128/Hash160/Hash256 fields.
//!
//! See Hash Fields:
//! `<https://xrpl.org/serialization.html#hash-fields>`

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::convert::TryFrom;

use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;

use crate::core::exceptions::{XRPLCoreException, XRPLCoreResult};
use crate::core::{BinaryParser, Parser};

use super::exceptions::XRPLHashException;
use super::utils::{HASH128_LENGTH, HASH160_LENGTH, HASH256_LENGTH};
use super::{TryFromParser, XRPLType};

/// Marker trait implemented by each fixed-width Hash type. Gives
/// `dyn Hash`'s helpers the expected byte length to validate against.
pub(crate) trait Hash {
    fn get_length() -> usize
    where
        Self: Sized;
}

impl dyn Hash {
    /// Validate `bytes` is exactly `T`'s expected length.
    pub fn make<T: Hash>(bytes: Option<&[u8]>) -> Result<Vec<u8>, XRPLHashException> {
        let byte_value: &[u8] = bytes.unwrap_or(&[]);
        let hash_length = T::get_length();

        if byte_value.len() != hash_length {
            Err(XRPLHashException::InvalidHashLength {
                expected: hash_length,
                found: byte_value.len(),
            })
        } else {
            Ok(byte_value.to_vec())
        }
    }

    /// Read `T`'s expected length (or an explicit `length`) from `parser`.
    pub fn parse<T: Hash>(
        parser: &mut BinaryParser,
        length: Option<usize>,
    ) -> XRPLCoreResult<Vec<u8>> {
        let read_length = length.unwrap_or_else(T::get_length);
        Ok(parser.read(read_length)?)
    }
}

macro_rules! hash_type {
    ($name:ident, $length:expr) => {
        #[doc = concat!("A ", stringify!($length), "-byte XRPL hash field.")]
        #[derive(Debug, Deserialize, Clone, PartialEq, Eq, Default)]
        #[serde(try_from = "&str")]
        pub struct $name(Vec<u8>);

        impl Hash for $name {
            fn get_length() -> usize {
                $length
            }
        }

        impl XRPLType for $name {
            type Error = XRPLCoreException;

            fn new(buffer: Option<&[u8]>) -> XRPLCoreResult<Self, Self::Error> {
                Ok($name(<dyn Hash>::make::<$name>(buffer)?))
            }
        }

        impl TryFromParser for $name {
            type Error = XRPLCoreException;

            fn from_parser(
                parser: &mut BinaryParser,
                length: Option<usize>,
            ) -> XRPLCoreResult<Self, Self::Error> {
                Ok($name(<dyn Hash>::parse::<$name>(parser, length)?))
            }
        }

        impl TryFrom<&str> for $name {
            type Error = XRPLCoreException;

            fn try_from(value: &str) -> XRPLCoreResult<Self, Self::Error> {
                Self::new(Some(&hex::decode(value)?))
            }
        }

        impl ToString for $name {
            fn to_string(&self) -> String {
                hex::encode_upper(&self.0)
            }
        }

        impl AsRef<[u8]> for $name {
            fn as_ref(&self) -> &[u8] {
                &self.0
            }
        }

        impl $name {
            /// Render this hash as an uppercase hex JSON string.
            pub fn to_json(&self) -> Value {
                Value::String(hex::encode_upper(&self.0))
            }
        }

        impl Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: Serializer,
            {
                serializer.serialize_str(&hex::encode_upper(&self.0))
            }
        }
    };
}

hash_type!(Hash128, HASH128_LENGTH);
hash_type!(Hash160, HASH160_LENGTH);
hash_type!(Hash256, HASH256_LENGTH);

#[cfg(test)]
mod test {
    use super::*;

    const HASH128_HEX: &str = "1FEE8D0977CE67F1E2541E018D2D9504";
    const HASH160_HEX: &str = "5E7B112523F68D2F5E879DB4EAC51C6698A69304";
    const HASH256_HEX: &str =
        "242132436254CAA6120BFC2EC22B0A6EC3B3C0BF4F1B171755C0A2BE4AC6D2F6";

    #[test]
    fn test_hash128_new_and_to_string() {
        let bytes = hex::decode(HASH128_HEX).unwrap();
        let hash = Hash128::new(Some(&bytes)).unwrap();
        assert_eq!(HASH128_HEX, hash.to_string());
    }

    #[test]
    fn test_hash128_wrong_length() {
        let bytes = hex::decode(HASH160_HEX).unwrap();
        assert!(Hash128::new(Some(&bytes)).is_err());
    }

    #[test]
    fn test_hash160_try_from() {
        let hash = Hash160::try_from(HASH160_HEX).unwrap();
        assert_eq!(HASH160_HEX, hash.to_string());
    }

    #[test]
    fn test_hash256_from_parser() {
        let mut parser = BinaryParser::from(hex::decode(HASH256_HEX).unwrap());
        let hash = Hash256::from_parser(&mut parser, None).unwrap();
        assert_eq!(HASH256_HEX, hash.to_string());
        assert!(parser.is_end());
    }

    #[test]
    fn test_hash256_default_is_zero_filled() {
        let hash = Hash256::default();
        assert_eq!(32, hash.as_ref().len());
    }
}
