//! Context manager and helpers for the serialization
//! of a JSON object into bytes.

use alloc::vec;
use alloc::vec::Vec;
use core::ops::{Deref, DerefMut};

use crate::core::binarycodec::binary_wrappers::utils::MAX_DOUBLE_BYTE_LENGTH;
use crate::core::binarycodec::binary_wrappers::utils::MAX_LENGTH_VALUE;
use crate::core::binarycodec::binary_wrappers::utils::MAX_SECOND_BYTE_VALUE;
use crate::core::binarycodec::binary_wrappers::utils::MAX_SINGLE_BYTE_LENGTH;
use crate::core::binarycodec::exceptions::XRPLBinaryCodecException;
use crate::core::binarycodec::types::SerializedType;
use crate::core::definitions::FieldInstance;
use crate::utils::ToBytes;

/// Accumulates bytes for the canonical binary representation of a
/// JSON object, field by field, in the order its caller provides.
#[derive(Debug, Default, Clone)]
pub struct BinarySerializer(Vec<u8>);

impl BinarySerializer {
    /// Create a new, empty BinarySerializer.
    pub fn new() -> Self {
        BinarySerializer(vec![])
    }
}

impl Deref for BinarySerializer {
    type Target = Vec<u8>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for BinarySerializer {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl AsRef<[u8]> for BinarySerializer {
    fn as_ref(&self) -> &[u8] {
        self.0.as_slice()
    }
}

impl From<BinarySerializer> for SerializedType {
    fn from(serializer: BinarySerializer) -> Self {
        SerializedType::from(serializer.0)
    }
}

/// Helper function for length-prefixed fields including
/// Blob types and some AccountID types. Calculates the
/// prefix of variable length bytes.
///
/// The length of the prefix is 1-3 bytes depending on the
/// length of the contents:
/// Content length <= 192 bytes: prefix is 1 byte
/// 192 bytes < Content length <= 12480 bytes: prefix is 2 bytes
/// 12480 bytes < Content length <= 918744 bytes: prefix is 3 bytes
///
/// See Length Prefixing: https://xrpl.org/serialization.html#length-prefixing
fn _encode_variable_length_prefix(length: usize) -> Result<Vec<u8>, XRPLBinaryCodecException> {
    if length <= MAX_SINGLE_BYTE_LENGTH {
        Ok(vec![length as u8])
    } else if length < MAX_DOUBLE_BYTE_LENGTH {
        let b_length = length - MAX_SINGLE_BYTE_LENGTH + 1;
        let val_a = (b_length >> 8) + (MAX_SINGLE_BYTE_LENGTH + 1);
        let val_b = b_length & 0xFF;

        Ok(vec![val_a as u8, val_b as u8])
    } else if length <= MAX_LENGTH_VALUE {
        let b_length = length - MAX_DOUBLE_BYTE_LENGTH;
        let val_a = (MAX_SECOND_BYTE_VALUE + 1) + (b_length >> 16);
        let val_b = (b_length >> 8) & 0xFF;
        let val_c = b_length & 0xFF;

        Ok(vec![val_a as u8, val_b as u8, val_c as u8])
    } else {
        Err(XRPLBinaryCodecException::InvalidVariableLengthTooLarge {
            max: MAX_LENGTH_VALUE,
        })
    }
}

/// Operations used to build up a canonical binary buffer field by field.
pub trait Serialization {
    /// Write a variable length encoded value to the BinarySerializer.
    fn write_length_encoded(&mut self, value: &[u8]) -> Result<(), XRPLBinaryCodecException>;

    /// Write a field header and its value to the buffer.
    ///
    /// `is_unl_modify_workaround` replicates a rippled quirk: the
    /// `Account` field of a `UNLModify` pseudo-transaction is written
    /// without its usual variable-length prefix.
    fn write_field_and_value(
        &mut self,
        field: FieldInstance,
        value: &[u8],
        is_unl_modify_workaround: bool,
    );
}

impl Serialization for BinarySerializer {
    fn write_length_encoded(&mut self, value: &[u8]) -> Result<(), XRPLBinaryCodecException> {
        let length_prefix = _encode_variable_length_prefix(value.len())?;

        self.0.extend_from_slice(&length_prefix);
        self.0.extend_from_slice(value);

        Ok(())
    }

    fn write_field_and_value(
        &mut self,
        field: FieldInstance,
        value: &[u8],
        is_unl_modify_workaround: bool,
    ) {
        self.0.extend_from_slice(&field.header.to_bytes());

        if field.is_vl_encoded && !is_unl_modify_workaround {
            self.write_length_encoded(value)
                .expect("VariableLength field must be <= MAX_LENGTH_VALUE bytes long");
        } else {
            self.0.extend_from_slice(value);
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_encode_variable_length_prefix_single_byte() {
        assert_eq!(vec![192], _encode_variable_length_prefix(192).unwrap());
    }

    #[test]
    fn test_encode_variable_length_prefix_double_byte() {
        assert_eq!(vec![193, 0], _encode_variable_length_prefix(193).unwrap());
    }

    #[test]
    fn test_encode_variable_length_prefix_triple_byte() {
        assert_eq!(
            vec![241, 0, 0],
            _encode_variable_length_prefix(12481).unwrap()
        );
    }

    #[test]
    fn test_encode_variable_length_prefix_too_large() {
        assert!(_encode_variable_length_prefix(MAX_LENGTH_VALUE + 1).is_err());
    }

    #[test]
    fn test_write_field_and_value() {
        let mut serializer = BinarySerializer::new();
        let field = crate::core::definitions::get_field_instance("Fee").unwrap();
        serializer.write_field_and_value(field, &1u64.to_be_bytes(), false);
        assert_eq!(serializer.len(), 9);
    }
}
