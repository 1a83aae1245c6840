//! General XRPL Binary Codec Exceptions.

use thiserror_no_std::Error;

#[derive(Debug, Clone, Error)]
#[non_exhaustive]
pub enum XRPLBinaryCodecException {
    #[error("Parser tried to skip {found} bytes, only {max} remain")]
    UnexpectedParserSkipOverflow { max: usize, found: usize },
    #[error("Length prefix out of range [{min}, {max}]")]
    UnexpectedLengthPrefixRange { min: usize, max: usize },
    #[error("Type code out of range [{min}, {max}]")]
    UnexpectedTypeCodeRange { min: usize, max: usize },
    #[error("Field code out of range [{min}, {max}]")]
    UnexpectedFieldCodeRange { min: usize, max: usize },
    #[error("Field id is encoded in an unsupported number of bytes (expected {min}-{max})")]
    UnexpectedFieldIdByteRange { min: usize, max: usize },
    #[error("Currency representation is not supported")]
    UnsupportedCurrencyRepresentation,
    #[error("Unknown field name")]
    UnknownFieldName,
    #[error("Could not read bytes into the requested type")]
    InvalidReadFromBytesValue,
    #[error("Variable length prefix exceeds the maximum encodable length of {max}")]
    InvalidVariableLengthTooLarge { max: usize },
    #[error("Invalid hash length (expected {expected}, found {found})")]
    InvalidHashLength { expected: usize, found: usize },
    #[error("Malformed field header")]
    MalformedHeader,
    #[error("Parser advanced past the end of the buffer")]
    UnexpectedEnd,
    #[error("Trailing bytes remain after decoding a complete top-level object")]
    UnexpectedTrailingBytes,
    #[error("Issued amount mantissa/exponent overflowed the canonical range")]
    OverflowAmount,
    #[error("Issued amount mantissa/exponent underflowed the canonical range")]
    UnderflowAmount,
    #[error("Native XRP amount is negative or exceeds 10^17 drops")]
    InvalidNativeAmount,
    #[error("Currency bytes do not match any canonical representation")]
    InvalidCurrencyCode,
    #[error("Path step flag byte does not select any field, or path separators are malformed")]
    InvalidPathSet,
    #[error("JSON value is not compatible with the field's declared type")]
    TypeMismatch,
    #[error("Hex decode error: {0}")]
    HexError(#[from] hex::FromHexError),
    #[error("XRPL type error: {0}")]
    XRPLTypeError(#[from] super::types::exceptions::XRPLTypeException),
}

#[cfg(feature = "std")]
impl alloc::error::Error for XRPLBinaryCodecException {}
