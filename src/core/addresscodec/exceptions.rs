//! General XRPL Address Codec Exception.

use thiserror_no_std::Error;

#[derive(Debug, Clone, Error)]
#[non_exhaustive]
pub enum XRPLAddressCodecException {
    #[error("Invalid X-Address prefix")]
    InvalidXAddressPrefix,
    #[error("Unsupported X-Address")]
    UnsupportedXAddress,
    #[error("X-Address has a zero-value tag but claims one is present")]
    InvalidXAddressZeroNoTag,
    #[error("X-Address zero tag bytes are not all zero")]
    InvalidXAddressZeroRemain,
    #[error("Classic address has invalid length {length}")]
    InvalidCAddressIdLength { length: usize },
    #[error("Classic address tag is invalid")]
    InvalidCAddressTag,
    #[error("Encoding prefix has invalid length")]
    InvalidEncodingPrefixLength,
    #[error("Expected payload length {expected}, found {found}")]
    UnexpectedPayloadLength { expected: usize, found: usize },
    #[error("Classic address value is invalid")]
    InvalidClassicAddressValue,
    #[error("Base58 decode error: {0}")]
    Base58DecodeError(#[from] bs58::decode::Error),
    #[error("Hex decode error: {0}")]
    HexError(#[from] hex::FromHexError),
}

#[cfg(feature = "std")]
impl alloc::error::Error for XRPLAddressCodecException {}
