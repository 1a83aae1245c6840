//! Exception for invalid XRP Ledger amount data.

use alloc::string::String;
use thiserror_no_std::Error;

#[derive(Debug, Clone, Error)]
#[non_exhaustive]
pub enum XRPRangeException {
    #[error("XRP amount {found} is below the minimum of {min}")]
    InvalidXRPAmountTooSmall { min: String, found: String },
    #[error("XRP amount {found} exceeds the maximum of {max}")]
    InvalidXRPAmountTooLarge { max: u64, found: u64 },
    #[error("Drops amount {found} exceeds the maximum of {max}")]
    InvalidDropsAmountTooLarge { max: String, found: String },
    #[error("Decimal error: {0}")]
    DecimalError(#[from] rust_decimal::Error),
}

#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum ISOCodeException {
    #[error("Invalid ISO currency code")]
    InvalidISOCode,
    #[error("Invalid ISO currency code length")]
    InvalidISOLength,
    #[error("Invalid XRP currency bytes")]
    InvalidXRPBytes,
    #[error("Currency representation is not supported")]
    UnsupportedCurrencyRepresentation,
    #[error("Hex decode error: {0}")]
    HexError(#[from] hex::FromHexError),
}

#[cfg(feature = "std")]
impl alloc::error::Error for XRPRangeException {}

#[cfg(feature = "std")]
impl alloc::error::Error for ISOCodeException {}
