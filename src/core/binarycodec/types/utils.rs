//! Length constants shared by the fixed-width XRPL types.

/// Length in bytes of a Hash128 field.
pub const HASH128_LENGTH: usize = 16;
/// Length in bytes of a Hash160 field, and of an AccountID.
pub const HASH160_LENGTH: usize = 20;
/// Length in bytes of a Hash256 field.
pub const HASH256_LENGTH: usize = 32;
/// Length in bytes of a serialized Currency code.
pub const CURRENCY_CODE_LENGTH: usize = 20;
