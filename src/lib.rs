#![no_std]
#![allow(dead_code)] // Remove eventually

#[cfg(not(feature = "std"))]
extern crate alloc;
#[cfg(feature = "std")]
extern crate std as alloc;

pub mod constants;
#[cfg(feature = "core")]
pub mod core;
pub mod utils;

/// Alias for the serde_json error type wrapped by [`core::exceptions::XRPLCoreException`].
pub type XRPLSerdeJsonError = serde_json::Error;
