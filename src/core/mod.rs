//! Core codec functions for interacting with the XRPL.

pub mod addresscodec;
pub mod binarycodec;
pub mod definitions;
pub mod exceptions;
pub mod keypairs;

pub use binarycodec::{BinaryParser, Parser};
