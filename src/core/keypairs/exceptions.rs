//! XRPL keypair codec exceptions.

use crate::core::addresscodec::exceptions::XRPLAddressCodecException;

#[derive(Debug)]
#[non_exhaustive]
pub enum XRPLKeypairsException {
    InvalidSignature,
    AddressCodecException(XRPLAddressCodecException),
    HexError(hex::FromHexError),
}

impl From<XRPLAddressCodecException> for XRPLKeypairsException {
    fn from(err: XRPLAddressCodecException) -> Self {
        XRPLKeypairsException::AddressCodecException(err)
    }
}

impl From<hex::FromHexError> for XRPLKeypairsException {
    fn from(err: hex::FromHexError) -> Self {
        XRPLKeypairsException::HexError(err)
    }
}

#[cfg(feature = "std")]
impl alloc::error::Error for XRPLKeypairsException {}

#[cfg(feature = "std")]
impl alloc::fmt::Display for XRPLKeypairsException {
    fn fmt(&self, f: &mut alloc::fmt::Formatter<'_>) -> alloc::fmt::Result {
        write!(f, "XRPLKeypairsException: {:?}", self)
    }
}
