//! Functions for encoding objects into the XRP Ledger's
//! canonical binary format and decoding them.

pub mod types;

use types::{AccountId, Amount, Hash256, STObject};

use alloc::{borrow::Cow, string::String, vec::Vec};
use core::convert::TryFrom;
use hex::ToHex;
use serde::Serialize;

pub mod binary_wrappers;
pub mod exceptions;
pub(crate) mod test_cases;
pub mod utils;

pub use binary_wrappers::*;

use crate::XRPLSerdeJsonError;

use super::exceptions::XRPLCoreResult;

const TRANSACTION_SIGNATURE_PREFIX: i32 = 0x53545800;
const TRANSACTION_MULTISIG_PREFIX: i32 = 0x534D5400;
const PAYMENT_CHANNEL_CLAIM_PREFIX: i32 = 0x434C4D00;

pub fn encode<T>(signed_transaction: &T) -> XRPLCoreResult<String>
where
    T: Serialize,
{
    serialize_json(signed_transaction, None, None, false)
}

pub fn encode_for_signing<T>(prepared_transaction: &T) -> XRPLCoreResult<String>
where
    T: Serialize,
{
    serialize_json(
        prepared_transaction,
        Some(TRANSACTION_SIGNATURE_PREFIX.to_be_bytes().as_ref()),
        None,
        true,
    )
}

pub fn encode_for_multisigning<T>(
    prepared_transaction: &T,
    signing_account: Cow<'_, str>,
) -> XRPLCoreResult<String>
where
    T: Serialize,
{
    let signing_account_id = AccountId::try_from(signing_account.as_ref()).unwrap();

    serialize_json(
        prepared_transaction,
        Some(TRANSACTION_MULTISIG_PREFIX.to_be_bytes().as_ref()),
        Some(signing_account_id.as_ref()),
        true,
    )
}

/// Decode a canonical binary-encoded hex string back into its JSON
/// representation.
///
/// ```
/// use xrpl::core::binarycodec::{decode, encode};
/// use serde_json::json;
///
/// let tx = json!({
///     "Account": "raD5qJMAShLeHZXf9wjUmo6vRK4arj9cF3",
///     "Fee": "10",
///     "Flags": 0,
///     "Sequence": 103929,
///     "SigningPubKey": "028472865AF4CB32AA285834B57576B7290AA8C31B459047DB27E16F418D6A7166",
///     "TakerGets": {
///         "value": "1694.768",
///         "currency": "ILS",
///         "issuer": "rNPRNzBB92BVpAhhZr4iXDTveCgV5Pofm9"
///     },
///     "TakerPays": "98957503520",
///     "TransactionType": "OfferCreate",
///     "TxnSignature": "304502202ABE08D5E78D1E74A4C18F2714F64E87B8BD57444AFA5733109EB3C077077520022100DB335EE97386E4C0591CAC024D50E9230D8F171EEB901B5E5E4BD6D1E0AEF98C"
/// });
/// let hex = encode(&tx).unwrap();
/// let decoded = decode(&hex).unwrap();
/// let decoded: serde_json::Value = serde_json::from_str(&decoded).unwrap();
///
/// assert_eq!(decoded["Account"], "raD5qJMAShLeHZXf9wjUmo6vRK4arj9cF3");
/// assert_eq!(decoded["TransactionType"], "OfferCreate");
/// ```
pub fn decode(serialized: &str) -> XRPLCoreResult<String> {
    let bytes = hex::decode(serialized)?;
    let mut parser = BinaryParser::from(bytes);
    let value = STObject::from_parser(&mut parser, false)?;

    serde_json::to_string(&value)
        .map_err(XRPLSerdeJsonError::from)
        .map_err(Into::into)
}

/// Encode a payment channel claim for signing, per
/// `<https://xrpl.org/payment-channels.html#claims>`.
///
/// `amount` is the claimed amount in drops.
///
/// ```
/// use xrpl::core::binarycodec::encode_for_signing_claim;
///
/// let channel = "43904CBFCDCEC530B4037871F86EE90BF50F1FD658312B9041D12B9D9B8E36B";
/// let hex = encode_for_signing_claim(channel, "1000000").unwrap();
///
/// assert!(hex.starts_with("434C4D00"));
/// ```
pub fn encode_for_signing_claim(channel: &str, amount: &str) -> XRPLCoreResult<String> {
    let mut buffer = Vec::new();
    buffer.extend(PAYMENT_CHANNEL_CLAIM_PREFIX.to_be_bytes());
    buffer.extend(Hash256::try_from(channel)?.as_ref());
    buffer.extend(Amount::try_from(amount)?.as_ref());

    Ok(buffer.encode_hex_upper::<String>())
}

fn serialize_json<T>(
    prepared_transaction: &T,
    prefix: Option<&[u8]>,
    suffix: Option<&[u8]>,
    signing_only: bool,
) -> XRPLCoreResult<String>
where
    T: Serialize,
{
    let mut buffer = Vec::new();
    if let Some(p) = prefix {
        buffer.extend(p);
    }

    let json_value =
        serde_json::to_value(prepared_transaction).map_err(XRPLSerdeJsonError::from)?;
    let st_object = STObject::try_from_value(json_value, signing_only)?;
    buffer.extend(st_object.as_ref());

    if let Some(s) = suffix {
        buffer.extend(s);
    }
    let hex_string = buffer.encode_hex_upper::<String>();

    Ok(hex_string)
}
