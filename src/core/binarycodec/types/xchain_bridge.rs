//! Codec for the `XChainBridge` field: the four accounts/currencies that
//! identify a cross-chain bridge (a locking-chain door account and issue,
//! and an issuing-chain door account and issue).
//!
//! See XChainBridge Fields:
//! `<https://xrpl.org/serialization.html#xchainbridge-fields>`

use alloc::string::ToString;
use alloc::vec::Vec;
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::core::{
    exceptions::{XRPLCoreException, XRPLCoreResult},
    BinaryParser, Parser,
};

use super::{
    exceptions::XRPLXChainBridgeException, AccountId, Issue, SerializedType, TryFromParser,
    XRPLType,
};

/// Marker byte preceding each AccountID component: the 1-byte
/// variable-length prefix for a 20-byte value.
const ACCOUNT_ID_MARKER: u8 = 0x14;

const TYPE_ORDER: [[&str; 2]; 4] = [
    ["LockingChainDoor", "AccountID"],
    ["LockingChainIssue", "Issue"],
    ["IssuingChainDoor", "AccountID"],
    ["IssuingChainIssue", "Issue"],
];

/// Codec for serializing and deserializing XChainBridge fields.
#[derive(Debug, Deserialize, Clone)]
pub struct XChainBridge(SerializedType);

impl XChainBridge {
    /// Render this XChainBridge as its
    /// `{LockingChainDoor, LockingChainIssue, IssuingChainDoor, IssuingChainIssue}`
    /// JSON object.
    pub fn to_json(&self) -> XRPLCoreResult<Value> {
        let mut parser = BinaryParser::from(self.0.as_ref());
        let mut map = Map::new();

        for [name, object_type] in TYPE_ORDER {
            let value = match object_type {
                "AccountID" => {
                    let marker = parser.read_uint8()?;
                    if marker != ACCOUNT_ID_MARKER {
                        return Err(XRPLXChainBridgeException::InvalidXChainBridgeType.into());
                    }
                    AccountId::from_parser(&mut parser, None)?.to_json()
                }
                "Issue" => Issue::from_parser(&mut parser, None)?.to_json()?,
                _ => unreachable!(),
            };
            map.insert(name.to_string(), value);
        }

        Ok(Value::Object(map))
    }
}

impl XRPLType for XChainBridge {
    type Error = XRPLCoreException;

    fn new(buffer: Option<&[u8]>) -> XRPLCoreResult<Self, Self::Error>
    where
        Self: Sized,
    {
        if let Some(buf) = buffer {
            Ok(XChainBridge(SerializedType::from(buf.to_vec())))
        } else {
            Ok(XChainBridge(SerializedType::from(Vec::new())))
        }
    }
}

impl TryFromParser for XChainBridge {
    type Error = XRPLCoreException;

    fn from_parser(
        parser: &mut BinaryParser,
        _length: Option<usize>,
    ) -> XRPLCoreResult<Self, Self::Error> {
        let mut buf = Vec::new();

        for [_, object_type] in TYPE_ORDER {
            match object_type {
                "AccountID" => {
                    let marker = parser.read_uint8()?;
                    if marker != ACCOUNT_ID_MARKER {
                        return Err(XRPLXChainBridgeException::InvalidXChainBridgeType.into());
                    }
                    buf.push(ACCOUNT_ID_MARKER);

                    let account_id = AccountId::from_parser(parser, None)?;
                    buf.extend_from_slice(account_id.as_ref());
                }
                "Issue" => {
                    let issue = Issue::from_parser(parser, None)?;
                    buf.extend_from_slice(issue.as_ref());
                }
                _ => unreachable!(),
            };
        }

        Ok(XChainBridge(SerializedType::from(buf)))
    }
}

impl TryFrom<Value> for XChainBridge {
    type Error = XRPLCoreException;

    fn try_from(value: Value) -> XRPLCoreResult<Self, Self::Error> {
        if !value.is_object() {
            return Err(XRPLXChainBridgeException::InvalidXChainBridgeType.into());
        }
        let mut buf = Vec::new();
        for [name, object_type] in TYPE_ORDER {
            let obj_value = value
                .get(name)
                .ok_or(XRPLXChainBridgeException::InvalidXChainBridgeType)?;
            match object_type {
                "AccountID" => {
                    buf.push(ACCOUNT_ID_MARKER);
                    let account_id = AccountId::try_from(
                        obj_value
                            .as_str()
                            .ok_or(XRPLXChainBridgeException::InvalidXChainBridgeType)?,
                    )?;
                    buf.extend_from_slice(account_id.as_ref());
                }
                "Issue" => {
                    let issue = Issue::try_from(obj_value.clone())?;
                    buf.extend_from_slice(issue.as_ref());
                }
                _ => unreachable!(),
            };
        }

        Ok(XChainBridge(SerializedType::from(buf)))
    }
}

impl TryFrom<&str> for XChainBridge {
    type Error = XRPLCoreException;

    fn try_from(value: &str) -> XRPLCoreResult<Self, Self::Error> {
        Ok(XChainBridge(SerializedType::from(hex::decode(value)?)))
    }
}

impl AsRef<[u8]> for XChainBridge {
    fn as_ref(&self) -> &[u8] {
        self.0.as_ref()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use serde_json::json;

    const DOOR_A: &str = "rU4EE5NgLG5dVfR8cYYGQoKkE2ZFtrhyzk";
    const DOOR_B: &str = "rweYz56rfmQ98cAdRaeTxQS9wVMGnrdsFp";

    fn sample_json() -> Value {
        json!({
            "LockingChainDoor": DOOR_A,
            "LockingChainIssue": "XRP",
            "IssuingChainDoor": DOOR_B,
            "IssuingChainIssue": "XRP",
        })
    }

    #[test]
    fn test_xchain_bridge_round_trip_via_json() {
        let input = sample_json();
        let bridge = XChainBridge::try_from(input.clone()).unwrap();

        assert_eq!(input, bridge.to_json().unwrap());
    }

    #[test]
    fn test_xchain_bridge_from_parser_matches_bytes() {
        let input = sample_json();
        let encoded = XChainBridge::try_from(input.clone()).unwrap();
        let mut parser = BinaryParser::from(encoded.as_ref());
        let decoded = XChainBridge::from_parser(&mut parser, None).unwrap();

        assert!(parser.is_end());
        assert_eq!(encoded.as_ref(), decoded.as_ref());
        assert_eq!(input, decoded.to_json().unwrap());
    }

    #[test]
    fn test_xchain_bridge_rejects_bad_marker() {
        let mut bytes = XChainBridge::try_from(sample_json()).unwrap().as_ref().to_vec();
        bytes[0] = 0x00;
        let mut parser = BinaryParser::from(bytes);

        assert!(XChainBridge::from_parser(&mut parser, None).is_err());
    }
}
