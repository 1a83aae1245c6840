//! Codec for the `Issue` field: a bare currency, or a currency plus its
//! issuing account. Used standalone (e.g. inside an AMM ledger entry) and
//! as a component of [`super::XChainBridge`].

use alloc::string::String;
use alloc::string::ToString;
use alloc::vec;
use alloc::vec::Vec;
use core::convert::TryFrom;
use serde_json::{Map, Value};

use crate::core::exceptions::{XRPLCoreException, XRPLCoreResult};
use crate::core::BinaryParser;

use crate::constants::ACCOUNT_ID_LENGTH;

use super::currency::CURRENCY_CODE_LENGTH;
use super::{AccountId, Currency, TryFromParser, XRPLType};

const CURRENCY: &str = "currency";
const ISSUER: &str = "issuer";

/// Codec for an `Issue`: either a native-XRP currency (20 bytes) or a
/// currency code plus issuing account (40 bytes).
///
/// See Issue Fields:
/// `<https://xrpl.org/serialization.html#issue-fields>`
#[derive(Debug, Clone)]
pub struct Issue(Vec<u8>);

impl Issue {
    fn is_native(&self) -> bool {
        self.0.len() == CURRENCY_CODE_LENGTH
    }

    /// Render this Issue as its canonical JSON form: the string `"XRP"`
    /// for the native currency, or `{currency, issuer}` otherwise.
    pub fn to_json(&self) -> XRPLCoreResult<Value> {
        if self.is_native() {
            Ok(Value::String("XRP".to_string()))
        } else {
            let currency = Currency::new(Some(&self.0[..CURRENCY_CODE_LENGTH]))?;
            let issuer = AccountId::new(Some(&self.0[CURRENCY_CODE_LENGTH..]))?;
            let mut map = Map::new();
            map.insert(CURRENCY.to_string(), Value::String(currency.to_string()));
            map.insert(ISSUER.to_string(), Value::String(issuer.to_string()));
            Ok(Value::Object(map))
        }
    }
}

impl XRPLType for Issue {
    type Error = XRPLCoreException;

    fn new(buffer: Option<&[u8]>) -> XRPLCoreResult<Self, Self::Error> {
        Ok(Issue(
            buffer
                .map(|b| b.to_vec())
                .unwrap_or_else(|| vec![0; CURRENCY_CODE_LENGTH]),
        ))
    }
}

impl TryFromParser for Issue {
    type Error = XRPLCoreException;

    /// Read a Currency (20 bytes); if it is not the native code, read a
    /// further AccountID (20 bytes) as the issuer.
    fn from_parser(
        parser: &mut BinaryParser,
        _length: Option<usize>,
    ) -> XRPLCoreResult<Self, Self::Error> {
        let currency = Currency::from_parser(parser, Some(CURRENCY_CODE_LENGTH))?;
        if currency.is_native() {
            Ok(Issue(currency.as_ref().to_vec()))
        } else {
            let issuer = AccountId::from_parser(parser, Some(ACCOUNT_ID_LENGTH))?;
            let mut buf = currency.as_ref().to_vec();
            buf.extend_from_slice(issuer.as_ref());
            Ok(Issue(buf))
        }
    }
}

impl TryFrom<Value> for Issue {
    type Error = XRPLCoreException;

    /// Construct an Issue from the string `"XRP"` or a
    /// `{currency, issuer}` object.
    fn try_from(value: Value) -> XRPLCoreResult<Self, Self::Error> {
        if let Some(code) = value.as_str() {
            let currency = Currency::try_from(code)?;
            Ok(Issue(currency.as_ref().to_vec()))
        } else if let Some(obj) = value.as_object() {
            let currency = obj
                .get(CURRENCY)
                .and_then(Value::as_str)
                .ok_or(super::exceptions::XRPLTypeException::UnexpectedJSONType)?;
            let issuer = obj
                .get(ISSUER)
                .and_then(Value::as_str)
                .ok_or(super::exceptions::XRPLTypeException::UnexpectedJSONType)?;
            let currency = Currency::try_from(currency)?;
            let issuer = AccountId::try_from(issuer)?;
            let mut buf = currency.as_ref().to_vec();
            buf.extend_from_slice(issuer.as_ref());
            Ok(Issue(buf))
        } else {
            Err(super::exceptions::XRPLTypeException::UnexpectedJSONType.into())
        }
    }
}

impl TryFrom<&str> for Issue {
    type Error = XRPLCoreException;

    /// Construct an Issue from its raw hex wire form (20 or 40 bytes).
    fn try_from(value: &str) -> XRPLCoreResult<Self, Self::Error> {
        Ok(Issue(hex::decode(value)?))
    }
}

impl AsRef<[u8]> for Issue {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use alloc::vec;
    use serde_json::json;

    #[test]
    fn test_issue_native_round_trip() {
        let issue = Issue::try_from(json!("XRP")).unwrap();
        assert_eq!(CURRENCY_CODE_LENGTH, issue.as_ref().len());
        assert_eq!(json!("XRP"), issue.to_json().unwrap());
    }

    #[test]
    fn test_issue_currency_round_trip() {
        let value = json!({
            "currency": "USD",
            "issuer": "rU4EE5NgLG5dVfR8cYYGQoKkE2ZFtrhyzk",
        });
        let issue = Issue::try_from(value.clone()).unwrap();
        assert_eq!(CURRENCY_CODE_LENGTH * 2, issue.as_ref().len());
        assert_eq!(value, issue.to_json().unwrap());
    }

    #[test]
    fn test_issue_from_parser_native() {
        let mut parser = BinaryParser::from(vec![0u8; CURRENCY_CODE_LENGTH]);
        let issue = Issue::from_parser(&mut parser, None).unwrap();
        assert!(parser.is_empty());
        assert_eq!(json!("XRP"), issue.to_json().unwrap());
    }
}
