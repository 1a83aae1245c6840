//! A small set of known-good field-name/header hex pairs, used to exercise
//! [`super::utils::encode_field_name`] and [`super::utils::decode_field_name`]
//! without depending on an external fixture asset.

use alloc::string::{String, ToString};
use alloc::vec;
use alloc::vec::Vec;

/// One (field name, expected header hex) pair.
#[derive(Debug, Clone)]
pub struct FieldTest {
    pub name: String,
    pub expected_hex: String,
}

/// Field name/header pairs spanning the single-byte, two-byte (type<16,
/// field>=16 and type>=16, field<16) header encodings.
pub fn load_field_tests() -> Vec<FieldTest> {
    vec![
        ("TransactionType", "12"),
        ("Flags", "22"),
        ("SourceTag", "23"),
        ("Sequence", "24"),
        ("LedgerSequence", "26"),
        ("Expiration", "2A"),
        ("Fee", "68"),
        ("Account", "81"),
        ("Memo", "EA"),
        ("Signers", "F3"),
    ]
    .into_iter()
    .map(|(name, expected_hex)| FieldTest {
        name: name.to_string(),
        expected_hex: expected_hex.to_string(),
    })
    .collect()
}
