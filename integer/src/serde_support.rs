//! `serde` support for [`BigInteger`], grounded in `dashu-int`'s
//! `third_party/serde.rs` pattern of a human-readable string form plus a
//! compact binary form — simplified here to always use the canonical
//! decimal string, since `BigInteger`'s `Display` already is that
//! canonical form and a single encoding keeps the wire format legible in
//! both the human-readable and binary cases.

use alloc::string::String;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::BigInteger;

impl Serialize for BigInteger {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for BigInteger {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        BigInteger::parse(&s).map_err(de::Error::custom)
    }
}
