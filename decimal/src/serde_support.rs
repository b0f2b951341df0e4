//! `serde` support for [`BigDecimal`], mirrored from `exactum-integer`'s
//! canonical-string approach: `Display`/`parse` already round-trip exactly,
//! so the wire form is just that string.

use alloc::string::String;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::BigDecimal;

impl Serialize for BigDecimal {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for BigDecimal {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        BigDecimal::parse(&s).map_err(de::Error::custom)
    }
}
