//! `serde` support for [`BigRational`], mirrored from the integer and
//! decimal crates' canonical-string approach.

use alloc::string::String;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::BigRational;

impl Serialize for BigRational {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&alloc::format!("{}/{}", self.numerator(), self.denominator()))
    }
}

impl<'de> Deserialize<'de> for BigRational {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        BigRational::parse(&s).map_err(de::Error::custom)
    }
}
