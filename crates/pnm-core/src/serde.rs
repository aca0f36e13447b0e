#![cfg(feature = "serde")]

use serde::ser::*;

use crate::format::{Encoding, Family, FormatTag};

impl Serialize for FormatTag
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        serializer.serialize_str(self.as_str())
    }
}

impl Serialize for Family
{
    #[allow(clippy::uninlined_format_args)]
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        // family serialization is simply it's debug value
        serializer.collect_str(&format_args!("{:?}", self))
    }
}

impl Serialize for Encoding
{
    #[allow(clippy::uninlined_format_args)]
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        serializer.collect_str(&format_args!("{:?}", self))
    }
}
