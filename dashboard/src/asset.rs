use std::borrow::Cow;
use std::fmt;
use std::ops::Deref;
use std::str::Utf8Error;
use std::string::FromUtf8Error;

use crate::region::EmbeddedRegion;

/// Owned copy of an embedded region.
///
/// Shares nothing with the region it came from. Bytes are kept verbatim, zeros included; text
/// access goes through UTF-8 validation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AssetString {
    bytes: Vec<u8>,
}

impl AssetString {
    pub fn from_region(region: &EmbeddedRegion) -> Self {
        Self {
            bytes: region.as_bytes().to_vec(),
        }
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn as_str(&self) -> Result<&str, Utf8Error> {
        std::str::from_utf8(&self.bytes)
    }

    pub fn to_string_lossy(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.bytes)
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    pub fn into_string(self) -> Result<String, FromUtf8Error> {
        String::from_utf8(self.bytes)
    }
}

impl Deref for AssetString {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        &self.bytes
    }
}

impl AsRef<[u8]> for AssetString {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl From<AssetString> for Vec<u8> {
    fn from(asset: AssetString) -> Self {
        asset.bytes
    }
}

impl fmt::Display for AssetString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_lossy())
    }
}

impl PartialEq<[u8]> for AssetString {
    fn eq(&self, other: &[u8]) -> bool {
        self.bytes == other
    }
}

impl PartialEq<&[u8]> for AssetString {
    fn eq(&self, other: &&[u8]) -> bool {
        self.bytes == *other
    }
}

impl PartialEq<str> for AssetString {
    fn eq(&self, other: &str) -> bool {
        self.bytes == other.as_bytes()
    }
}

impl PartialEq<&str> for AssetString {
    fn eq(&self, other: &&str) -> bool {
        self.bytes == other.as_bytes()
    }
}
