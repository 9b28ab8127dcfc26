//! Validated item names.

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};
use crate::value_object::ValueObject;

/// Name of a stock item (the inventory table key).
///
/// Never empty and never whitespace-only.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ItemName(String);

impl ItemName {
    pub fn parse(raw: impl Into<String>) -> DomainResult<Self> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }
        Ok(Self(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl ValueObject for ItemName {}

impl core::fmt::Display for ItemName {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ItemName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl core::borrow::Borrow<str> for ItemName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ItemName {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl TryFrom<&str> for ItemName {
    type Error = DomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<ItemName> for String {
    fn from(value: ItemName) -> Self {
        value.0
    }
}
