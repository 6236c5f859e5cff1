//! Strongly-typed identifiers used across the storefront.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Server-assigned product reference (e.g. `"AFG-P001"`).
///
/// Primary key for detail lookups and the base of cart line identity.
/// Always trimmed and never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ProductReference(String);

impl ProductReference {
    pub fn new(raw: impl AsRef<str>) -> Result<Self, DomainError> {
        let trimmed = raw.as_ref().trim();
        if trimmed.is_empty() {
            return Err(DomainError::invalid_reference("reference cannot be empty"));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for ProductReference {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for ProductReference {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for ProductReference {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ProductReference> for String {
    fn from(value: ProductReference) -> Self {
        value.0
    }
}

impl AsRef<str> for ProductReference {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_is_trimmed() {
        let reference: ProductReference = "  AFG-P001 ".parse().unwrap();
        assert_eq!(reference.as_str(), "AFG-P001");
        assert_eq!(reference.to_string(), "AFG-P001");
    }

    #[test]
    fn blank_reference_is_rejected() {
        let err = ProductReference::new("   ").unwrap_err();
        match err {
            DomainError::InvalidReference(_) => {}
            _ => panic!("Expected InvalidReference error for blank reference"),
        }
    }

    #[test]
    fn reference_serializes_as_plain_string() {
        let reference = ProductReference::new("AFG-P001").unwrap();
        let json = serde_json::to_string(&reference).unwrap();
        assert_eq!(json, "\"AFG-P001\"");

        let back: ProductReference = serde_json::from_str(&json).unwrap();
        assert_eq!(back, reference);
        assert!(serde_json::from_str::<ProductReference>("\"\"").is_err());
    }
}
