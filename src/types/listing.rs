//! Domain payloads produced or consumed by the tools.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{Error, ErrorContext, Result};

/// One brainstormed event idea, as returned by the structured ideas prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct StructuredIdea {
    pub name: String,
    pub description: String,
}

/// Whether a listing offers a service or asks for one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListingKind {
    #[default]
    Offer,
    Need,
}

impl ListingKind {
    /// Human label used in prompts.
    pub fn label(&self) -> &'static str {
        match self {
            ListingKind::Offer => "Service Offered",
            ListingKind::Need => "Service Needed",
        }
    }
}

impl std::fmt::Display for ListingKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            ListingKind::Offer => "offer",
            ListingKind::Need => "need",
        })
    }
}

impl std::str::FromStr for ListingKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "offer" => Ok(ListingKind::Offer),
            "need" => Ok(ListingKind::Need),
            _ => Err(format!("Unknown listing kind: {}", s)),
        }
    }
}

/// A service exchange entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceListing {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: ListingKind,
    pub title: String,
    pub description: String,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact: Option<String>,
}

impl ServiceListing {
    /// Every field except `contact` must be filled in.
    pub fn validate(&self) -> Result<()> {
        let missing = [
            ("title", &self.title),
            ("description", &self.description),
            ("category", &self.category),
        ]
        .into_iter()
        .find(|(_, v)| v.trim().is_empty());

        match missing {
            Some((field, _)) => Err(Error::validation_with_context(
                "Please fill in all fields for the listing.",
                ErrorContext::new()
                    .with_field_path(format!("listing.{}", field))
                    .with_source("service_exchange"),
            )),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listing_kind_roundtrip_str() {
        assert_eq!("offer".parse::<ListingKind>().unwrap(), ListingKind::Offer);
        assert_eq!("need".parse::<ListingKind>().unwrap(), ListingKind::Need);
        assert!("swap".parse::<ListingKind>().is_err());
        assert_eq!(ListingKind::Need.to_string(), "need");
    }

    #[test]
    fn test_listing_serializes_kind_as_type() {
        let listing = ServiceListing {
            id: "1".into(),
            kind: ListingKind::Need,
            title: "Help moving a couch".into(),
            description: "Saturday morning, two people".into(),
            category: "Handyman".into(),
            contact: None,
        };
        let v = serde_json::to_value(&listing).unwrap();
        assert_eq!(v["type"], "need");
        assert!(v.get("contact").is_none());
    }

    #[test]
    fn test_listing_validation_names_missing_field() {
        let listing = ServiceListing {
            id: "1".into(),
            kind: ListingKind::Offer,
            title: "Guitar lessons".into(),
            description: " ".into(),
            category: "Tutoring".into(),
            contact: None,
        };
        let err = listing.validate().unwrap_err();
        assert_eq!(
            err.context().and_then(|c| c.field_path.as_deref()),
            Some("listing.description")
        );
    }
}
