use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{require, SERVICE_CATEGORIES};
use crate::types::{GenerationRequest, GenerationResult, ListingKind, ServiceListing};
use crate::Result;

const LISTING_INSTRUCTION: &str =
    "You are an AI assistant helping community members write effective service exchange listings.";

/// The "post a listing" form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceListingDraft {
    pub kind: ListingKind,
    pub title: String,
    pub category: String,
    pub description: String,
}

impl Default for ServiceListingDraft {
    fn default() -> Self {
        Self {
            kind: ListingKind::Offer,
            title: String::new(),
            category: SERVICE_CATEGORIES[0].to_string(),
            description: String::new(),
        }
    }
}

impl ServiceListingDraft {
    pub fn new(kind: ListingKind, title: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Ask for a 2-4 sentence description. An existing draft description is
    /// passed along to be improved.
    pub fn description_request(&self) -> Result<GenerationRequest> {
        require(
            &self.title,
            "Please provide a title for your service/need first.",
            "title",
            "service_exchange",
        )?;

        let mut prompt = format!(
            "Help me write a compelling and friendly description for a community service listing.\nType of listing: {}\nTitle: \"{}\"\nCategory: \"{}\"\n",
            self.kind.label(),
            self.title,
            self.category
        );
        if !self.description.trim().is_empty() {
            prompt.push_str(&format!(
                "Current draft of description (optional, improve this): \"{}\"\n",
                self.description
            ));
        }
        prompt.push_str(
            "\nPlease generate a concise (2-4 sentences) and appealing description. Focus on clarity and a positive tone.",
        );

        Ok(GenerationRequest::new(prompt).system_instruction(LISTING_INSTRUCTION))
    }

    /// Adopt a generated description, ignoring an empty one.
    pub fn apply_suggestion(&mut self, suggestion: &GenerationResult) {
        if !suggestion.text.trim().is_empty() {
            self.description = suggestion.text.clone();
        }
    }

    /// Validate and turn the draft into a listing with a fresh id.
    pub fn into_listing(self) -> Result<ServiceListing> {
        let listing = ServiceListing {
            id: Uuid::new_v4().to_string(),
            kind: self.kind,
            title: self.title,
            description: self.description,
            category: self.category,
            contact: None,
        };
        listing.validate()?;
        Ok(listing)
    }
}

/// In-memory listing board, newest first. Lives as long as the page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceBoard {
    listings: Vec<ServiceListing>,
}

impl ServiceBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn listings(&self) -> &[ServiceListing] {
        &self.listings
    }

    pub fn len(&self) -> usize {
        self.listings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }

    /// Post a draft. On validation failure the board is unchanged.
    pub fn post(&mut self, draft: ServiceListingDraft) -> Result<&ServiceListing> {
        let listing = draft.into_listing()?;
        self.listings.insert(0, listing);
        Ok(&self.listings[0])
    }

    pub fn by_kind(&self, kind: ListingKind) -> impl Iterator<Item = &ServiceListing> {
        self.listings.iter().filter(move |l| l.kind == kind)
    }
}
