//! Form-level prompt builders for the three community tools.
//!
//! Each builder holds the raw form fields, checks them the same way the form
//! does, and turns them into a [`GenerationRequest`](crate::types::GenerationRequest).
//! Input problems come back as [`Error::Validation`](crate::Error::Validation)
//! carrying the message to show next to the form.
//!
//! | Tool | Builder | Requests |
//! |------|---------|----------|
//! | Event planner | [`EventPlanner`] | ideas (structured), logistics, sponsorship |
//! | Service exchange | [`ServiceListingDraft`] | listing description |
//! | Smart coordinator | [`Coordinator`] | open-ended plan, optional web search |

pub mod coordinator;
pub mod event_planner;
pub mod service_exchange;

pub use coordinator::Coordinator;
pub use event_planner::{EventPlanner, EventTool};
pub use service_exchange::{ServiceBoard, ServiceListingDraft};

use crate::{Error, ErrorContext, Result};

pub const APP_NAME: &str = "LocalHive";

pub const EVENT_TYPES: &[&str] = &[
    "Neighborhood Cleanup",
    "Local Festival",
    "Community Workshop",
    "Charity Fundraiser",
    "Block Party",
    "Skill-sharing Session",
];

pub const SERVICE_CATEGORIES: &[&str] = &[
    "Gardening",
    "Tutoring",
    "Dog Walking",
    "Tech Help",
    "Handyman",
    "Event Volunteering",
    "Babysitting",
    "Elderly Care",
    "Crafts",
    "Other",
];

pub(crate) fn require(value: &str, message: &str, field: &str, tool: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(Error::validation_with_context(
            message,
            ErrorContext::new().with_field_path(field).with_source(tool),
        ));
    }
    Ok(())
}
