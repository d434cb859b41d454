//! Core type definitions shared by the dispatcher, normalizer and tools.
//!
//! | Type | Description |
//! |------|-------------|
//! | [`GenerationRequest`] | One user action's prompt, instruction and mode flags |
//! | [`GenerateContentParams`] | Outbound payload handed to the backend |
//! | [`RawResponse`] | Boundary type every backend reply is mapped into |
//! | [`GenerationResult`] | Normalized text plus citations |
//! | [`StructuredIdea`] | Structured event idea payload |
//! | [`ServiceListing`] | Service exchange entry |

pub mod listing;
pub mod request;
pub mod response;

pub use listing::{ListingKind, ServiceListing, StructuredIdea};
pub use request::{
    GenerateContentConfig, GenerateContentParams, GenerationRequest, GoogleSearch, Tool,
    JSON_MIME_TYPE,
};
pub use response::{
    Candidate, GenerationResult, GroundingChunk, GroundingMetadata, RawResponse, Source,
    WebSource,
};
