//! # localhive
//!
//! Generation core for the LocalHive community tools: prompt construction,
//! a single-shot request dispatcher for the Gemini generative-text API, and a
//! response normalizer with typed failures.
//!
//! ## Overview
//!
//! A UI collects form fields, a tool builder turns them into a
//! [`GenerationRequest`], the [`Dispatcher`] sends it, and the normalizer
//! turns the reply into either `{text, sources}` or a validated structured
//! value. Fetching and interpreting are separate steps, so the same
//! dispatcher serves free-text and structured use cases.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use localhive::tools::Coordinator;
//! use localhive::Dispatcher;
//!
//! #[tokio::main]
//! async fn main() -> localhive::Result<()> {
//!     let dispatcher = Dispatcher::from_env()?;
//!
//!     let request = Coordinator::new("Start a tool library on our street")
//!         .web_search(true)
//!         .request()?;
//!     let result = dispatcher.generate_text(&request).await?;
//!
//!     println!("{}", result.text);
//!     for source in &result.sources {
//!         println!("- {} ({})", source.label(), source.uri);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`client`] | Dispatcher and its builder |
//! | [`transport`] | Backend seam and the HTTP implementation |
//! | [`drivers`] | Gemini REST wire format |
//! | [`normalize`] | Text and structured response normalization |
//! | [`structured`] | Shape validators for structured payloads |
//! | [`tools`] | Form-level prompt builders |
//! | [`state`] | Per-tool transient state and text fallback |
//! | [`types`] | Request, response and domain types |
//! | [`config`] | Environment-driven configuration |

pub mod client;
pub mod config;
pub mod drivers;
pub mod normalize;
pub mod state;
pub mod structured;
pub mod tools;
pub mod transport;
pub mod types;

// Re-export main types for convenience
pub use client::{Dispatcher, DispatcherBuilder};
pub use config::{GeminiConfig, GEMINI_TEXT_MODEL};
pub use normalize::{normalize_structured, normalize_text, strip_code_fence};
pub use state::{generate_with_fallback, StructuredOrText, ToolState};
pub use transport::{Backend, BackendFailure, HttpBackend};
pub use types::{
    GenerateContentParams, GenerationRequest, GenerationResult, RawResponse, Source,
    StructuredIdea,
};

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the library
pub mod error;
pub use error::{Error, ErrorContext};
