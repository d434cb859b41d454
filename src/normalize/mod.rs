//! Response normalization.
//!
//! Turns a [`RawResponse`](crate::types::RawResponse) into something a tool
//! can render. Two entry points, chosen by the caller:
//!
//! | Function | Output | Fails |
//! |----------|--------|-------|
//! | [`normalize_text`] | text plus citations | never |
//! | [`normalize_structured`] | validated `T` | `MalformedPayload` |
//!
//! Neither function touches the network, so both are tested in isolation.

pub mod fence;
pub mod structured;
pub mod text;

pub use fence::strip_code_fence;
pub use structured::normalize_structured;
pub use text::{extract_sources, normalize_text};
