//! Backend wire-format drivers.
//!
//! A driver owns the translation between the crate's boundary types and one
//! backend's REST shape. Only Gemini is wired up.

pub mod gemini;

pub use gemini::GeminiDriver;
