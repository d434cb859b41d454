//! Shape validation for structured output.
//!
//! Provides the validators a caller hands to
//! [`normalize_structured`](crate::normalize::normalize_structured):
//! - `RequiredFields`: every element carries the listed keys
//! - `SchemaValidator`: JSON Schema validation, derivable from a Rust type
//! - `ValidationError`: one violation with its location
//!
//! # Examples
//!
//! ```
//! use localhive::structured::{RequiredFields, ShapeValidator};
//! use serde_json::json;
//!
//! let validator = RequiredFields::new(["name", "description"]);
//! let data = json!([{"name": "Cleanup Day", "description": "Bring gloves"}]);
//!
//! assert!(validator.validate(&data).is_ok());
//! ```

pub mod error;
pub mod validator;

pub use error::{join_errors, ValidationError};
pub use validator::{json_schema_for, RequiredFields, SchemaValidator, ShapeValidator};
