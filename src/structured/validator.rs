//! Shape validators for structured payloads.
//!
//! A validator looks at an already-parsed JSON value and decides whether it
//! has the shape the caller expects. Three flavours:
//! - [`RequiredFields`]: every element carries a fixed set of keys
//! - [`SchemaValidator`]: full JSON Schema, optionally derived from a Rust type
//! - any `Fn(&Value) -> Result<(), String>` closure

use jsonschema::JSONSchema;
use schemars::JsonSchema;
use serde_json::Value;

use crate::structured::error::ValidationError;
use crate::{Error, ErrorContext, Result};

pub trait ShapeValidator: Send + Sync {
    fn validate(&self, value: &Value) -> std::result::Result<(), Vec<ValidationError>>;
}

impl<F> ShapeValidator for F
where
    F: Fn(&Value) -> std::result::Result<(), String> + Send + Sync,
{
    fn validate(&self, value: &Value) -> std::result::Result<(), Vec<ValidationError>> {
        self(value).map_err(|msg| vec![ValidationError::without_path(msg)])
    }
}

/// Accepts an object, or an array of objects, where each object has every
/// listed field present, non-null and not an empty string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequiredFields {
    fields: Vec<String>,
}

impl RequiredFields {
    pub fn new<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            fields: fields.into_iter().map(Into::into).collect(),
        }
    }

    /// Fields of a [`StructuredIdea`](crate::types::StructuredIdea).
    pub fn idea() -> Self {
        Self::new(["name", "description"])
    }

    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    fn check_object(&self, value: &Value, path: &str, errors: &mut Vec<ValidationError>) {
        let Some(obj) = value.as_object() else {
            errors.push(ValidationError::with_path("Expected an object", path));
            return;
        };
        for field in &self.fields {
            if obj.get(field).map(is_blank).unwrap_or(true) {
                errors.push(ValidationError::with_path(
                    format!("Missing field '{}'", field),
                    path,
                ));
            }
        }
    }
}

/// `null` and `""` count as missing.
fn is_blank(value: &Value) -> bool {
    value.is_null() || value.as_str().map_or(false, str::is_empty)
}

impl ShapeValidator for RequiredFields {
    fn validate(&self, value: &Value) -> std::result::Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();
        match value {
            Value::Array(items) => {
                for (i, item) in items.iter().enumerate() {
                    self.check_object(item, &format!("[{}]", i), &mut errors);
                }
            }
            other => self.check_object(other, "", &mut errors),
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// JSON Schema backed validator.
pub struct SchemaValidator {
    schema: Value,
    compiled: JSONSchema,
}

impl SchemaValidator {
    pub fn new(schema: Value) -> Result<Self> {
        let compiled = JSONSchema::compile(&schema).map_err(|e| {
            Error::configuration_with_context(
                format!("Invalid JSON schema: {}", e),
                ErrorContext::new().with_source("schema_validator"),
            )
        })?;
        Ok(Self { schema, compiled })
    }

    /// Build the schema from a Rust type's `JsonSchema` derive.
    pub fn for_type<T: JsonSchema>() -> Result<Self> {
        Self::new(json_schema_for::<T>()?)
    }

    pub fn schema(&self) -> &Value {
        &self.schema
    }
}

impl std::fmt::Debug for SchemaValidator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SchemaValidator")
            .field("schema", &self.schema)
            .finish()
    }
}

impl ShapeValidator for SchemaValidator {
    fn validate(&self, value: &Value) -> std::result::Result<(), Vec<ValidationError>> {
        self.compiled.validate(value).map_err(|errors| {
            errors
                .map(|e| ValidationError::with_path(e.to_string(), e.instance_path.to_string()))
                .collect()
        })
    }
}

/// JSON Schema document for `T`.
pub fn json_schema_for<T: JsonSchema>() -> Result<Value> {
    let root = schemars::schema_for!(T);
    Ok(serde_json::to_value(root)?)
}
