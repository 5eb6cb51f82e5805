//! JSON Schema engine backed by the `jsonschema` crate.

use evoprompt_core::{application::ports::SchemaEngine, domain::DomainError};
use jsonschema::ValidationOptions;
use serde_json::Value;
use tracing::debug;

/// Validates instances against JSON Schemas.
///
/// The draft comes from the schema's `$schema`, 2020-12 when absent.
/// Schemas are compiled per call. `format` keywords are asserted unless
/// disabled with [`JsonSchemaEngine::without_format_checks`].
#[derive(Debug, Clone, Copy)]
pub struct JsonSchemaEngine {
    validate_formats: bool,
}

impl JsonSchemaEngine {
    pub fn new() -> Self {
        Self {
            validate_formats: true,
        }
    }

    /// Treat `format` as an annotation only.
    pub fn without_format_checks(mut self) -> Self {
        self.validate_formats = false;
        self
    }

    fn options(&self) -> ValidationOptions {
        let mut opts = jsonschema::options();
        opts.should_validate_formats(self.validate_formats);
        opts
    }
}

impl Default for JsonSchemaEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl SchemaEngine for JsonSchemaEngine {
    fn validate(&self, schema: &Value, instance: &Value) -> Result<(), DomainError> {
        let validator = self
            .options()
            .build(schema)
            .map_err(|e| DomainError::SchemaCompileError {
                reason: e.to_string(),
            })?;

        // Only the first violation is reported.
        let first = validator
            .iter_errors(instance)
            .next()
            .map(|e| DomainError::violation(e.instance_path.to_string(), e.to_string()));

        match first {
            None => Ok(()),
            Some(err) => {
                debug!(error = %err, "instance rejected by schema");
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn schema() -> Value {
        json!({
            "$schema": "https://json-schema.org/draft/2020-12/schema",
            "type": "object",
            "required": ["metadata", "subject"],
            "properties": {
                "metadata": {
                    "type": "object",
                    "properties": { "domain": { "const": "cold_email" } }
                },
                "subject": { "type": "string", "minLength": 1 },
                "contact": { "type": "string", "format": "email" }
            }
        })
    }

    #[test]
    fn accepts_conforming_instance() {
        let instance = json!({ "metadata": { "domain": "cold_email" }, "subject": "Hi" });
        assert!(JsonSchemaEngine::new().validate(&schema(), &instance).is_ok());
    }

    #[test]
    fn reports_missing_required_property_at_root() {
        let instance = json!({ "metadata": { "domain": "cold_email" } });
        let err = JsonSchemaEngine::new()
            .validate(&schema(), &instance)
            .unwrap_err();

        match err {
            DomainError::SchemaValidationFailed {
                instance_path,
                message,
            } => {
                assert_eq!(instance_path, "(root)");
                assert!(message.contains("subject"), "message was: {message}");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn reports_nested_instance_path() {
        let instance = json!({ "metadata": { "domain": "landing_page" }, "subject": "Hi" });
        let err = JsonSchemaEngine::new()
            .validate(&schema(), &instance)
            .unwrap_err();
        assert!(err.to_string().starts_with("/metadata/domain"), "{err}");
    }

    #[test]
    fn format_checks_can_be_disabled() {
        let instance = json!({
            "metadata": { "domain": "cold_email" },
            "subject": "Hi",
            "contact": "not-an-email"
        });
        assert!(JsonSchemaEngine::new().validate(&schema(), &instance).is_err());
        assert!(
            JsonSchemaEngine::new()
                .without_format_checks()
                .validate(&schema(), &instance)
                .is_ok()
        );
    }

    #[test]
    fn invalid_schema_is_a_compile_error() {
        let broken = json!({ "type": 12 });
        let err = JsonSchemaEngine::new()
            .validate(&broken, &json!({}))
            .unwrap_err();
        assert!(matches!(err, DomainError::SchemaCompileError { .. }));
    }
}
