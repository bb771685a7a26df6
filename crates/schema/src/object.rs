use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{Issue, ValidationError};
use crate::field::{Field, FieldKind};

/// A declared object shape: an ordered set of named fields.
#[derive(Clone, Debug, Default)]
pub struct ObjectSchema {
    pub(crate) fields: Vec<(String, Field)>,
}

impl ObjectSchema {
    /// Creates a new builder.
    #[inline]
    pub fn builder() -> ObjectSchemaBuilder {
        ObjectSchemaBuilder { fields: vec![] }
    }

    /// Validates `value` against this schema.
    ///
    /// Unknown keys in `value` are tolerated; every declared constraint
    /// must hold. On failure, a structured log entry with the offending
    /// data and the issue list is emitted, and the error is returned.
    /// Validation never mutates the value, so a value that passed once
    /// will keep passing.
    pub fn validate(
        &self,
        value: &Value,
        context: &str,
    ) -> Result<(), ValidationError> {
        let issues = self.collect_issues(value);
        if issues.is_empty() {
            return Ok(());
        }
        let err = ValidationError::new(
            format!("validation failed in {context}"),
            issues,
        );
        error!(data = %value, issues = ?err.issues(), "{}", err.message());
        Err(err)
    }

    fn collect_issues(&self, value: &Value) -> Vec<Issue> {
        let Some(object) = value.as_object() else {
            return vec![Issue::new("", "expected an object")];
        };

        let mut issues = vec![];
        for (name, field) in &self.fields {
            let entry = object.get(name).filter(|v| !v.is_null());
            let Some(entry) = entry else {
                if !field.optional {
                    issues.push(Issue::new(name, "missing required field"));
                }
                continue;
            };
            check_field(name, field, entry, &mut issues);
        }
        issues
    }
}

fn check_field(name: &str, field: &Field, value: &Value, issues: &mut Vec<Issue>) {
    match &field.kind {
        FieldKind::Number => {
            let Some(number) = value.as_f64() else {
                issues.push(Issue::new(name, "expected a number"));
                return;
            };
            if let Some(min) = field.min {
                if number < min {
                    issues.push(Issue::new(
                        name,
                        format!("must be at least {min}"),
                    ));
                }
            }
            if let Some(max) = field.max {
                if number > max {
                    issues.push(Issue::new(
                        name,
                        format!("must be at most {max}"),
                    ));
                }
            }
        }
        FieldKind::Text => {
            let Some(text) = value.as_str() else {
                issues.push(Issue::new(name, "expected a string"));
                return;
            };
            if let Some(min_len) = field.min_len {
                if text.chars().count() < min_len {
                    issues.push(Issue::new(
                        name,
                        format!("must be at least {min_len} characters"),
                    ));
                }
            }
            if let Some(pattern) = &field.pattern {
                if !pattern.is_match(text) {
                    issues.push(Issue::new(
                        name,
                        format!(
                            "does not match the pattern {}",
                            pattern.as_str()
                        ),
                    ));
                }
            }
        }
        FieldKind::Enum(variants) => {
            let Some(text) = value.as_str() else {
                issues.push(Issue::new(name, "expected a string"));
                return;
            };
            if !variants.iter().any(|v| v == text) {
                issues.push(Issue::new(
                    name,
                    format!("must be one of: {}", variants.join(", ")),
                ));
            }
        }
        FieldKind::List => {
            if !value.is_array() {
                issues.push(Issue::new(name, "expected an array"));
            }
        }
        FieldKind::Boolean => {
            if !value.is_boolean() {
                issues.push(Issue::new(name, "expected a boolean"));
            }
        }
    }
}

/// Validates `value` against `schema` and narrows it into `T`.
///
/// This is the entry point for both directions of the tool boundary:
/// argument payloads received from the model, and tool output about to
/// be serialized back to it.
pub fn validate_as<T: DeserializeOwned>(
    schema: &ObjectSchema,
    value: &Value,
    context: &str,
) -> Result<T, ValidationError> {
    schema.validate(value, context)?;
    serde_json::from_value(value.clone()).map_err(|err| {
        let err = ValidationError::new(
            format!("validation failed in {context}"),
            vec![Issue::new("", err.to_string())],
        );
        error!(data = %value, issues = ?err.issues(), "{}", err.message());
        err
    })
}

/// [`ObjectSchema`] builder.
#[derive(Debug, Default)]
pub struct ObjectSchemaBuilder {
    fields: Vec<(String, Field)>,
}

impl ObjectSchemaBuilder {
    /// Adds a named field. Declaration order is preserved.
    #[inline]
    pub fn field<S: Into<String>>(mut self, name: S, field: Field) -> Self {
        self.fields.push((name.into(), field));
        self
    }

    /// Builds the schema.
    #[inline]
    pub fn build(self) -> ObjectSchema {
        ObjectSchema {
            fields: self.fields,
        }
    }
}
