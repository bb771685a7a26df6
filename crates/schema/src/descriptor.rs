use std::sync::LazyLock;

use regex::Regex;
use serde_json::{Map, Value, json};

use crate::error::ValidationError;
use crate::field::{Field, FieldKind};
use crate::object::ObjectSchema;

const MIN_DESCRIPTION_LEN: usize = 10;

// The shape a tool's identity must satisfy before it may be advertised
// to a provider.
static IDENTITY_SCHEMA: LazyLock<ObjectSchema> = LazyLock::new(|| {
    let name_pattern =
        Regex::new("^[A-Za-z0-9_]+$").expect("hard-coded pattern");
    ObjectSchema::builder()
        .field("name", Field::text().min_len(1).pattern(name_pattern))
        .field("description", Field::text().min_len(MIN_DESCRIPTION_LEN))
        .build()
});

/// Checks the identity fields of a tool descriptor: the name must match
/// `[A-Za-z0-9_]+` and the description must be long enough to tell the
/// model something useful.
pub fn validate_descriptor(
    name: &str,
    description: &str,
) -> Result<(), ValidationError> {
    let identity = json!({ "name": name, "description": description });
    IDENTITY_SCHEMA.validate(&identity, "tool descriptor")
}

impl ObjectSchema {
    /// Derives the declarative parameter shape a model provider expects
    /// from this schema.
    ///
    /// The result always has `type: "object"` and a `properties` map;
    /// the `required` list names every non-optional field and is left
    /// out entirely when empty. Each field kind maps exhaustively, so a
    /// declared field can never end up required but unmapped.
    pub fn to_parameters(&self) -> Value {
        let mut properties = Map::new();
        let mut required = vec![];

        for (name, field) in &self.fields {
            let mut property = match &field.kind {
                FieldKind::Number => json!({ "type": "number" }),
                FieldKind::Text => json!({ "type": "string" }),
                FieldKind::Enum(variants) => {
                    json!({ "type": "string", "enum": variants })
                }
                FieldKind::List => json!({ "type": "array" }),
                FieldKind::Boolean => json!({ "type": "boolean" }),
            };
            if let Some(description) = &field.description {
                property["description"] = json!(description);
            }
            properties.insert(name.clone(), property);

            if !field.optional {
                required.push(name.clone());
            }
        }

        let mut parameters = json!({
            "type": "object",
            "properties": properties,
        });
        if !required.is_empty() {
            parameters["required"] = json!(required);
        }
        parameters
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_fields_map_to_number_properties() {
        let schema = ObjectSchema::builder()
            .field("a", Field::number())
            .field("b", Field::number())
            .build();
        assert_eq!(
            schema.to_parameters(),
            json!({
                "type": "object",
                "properties": {
                    "a": { "type": "number" },
                    "b": { "type": "number" },
                },
                "required": ["a", "b"],
            })
        );
    }

    #[test]
    fn test_every_kind_maps() {
        let schema = ObjectSchema::builder()
            .field(
                "operation",
                Field::enumeration(["add", "divide"]).describe("What to do"),
            )
            .field("a", Field::number())
            .field("note", Field::text().optional())
            .field("tags", Field::list().optional())
            .field("exact", Field::boolean().optional())
            .build();
        assert_eq!(
            schema.to_parameters(),
            json!({
                "type": "object",
                "properties": {
                    "operation": {
                        "type": "string",
                        "enum": ["add", "divide"],
                        "description": "What to do",
                    },
                    "a": { "type": "number" },
                    "note": { "type": "string" },
                    "tags": { "type": "array" },
                    "exact": { "type": "boolean" },
                },
                "required": ["operation", "a"],
            })
        );
    }

    #[test]
    fn test_required_is_omitted_when_empty() {
        let schema = ObjectSchema::builder()
            .field("note", Field::text().optional())
            .build();
        let parameters = schema.to_parameters();
        assert!(parameters.get("required").is_none());
    }

    #[test]
    fn test_descriptor_identity_rules() {
        validate_descriptor("calculator", "Performs basic arithmetic.")
            .unwrap();

        let err = validate_descriptor("not a name!", "Performs arithmetic.")
            .unwrap_err();
        assert_eq!(err.issues()[0].path, "name");

        let err = validate_descriptor("calculator", "short").unwrap_err();
        assert_eq!(err.issues()[0].path, "description");

        let err = validate_descriptor("", "Performs basic arithmetic.")
            .unwrap_err();
        assert_eq!(err.issues()[0].path, "name");
    }
}
