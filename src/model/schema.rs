//! Schema objects.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// `type` keyword: a single type name or, in 3.1 documents, a list of them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SchemaType {
    Single(String),
    Multiple(Vec<String>),
}

impl SchemaType {
    /// Whether the given type name is included.
    #[must_use]
    pub fn includes(&self, name: &str) -> bool {
        match self {
            Self::Single(t) => t == name,
            Self::Multiple(ts) => ts.iter().any(|t| t == name),
        }
    }
}

/// Schema definition, reusable or inline.
///
/// Only the keywords the scorer inspects are typed; everything else lands in
/// `extensions`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Schema {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub schema_type: Option<SchemaType>,
    #[serde(rename = "$ref", default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub all_of: Option<Vec<Schema>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub one_of: Option<Vec<Schema>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub any_of: Option<Vec<Schema>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub not: Option<Box<Schema>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<IndexMap<String, Schema>>,
    /// Either a boolean or a schema
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_properties: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<Schema>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example: Option<Value>,
    #[serde(flatten)]
    pub extensions: IndexMap<String, Value>,
}

impl Schema {
    /// Whether any composition keyword is present.
    #[must_use]
    pub const fn is_composed(&self) -> bool {
        self.all_of.is_some() || self.one_of.is_some() || self.any_of.is_some() || self.not.is_some()
    }

    /// Whether the schema says anything about its type: an explicit `type`,
    /// a `$ref`, or a composition keyword.
    #[must_use]
    pub const fn has_type_information(&self) -> bool {
        self.schema_type.is_some() || self.reference.is_some() || self.is_composed()
    }

    #[must_use]
    pub fn is_object(&self) -> bool {
        self.schema_type
            .as_ref()
            .is_some_and(|t| t.includes("object"))
    }

    /// An object schema with neither `properties` nor `additionalProperties`.
    #[must_use]
    pub fn is_open_object(&self) -> bool {
        self.is_object() && self.properties.is_none() && self.additional_properties.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn schema(value: Value) -> Schema {
        serde_json::from_value(value).expect("valid schema")
    }

    #[test]
    fn test_type_information() {
        assert!(schema(json!({"type": "string"})).has_type_information());
        assert!(schema(json!({"$ref": "#/components/schemas/User"})).has_type_information());
        assert!(schema(json!({"oneOf": [{"type": "string"}]})).has_type_information());
        assert!(!schema(json!({"description": "anything"})).has_type_information());
    }

    #[test]
    fn test_open_object() {
        assert!(schema(json!({"type": "object"})).is_open_object());
        assert!(!schema(json!({"type": "object", "properties": {}})).is_open_object());
        assert!(!schema(json!({"type": "object", "additionalProperties": false})).is_open_object());
        assert!(!schema(json!({"type": "array"})).is_open_object());
    }

    #[test]
    fn test_type_list() {
        let s = schema(json!({"type": ["object", "null"]}));
        assert!(s.is_object());
        assert!(s.is_open_object());
    }

    #[test]
    fn test_unknown_keywords_kept() {
        let s = schema(json!({"type": "string", "format": "uuid", "x-nullable": true}));
        assert_eq!(s.extensions.get("format"), Some(&json!("uuid")));
        assert_eq!(s.extensions.len(), 2);
    }
}
