//! Root document structures: metadata, servers, tags and components.

use super::{Operation, Parameter, RequestBody, Resource, Response, Schema};
use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A security requirement: scheme name to required scopes.
pub type SecurityRequirement = IndexMap<String, Vec<String>>;

/// Local reference prefixes resolved against the components block.
const PARAMETER_REF_PREFIX: &str = "#/components/parameters/";
const RESPONSE_REF_PREFIX: &str = "#/components/responses/";
const REQUEST_BODY_REF_PREFIX: &str = "#/components/requestBodies/";

/// Parsed API description.
///
/// Required fields default to empty values so that incomplete documents can
/// still be loaded, reported on by structural validation and scored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    /// Format version string (e.g. "3.0.3")
    #[serde(default, deserialize_with = "lenient_string")]
    pub openapi: String,
    /// API metadata
    #[serde(default)]
    pub info: Info,
    /// Server list
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub servers: Vec<Server>,
    /// Global security requirements
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub security: Vec<SecurityRequirement>,
    /// Path template to resource, in document order
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paths: Option<IndexMap<String, Resource>>,
    /// Reusable definitions
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub components: Option<Components>,
    /// Declared tags
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<Tag>,
    /// Unrecognized keys
    #[serde(flatten)]
    pub extensions: IndexMap<String, Value>,
}

impl Document {
    /// Iterate over `(path, resource)` pairs in document order.
    pub fn paths(&self) -> impl Iterator<Item = (&str, &Resource)> {
        self.paths
            .iter()
            .flat_map(|paths| paths.iter())
            .map(|(path, resource)| (path.as_str(), resource))
    }

    /// Number of path keys.
    #[must_use]
    pub fn path_count(&self) -> usize {
        self.paths.as_ref().map_or(0, IndexMap::len)
    }

    /// Iterate over every operation as `(path, method, operation)`.
    pub fn operations(&self) -> impl Iterator<Item = (&str, super::HttpMethod, &Operation)> {
        self.paths().flat_map(|(path, resource)| {
            resource
                .operations()
                .map(move |(method, operation)| (path, method, operation))
        })
    }

    /// Number of method entries across all resources.
    #[must_use]
    pub fn operation_count(&self) -> usize {
        self.paths().map(|(_, resource)| resource.operation_count()).sum()
    }

    /// Reusable schemas, empty when the components block is absent.
    pub fn schemas(&self) -> impl Iterator<Item = (&str, &Schema)> {
        self.components
            .iter()
            .flat_map(|c| c.schemas.iter())
            .map(|(name, schema)| (name.as_str(), schema))
    }

    /// Whether any security scheme is defined.
    #[must_use]
    pub fn has_security_schemes(&self) -> bool {
        self.components
            .as_ref()
            .is_some_and(|c| !c.security_schemes.is_empty())
    }

    /// Whether a non-empty global security requirement list is present.
    #[must_use]
    pub fn has_global_security(&self) -> bool {
        !self.security.is_empty()
    }

    /// Whether a tag with the given name is declared at the top level.
    #[must_use]
    pub fn declares_tag(&self, name: &str) -> bool {
        self.tags.iter().any(|tag| tag.name == name)
    }

    /// Follow a local `$ref` on a parameter, falling back to the parameter itself.
    #[must_use]
    pub fn resolve_parameter<'a>(&'a self, parameter: &'a Parameter) -> &'a Parameter {
        parameter
            .reference
            .as_deref()
            .and_then(|r| r.strip_prefix(PARAMETER_REF_PREFIX))
            .and_then(|name| self.components.as_ref()?.parameters.get(name))
            .unwrap_or(parameter)
    }

    /// Follow a local `$ref` on a response, falling back to the response itself.
    #[must_use]
    pub fn resolve_response<'a>(&'a self, response: &'a Response) -> &'a Response {
        response
            .reference
            .as_deref()
            .and_then(|r| r.strip_prefix(RESPONSE_REF_PREFIX))
            .and_then(|name| self.components.as_ref()?.responses.get(name))
            .unwrap_or(response)
    }

    /// Follow a local `$ref` on a request body, falling back to the body itself.
    #[must_use]
    pub fn resolve_request_body<'a>(&'a self, body: &'a RequestBody) -> &'a RequestBody {
        body.reference
            .as_deref()
            .and_then(|r| r.strip_prefix(REQUEST_BODY_REF_PREFIX))
            .and_then(|name| self.components.as_ref()?.request_bodies.get(name))
            .unwrap_or(body)
    }
}

/// API metadata block
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Info {
    /// API title
    #[serde(default)]
    pub title: String,
    /// API version (not the format version)
    #[serde(default, deserialize_with = "lenient_string")]
    pub version: String,
    /// Long-form description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(flatten)]
    pub extensions: IndexMap<String, Value>,
}

/// Server entry
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Server {
    #[serde(default)]
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(flatten)]
    pub extensions: IndexMap<String, Value>,
}

/// Top-level tag declaration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Tag {
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(flatten)]
    pub extensions: IndexMap<String, Value>,
}

/// Reusable definitions
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Components {
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub schemas: IndexMap<String, Schema>,
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub security_schemes: IndexMap<String, SecurityScheme>,
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub parameters: IndexMap<String, Parameter>,
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub responses: IndexMap<String, Response>,
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub request_bodies: IndexMap<String, RequestBody>,
    #[serde(flatten)]
    pub extensions: IndexMap<String, Value>,
}

/// Security scheme definition
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SecurityScheme {
    /// Scheme kind (`apiKey`, `http`, `oauth2`, `openIdConnect`, ...)
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub scheme_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(flatten)]
    pub extensions: IndexMap<String, Value>,
}

/// Accept version scalars that YAML reads as numbers (`version: 1.0`).
fn lenient_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        Value::Number(n) => match n.as_f64() {
            Some(f) if !n.is_i64() && !n.is_u64() => format!("{f:?}"),
            _ => n.to_string(),
        },
        Value::Bool(b) => b.to_string(),
        _ => String::new(),
    })
}
