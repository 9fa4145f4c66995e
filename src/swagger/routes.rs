//! Route Tree types and extraction from a Swagger schema.
//!
//! The Route Tree maps normalized route namespaces to method namespaces to
//! the path/query field maps the annotator injects into the declaration
//! tree. It is built once per run and consumed entry-by-entry during
//! annotation; a run only succeeds if the tree ends up empty.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::names::normalize;
use super::resolve::resolve_type;
use super::spec::{ParamSchema, RouteMethod, SwaggerSchema};

/// Parameter fields keyed by name, in schema declaration order.
pub type FieldMap = IndexMap<String, FieldInfo>;

/// Methods of one route, keyed by normalized method namespace name.
pub type Methods = IndexMap<String, MethodParams>;

/// The Route Tree: routes keyed by normalized route namespace name.
pub type Routes = IndexMap<String, Methods>;

/// Type and optionality of a single parameter field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldInfo {
    pub optional: bool,
    #[serde(rename = "type")]
    pub ty: String,
}

/// Path and query parameter fields of one method.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodParams {
    pub path: FieldMap,
    pub query: FieldMap,
}

impl MethodParams {
    pub fn is_empty(&self) -> bool {
        self.path.is_empty() && self.query.is_empty()
    }
}

/// Extraction failures. Both are fatal: a parameter that cannot be placed or
/// typed must never be silently dropped, because the resulting declarations
/// would compile but be wrong.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// A parameter declared a location other than `path` or `query`.
    #[error("parameter \"{name}\" of \"{route}\" declares malformed location \"{location}\"")]
    MalformedParameterKind {
        route: String,
        name: String,
        location: String,
    },
    /// A parameter shape matched no known type form.
    #[error("unresolvable parameter type: {fragment}")]
    UnresolvableType { fragment: String },
}

impl ExtractError {
    pub(crate) fn unresolvable(schema: &ParamSchema) -> Self {
        let fragment =
            serde_json::to_string(schema).unwrap_or_else(|_| format!("{schema:?}"));
        ExtractError::UnresolvableType { fragment }
    }
}

/// Build the Route Tree from a parsed Swagger schema.
pub fn extract(schema: &SwaggerSchema) -> Result<Routes, ExtractError> {
    let mut routes = Routes::new();
    for (route, methods) in &schema.paths {
        let mut out = Methods::new();
        for (method, decl) in methods {
            out.insert(normalize(method), method_params(route, decl)?);
        }
        routes.insert(normalize(route), out);
    }
    Ok(routes)
}

/// Bucket a method's parameters into path and query field maps.
fn method_params(route: &str, method: &RouteMethod) -> Result<MethodParams, ExtractError> {
    let mut params = MethodParams::default();
    let Some(declared) = &method.parameters else {
        return Ok(params);
    };

    for param in declared {
        let info = FieldInfo {
            optional: !param.required,
            ty: resolve_type(param.type_shape())?,
        };
        let bucket = match param.location.as_str() {
            "path" => &mut params.path,
            "query" => &mut params.query,
            other => {
                return Err(ExtractError::MalformedParameterKind {
                    route: route.to_string(),
                    name: param.name.clone(),
                    location: other.to_string(),
                });
            }
        };
        bucket.insert(param.name.clone(), info);
    }

    Ok(params)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;

    const SCHEMA_JSON: &str = r#"{
      "swagger": "2.0",
      "paths": {
        "/search": {
          "get": {
            "parameters": [
              { "name": "q", "in": "query", "required": true, "type": "string" },
              { "name": "limit", "in": "query", "type": "integer" }
            ],
            "responses": {}
          }
        },
        "/search/{query}": {
          "get": {
            "parameters": [
              { "name": "query", "in": "path", "required": true, "type": "string" },
              { "name": "format", "in": "query", "schema": { "type": "string", "enum": ["json", "xml"] } }
            ],
            "responses": {}
          },
          "post": {
            "responses": {}
          }
        }
      }
    }"#;

    fn routes() -> Routes {
        let schema = SwaggerSchema::from_json(SCHEMA_JSON).unwrap();
        extract(&schema).unwrap()
    }

    #[test]
    fn route_and_method_keys_are_normalized() {
        let routes = routes();
        let keys: Vec<_> = routes.keys().cloned().collect();
        assert_eq!(keys, vec!["Search", "Search$Query"]);
        let methods: Vec<_> = routes["Search$Query"].keys().cloned().collect();
        assert_eq!(methods, vec!["Get", "Post"]);
    }

    #[test]
    fn parameters_bucket_by_location() {
        let routes = routes();
        let get = &routes["Search$Query"]["Get"];
        assert_eq!(get.path.keys().cloned().collect::<Vec<_>>(), vec!["query"]);
        assert_eq!(get.query.keys().cloned().collect::<Vec<_>>(), vec!["format"]);
    }

    #[test]
    fn optional_is_the_negation_of_required() {
        let routes = routes();
        let get = &routes["Search"]["Get"];
        assert!(!get.query["q"].optional);
        assert!(get.query["limit"].optional);
        assert_eq!(get.query["limit"].ty, "number");
    }

    #[test]
    fn nested_schema_shape_wins_over_inline() {
        let routes = routes();
        let get = &routes["Search$Query"]["Get"];
        assert_eq!(get.query["format"].ty, "'json' | 'xml'");
    }

    #[test]
    fn method_without_parameters_yields_empty_maps() {
        let routes = routes();
        assert!(routes["Search$Query"]["Post"].is_empty());
    }

    #[test]
    fn malformed_location_fails_closed() {
        let json = r#"{
          "swagger": "2.0",
          "paths": {
            "/place": {
              "post": {
                "parameters": [
                  { "name": "payload", "in": "body", "required": true, "type": "string" }
                ],
                "responses": {}
              }
            }
          }
        }"#;
        let schema = SwaggerSchema::from_json(json).unwrap();
        let err = extract(&schema).unwrap_err();
        match err {
            ExtractError::MalformedParameterKind {
                route,
                name,
                location,
            } => {
                assert_eq!(route, "/place");
                assert_eq!(name, "payload");
                assert_eq!(location, "body");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn untyped_parameter_fails_closed() {
        let json = r#"{
          "swagger": "2.0",
          "paths": {
            "/place": {
              "get": {
                "parameters": [ { "name": "x", "in": "query" } ],
                "responses": {}
              }
            }
          }
        }"#;
        let schema = SwaggerSchema::from_json(json).unwrap();
        let err = extract(&schema).unwrap_err();
        assert!(matches!(err, ExtractError::UnresolvableType { .. }));
    }
}
