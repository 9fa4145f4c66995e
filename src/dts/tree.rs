//! Declaration node model.
//!
//! Namespaces and interfaces are modeled structurally; anything else the
//! generator produced is carried as opaque text and passed through
//! unchanged. The JSON encoding uses a `kind` tag so the collaborator
//! generator can hand its tree over without knowing our types.

use serde::{Deserialize, Serialize};

use crate::swagger::{FieldMap, MethodParams};

/// Name of the namespace the generator nests all route namespaces under.
pub const ROUTES_NAMESPACE: &str = "Paths";

/// Name of the parameter-group namespace that receives injected interfaces.
pub const PARAMETERS_NAMESPACE: &str = "Parameters";

/// Name of the parameter-group namespace holding response types.
pub const RESPONSES_NAMESPACE: &str = "Responses";

/// A node of the declaration tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Decl {
    /// `namespace Name { ... }`
    Namespace {
        name: String,
        #[serde(default)]
        exported: bool,
        /// The `declare`-only modifier; stripped in favor of `export` when
        /// the annotator visits the node.
        #[serde(default)]
        declared: bool,
        #[serde(default)]
        children: Vec<Decl>,
    },
    /// `interface Name { field: type }`
    Interface {
        name: String,
        #[serde(default)]
        exported: bool,
        #[serde(default)]
        fields: FieldMap,
    },
    /// Anything else, emitted verbatim.
    Other { text: String },
}

impl Decl {
    /// Parse a declaration forest from its JSON encoding.
    pub fn forest_from_json(json: &str) -> Result<Vec<Decl>, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// A plain, unexported namespace.
    pub fn namespace(name: impl Into<String>, children: Vec<Decl>) -> Decl {
        Decl::Namespace {
            name: name.into(),
            exported: false,
            declared: false,
            children,
        }
    }

    /// An exported namespace with the `declare` modifier stripped.
    pub fn exported_namespace(name: impl Into<String>, children: Vec<Decl>) -> Decl {
        Decl::Namespace {
            name: name.into(),
            exported: true,
            declared: false,
            children,
        }
    }
}

/// Build the exported interface for one field map.
pub(crate) fn fields_interface(name: &str, fields: &FieldMap) -> Decl {
    Decl::Interface {
        name: name.to_string(),
        exported: true,
        fields: fields.clone(),
    }
}

/// Append `Path`/`Query` interfaces for a method's parameters, in that fixed
/// order, skipping empty maps entirely.
pub(crate) fn append_param_interfaces(children: &mut Vec<Decl>, params: &MethodParams) {
    if !params.path.is_empty() {
        children.push(fields_interface("Path", &params.path));
    }
    if !params.query.is_empty() {
        children.push(fields_interface("Query", &params.query));
    }
}
