//! Declaration text emission via the Emit trait.
//!
//! Mechanical string building only; all tree manipulation happens before
//! emission. Namespaces nest with two-space indentation, interface fields go
//! one per line, and field names that are not valid identifiers are quoted.

use super::tree::Decl;

/// Trait for emitting TypeScript declaration text from tree nodes.
pub trait Emit {
    /// Convert the node to its TypeScript string representation.
    fn emit(&self) -> String;
}

impl Emit for Decl {
    fn emit(&self) -> String {
        let mut out = String::new();
        emit_decl(self, 0, &mut out);
        out
    }
}

impl Emit for [Decl] {
    fn emit(&self) -> String {
        let mut out = String::new();
        for decl in self {
            emit_decl(decl, 0, &mut out);
        }
        out
    }
}

fn emit_decl(decl: &Decl, depth: usize, out: &mut String) {
    match decl {
        Decl::Namespace {
            name,
            exported,
            declared,
            children,
        } => {
            push_indent(out, depth);
            out.push_str(modifiers(*exported, *declared));
            out.push_str("namespace ");
            out.push_str(name);
            out.push_str(" {\n");
            for child in children {
                emit_decl(child, depth + 1, out);
            }
            push_indent(out, depth);
            out.push_str("}\n");
        }
        Decl::Interface {
            name,
            exported,
            fields,
        } => {
            push_indent(out, depth);
            if *exported {
                out.push_str("export ");
            }
            out.push_str("interface ");
            out.push_str(name);
            out.push_str(" {\n");
            for (field, info) in fields {
                push_indent(out, depth + 1);
                out.push_str(&quote_if_needed(field));
                if info.optional {
                    out.push('?');
                }
                out.push_str(": ");
                out.push_str(&info.ty);
                out.push_str(";\n");
            }
            push_indent(out, depth);
            out.push_str("}\n");
        }
        Decl::Other { text } => {
            push_indent(out, depth);
            out.push_str(text);
            out.push('\n');
        }
    }
}

fn modifiers(exported: bool, declared: bool) -> &'static str {
    match (declared, exported) {
        (true, _) => "declare ",
        (false, true) => "export ",
        (false, false) => "",
    }
}

fn push_indent(out: &mut String, depth: usize) {
    for _ in 0..depth {
        out.push_str("  ");
    }
}

/// Quote a field name that is not a valid identifier, escaping embedded
/// quotes and backslashes.
fn quote_if_needed(name: &str) -> String {
    if needs_quoting(name) {
        let escaped = name.replace('\\', "\\\\").replace('"', "\\\"");
        format!("\"{escaped}\"")
    } else {
        name.to_string()
    }
}

/// A field name needs quoting when it is empty, starts with anything but a
/// letter, underscore, or dollar sign, or contains other characters.
fn needs_quoting(name: &str) -> bool {
    name.is_empty()
        || !name
            .chars()
            .next()
            .is_some_and(|c| c.is_ascii_alphabetic() || c == '_' || c == '$')
        || !name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use crate::swagger::{FieldInfo, FieldMap};

    use super::super::tree::Decl;
    use super::*;

    fn interface(name: &str, fields: &[(&str, bool, &str)]) -> Decl {
        Decl::Interface {
            name: name.to_string(),
            exported: true,
            fields: fields
                .iter()
                .map(|(field, optional, ty)| {
                    (
                        field.to_string(),
                        FieldInfo {
                            optional: *optional,
                            ty: ty.to_string(),
                        },
                    )
                })
                .collect(),
        }
    }

    #[test]
    fn nested_namespaces_indent() {
        let tree = Decl::exported_namespace(
            "Paths",
            vec![Decl::exported_namespace(
                "Search",
                vec![interface("Path", &[("id", false, "number")])],
            )],
        );

        assert_eq!(
            tree.emit(),
            "export namespace Paths {\n  export namespace Search {\n    export interface Path {\n      id: number;\n    }\n  }\n}\n"
        );
    }

    #[test]
    fn optional_fields_get_a_question_mark() {
        let decl = interface("Query", &[("limit", true, "number")]);
        assert_eq!(
            decl.emit(),
            "export interface Query {\n  limit?: number;\n}\n"
        );
    }

    #[test]
    fn non_identifier_field_names_are_quoted() {
        let decl = interface("Query", &[("accept-language", true, "string")]);
        assert_eq!(
            decl.emit(),
            "export interface Query {\n  \"accept-language\"?: string;\n}\n"
        );
        let decl = interface("Query", &[("2fa", false, "boolean")]);
        assert_eq!(
            decl.emit(),
            "export interface Query {\n  \"2fa\": boolean;\n}\n"
        );
    }

    #[test]
    fn declare_modifier_renders() {
        let decl = Decl::Namespace {
            name: "Paths".to_string(),
            exported: false,
            declared: true,
            children: vec![],
        };
        assert_eq!(decl.emit(), "declare namespace Paths {\n}\n");
    }

    #[test]
    fn empty_interface_renders_empty_body() {
        let decl = Decl::Interface {
            name: "Query".to_string(),
            exported: false,
            fields: FieldMap::new(),
        };
        assert_eq!(decl.emit(), "interface Query {\n}\n");
    }

    #[test]
    fn other_nodes_emit_verbatim() {
        let forest = vec![
            Decl::Other {
                text: "type Coordinate = [number, number];".to_string(),
            },
            Decl::exported_namespace("Paths", vec![]),
        ];
        assert_eq!(
            forest.emit(),
            "type Coordinate = [number, number];\nexport namespace Paths {\n}\n"
        );
    }
}
