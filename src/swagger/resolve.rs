//! Parameter shape to TypeScript type expression resolution.

use super::routes::ExtractError;
use super::spec::ParamSchema;

/// Resolve a parameter type shape into a TypeScript type expression.
///
/// Resolution order, first match wins:
/// 1. string with enumerated literals -> union of quoted literals
/// 2. primitive scalar (`integer` collapses to `number`)
/// 3. array with a declared item schema -> item type with `[]` suffix
/// 4. `$ref` -> the referenced type's bare name
///
/// Anything else fails with [`ExtractError::UnresolvableType`] carrying the
/// offending fragment.
pub fn resolve_type(schema: &ParamSchema) -> Result<String, ExtractError> {
    if let (Some("string"), Some(values)) = (schema.schema_type.as_deref(), &schema.enum_values) {
        let literals: Vec<String> = values
            .iter()
            .map(|v| format!("'{}'", v.replace('\'', "\\'")))
            .collect();
        return Ok(literals.join(" | "));
    }

    match schema.schema_type.as_deref() {
        Some("string") => return Ok("string".to_string()),
        Some("number") | Some("integer") => return Ok("number".to_string()),
        Some("boolean") => return Ok("boolean".to_string()),
        Some("array") => {
            if let Some(items) = &schema.items {
                return Ok(format!("{}[]", resolve_type(items)?));
            }
        }
        _ => {}
    }

    if let Some(ref_path) = &schema.ref_path {
        return Ok(definition_ref_to_type(ref_path));
    }

    Err(ExtractError::unresolvable(schema))
}

/// `#/definitions/Place` refers to the `Place` type by bare name.
fn definition_ref_to_type(ref_path: &str) -> String {
    ref_path
        .strip_prefix("#/definitions/")
        .unwrap_or(ref_path)
        .to_string()
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    fn shape(json: &str) -> ParamSchema {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn string_enum_becomes_literal_union() {
        let s = shape(r#"{ "type": "string", "enum": ["a", "b"] }"#);
        assert_eq!(resolve_type(&s).unwrap(), "'a' | 'b'");
    }

    #[test]
    fn enum_literals_are_escaped() {
        let s = shape(r#"{ "type": "string", "enum": ["it's"] }"#);
        assert_eq!(resolve_type(&s).unwrap(), "'it\\'s'");
    }

    #[test]
    fn primitive_scalars() {
        assert_eq!(resolve_type(&shape(r#"{ "type": "string" }"#)).unwrap(), "string");
        assert_eq!(resolve_type(&shape(r#"{ "type": "number" }"#)).unwrap(), "number");
        assert_eq!(resolve_type(&shape(r#"{ "type": "boolean" }"#)).unwrap(), "boolean");
    }

    #[test]
    fn integer_collapses_to_number() {
        assert_eq!(resolve_type(&shape(r#"{ "type": "integer" }"#)).unwrap(), "number");
    }

    #[test]
    fn array_of_integers() {
        let s = shape(r#"{ "type": "array", "items": { "type": "integer" } }"#);
        assert_eq!(resolve_type(&s).unwrap(), "number[]");
    }

    #[test]
    fn nested_arrays() {
        let s = shape(r#"{ "type": "array", "items": { "type": "array", "items": { "type": "string" } } }"#);
        assert_eq!(resolve_type(&s).unwrap(), "string[][]");
    }

    #[test]
    fn definition_reference_uses_bare_name() {
        let s = shape(r##"{ "$ref": "#/definitions/Place" }"##);
        assert_eq!(resolve_type(&s).unwrap(), "Place");
    }

    #[test]
    fn empty_shape_is_unresolvable() {
        let err = resolve_type(&shape("{}")).unwrap_err();
        assert!(matches!(err, ExtractError::UnresolvableType { .. }));
    }

    #[test]
    fn array_without_items_is_unresolvable() {
        let err = resolve_type(&shape(r#"{ "type": "array" }"#)).unwrap_err();
        assert!(matches!(err, ExtractError::UnresolvableType { .. }));
    }

    #[test]
    fn unresolvable_error_carries_the_fragment() {
        let err = resolve_type(&shape(r#"{ "type": "object" }"#)).unwrap_err();
        assert!(err.to_string().contains("object"));
    }
}
