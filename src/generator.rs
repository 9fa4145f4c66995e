//! The patch pipeline and its file-level driver.
//!
//! The pipeline is:
//! 1. Parse: Swagger JSON -> `SwaggerSchema`
//! 2. Extract: `SwaggerSchema` -> Route Tree
//! 3. Parse: declaration-tree JSON -> declaration forest
//! 4. Annotate: fold the Route Tree through the forest, fail on leftovers
//! 5. Emit: patched forest -> declaration text

use std::fs;
use std::path::Path;

use thiserror::Error;
use tracing::debug;

use crate::dts::{Decl, Emit, PatchError, annotate};
use crate::swagger::{ExtractError, SwaggerSchema, extract};

/// Pipeline failures, including parse errors on either input.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("failed to parse Swagger schema: {0}")]
    SchemaParse(#[source] serde_json::Error),
    #[error("failed to parse declaration tree: {0}")]
    DeclsParse(#[source] serde_json::Error),
    #[error(transparent)]
    Extract(#[from] ExtractError),
    #[error(transparent)]
    Patch(#[from] PatchError),
}

/// Run the whole pipeline on in-memory JSON inputs, returning the patched
/// declaration text.
pub fn generate(schema_json: &str, decls_json: &str) -> Result<String, GenerateError> {
    let schema = SwaggerSchema::from_json(schema_json).map_err(GenerateError::SchemaParse)?;
    let routes = extract(&schema)?;
    let tree = Decl::forest_from_json(decls_json).map_err(GenerateError::DeclsParse)?;
    let patched = annotate(routes, &tree)?;
    Ok(patched.emit())
}

/// Render the declaration tree as handed over by the generator, unpatched.
pub fn render_original(decls_json: &str) -> Result<String, GenerateError> {
    let tree = Decl::forest_from_json(decls_json).map_err(GenerateError::DeclsParse)?;
    Ok(tree.emit())
}

/// Render a pipeline failure for a human operator, appending the structured
/// leftover payload where one exists.
pub fn render_error(err: &GenerateError) -> String {
    match err {
        GenerateError::Patch(PatchError::UnconsumedRoutes { leftover }) => {
            format!("{err}:\n{}", pretty(leftover))
        }
        GenerateError::Patch(PatchError::UnconsumedMethods { leftover, .. }) => {
            format!("{err}:\n{}", pretty(leftover))
        }
        _ => err.to_string(),
    }
}

fn pretty<T: serde::Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| "<unrenderable>".to_string())
}

/// Read the inputs from disk, run the pipeline, and write the patched
/// declaration text to `out_path` (stdout when absent).
pub fn generate_declarations(
    schema_path: &Path,
    decls_path: &Path,
    out_path: Option<&Path>,
    print_original: bool,
) -> Result<(), String> {
    let schema_json = fs::read_to_string(schema_path)
        .map_err(|err| format!("Failed to read {}: {err}", schema_path.display()))?;
    let decls_json = fs::read_to_string(decls_path)
        .map_err(|err| format!("Failed to read {}: {err}", decls_path.display()))?;

    debug!(
        schema_path = %schema_path.display(),
        decls_path = %decls_path.display(),
        "Loaded patch inputs."
    );

    if print_original {
        let original = render_original(&decls_json).map_err(|err| render_error(&err))?;
        println!("// Original generated declarations:\n");
        println!("{original}");
    }

    let code = generate(&schema_json, &decls_json).map_err(|err| render_error(&err))?;

    match out_path {
        Some(path) => {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)
                    .map_err(|err| format!("Failed to create output directory: {err}"))?;
            }
            fs::write(path, &code)
                .map_err(|err| format!("Failed to write {}: {err}", path.display()))?;
            debug!(
                out_path = %path.display(),
                code_len = code.len(),
                "Patched declarations written."
            );
        }
        None => print!("{code}"),
    }

    Ok(())
}
