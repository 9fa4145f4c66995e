//! Declaration tree model, annotation, and emission.
//!
//! The declaration tree is produced by an external generator from the same
//! Swagger schema and handed over in a structural JSON encoding. The
//! annotator folds the Route Tree through that tree, injecting synthesized
//! `Path`/`Query` parameter interfaces and force-exporting every namespace
//! it visits:
//! - `tree`: declaration node model and interface synthesis
//! - `annotate`: the four-level matching fold with consumption accounting
//! - `emit`: declaration text rendering via the `Emit` trait

mod annotate;
mod emit;
mod tree;

pub use annotate::{PatchError, annotate};
pub use emit::Emit;
pub use tree::{Decl, PARAMETERS_NAMESPACE, RESPONSES_NAMESPACE, ROUTES_NAMESPACE};
