//! Swagger schema parsing and Route Tree extraction.
//!
//! This module turns a Swagger 2.0 schema into the Route Tree consumed by
//! the declaration-tree annotator:
//! - `spec`: serde structs for the schema subset we read
//! - `names`: route/method template to namespace identifier normalization
//! - `resolve`: parameter shape to TypeScript type expression resolution
//! - `routes`: Route Tree types and extraction

mod names;
mod resolve;
mod routes;
mod spec;

pub use names::normalize;
pub use resolve::resolve_type;
pub use routes::{ExtractError, FieldInfo, FieldMap, MethodParams, Methods, Routes, extract};
pub use spec::{MethodMap, ParamSchema, Parameter, RouteMethod, SwaggerSchema};
