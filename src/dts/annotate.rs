//! Route Tree application onto the declaration tree.
//!
//! A four-level visitor: root, route namespace, method namespace, parameter
//! group. Each level folds its children left to right, threading the
//! remaining Route Tree (or sub-map) so that an entry consumed by an earlier
//! sibling is gone for later ones. Every namespace the visitor touches is
//! rewritten as exported, matched or not, and the `declare` modifier is
//! dropped in favor of `export`: the patched tree is meant for composition.
//!
//! Strict consumption accounting: when the pass ends, the Route Tree must be
//! empty. Any leftover is a hard error carrying the leftover map itself, so
//! the operator can see exactly which schema entries found no namespace.

use indexmap::IndexMap;
use thiserror::Error;

use crate::swagger::{MethodParams, Methods, Routes};

use super::tree::{
    Decl, PARAMETERS_NAMESPACE, RESPONSES_NAMESPACE, ROUTES_NAMESPACE, append_param_interfaces,
};

/// Annotation failures: the schema and the generated tree disagree on the
/// route set. Both variants carry the unconsumed entries for diagnostics.
#[derive(Debug, Error)]
pub enum PatchError {
    /// Top-level routes with no matching namespace under the routes
    /// container.
    #[error("schema routes left unconsumed by the declaration tree: {}", keys(.leftover))]
    UnconsumedRoutes { leftover: Routes },
    /// A matched route namespace is missing namespaces for one or more of
    /// its declared methods.
    #[error("methods of route \"{route}\" left unconsumed: {}", keys(.leftover))]
    UnconsumedMethods { route: String, leftover: Methods },
}

fn keys<V>(map: &IndexMap<String, V>) -> String {
    map.keys().cloned().collect::<Vec<_>>().join(", ")
}

/// Apply the Route Tree to the declaration forest, returning the patched
/// forest. The input is never mutated; every returned node is freshly
/// built.
pub fn annotate(routes: Routes, tree: &[Decl]) -> Result<Vec<Decl>, PatchError> {
    let mut remaining = routes;
    let mut patched = Vec::with_capacity(tree.len());

    for node in tree {
        let (node, rest) = visit_root(node, remaining)?;
        patched.push(node);
        remaining = rest;
    }

    if !remaining.is_empty() {
        return Err(PatchError::UnconsumedRoutes {
            leftover: remaining,
        });
    }
    Ok(patched)
}

/// Root level: `Definitions`, `Paths`. Only the routes container sees the
/// Route Tree; every other namespace is descended with an empty one so the
/// export side effect still reaches its children.
fn visit_root(node: &Decl, routes: Routes) -> Result<(Decl, Routes), PatchError> {
    let Decl::Namespace { name, children, .. } = node else {
        return Ok((node.clone(), routes));
    };

    if name == ROUTES_NAMESPACE {
        let (children, rest) = visit_route_level(children, routes)?;
        Ok((Decl::exported_namespace(name.clone(), children), rest))
    } else {
        let (children, _) = visit_route_level(children, Routes::new())?;
        Ok((Decl::exported_namespace(name.clone(), children), routes))
    }
}

/// Fold the route level over a namespace body.
fn visit_route_level(
    children: &[Decl],
    routes: Routes,
) -> Result<(Vec<Decl>, Routes), PatchError> {
    let mut remaining = routes;
    let mut out = Vec::with_capacity(children.len());
    for child in children {
        let (child, rest) = visit_route(child, remaining)?;
        out.push(child);
        remaining = rest;
    }
    Ok((out, remaining))
}

/// Route level: one namespace per route mask (`Search`, `Search$Query`).
/// A name match removes the route's entry from the map later siblings see;
/// its methods must then all be found inside this namespace, or the whole
/// pass fails.
fn visit_route(node: &Decl, mut routes: Routes) -> Result<(Decl, Routes), PatchError> {
    let Decl::Namespace { name, children, .. } = node else {
        return Ok((node.clone(), routes));
    };

    let matched = routes.shift_remove(name);
    let was_matched = matched.is_some();
    let methods = matched.unwrap_or_default();

    let (children, leftover) = visit_method_level(children, methods);

    if was_matched && !leftover.is_empty() {
        return Err(PatchError::UnconsumedMethods {
            route: name.clone(),
            leftover,
        });
    }

    Ok((Decl::exported_namespace(name.clone(), children), routes))
}

/// Fold the method level over a route namespace body.
fn visit_method_level(children: &[Decl], methods: Methods) -> (Vec<Decl>, Methods) {
    let mut remaining = methods;
    let mut out = Vec::with_capacity(children.len());
    for child in children {
        let (child, rest) = visit_method(child, remaining);
        out.push(child);
        remaining = rest;
    }
    (out, remaining)
}

/// Method level: `Get`, `Post`. A match hands the whole `MethodParams` down
/// to the parameter groups in one step; if no existing `Parameters` group
/// received it, a synthesized one is appended after the existing children.
fn visit_method(node: &Decl, mut methods: Methods) -> (Decl, Methods) {
    let Decl::Namespace { name, children, .. } = node else {
        return (node.clone(), methods);
    };

    let matched = methods.shift_remove(name);

    let empty = MethodParams::default();
    let mut params_added = false;
    let mut out = Vec::with_capacity(children.len());
    for child in children {
        let to_add = if params_added {
            &empty
        } else {
            matched.as_ref().unwrap_or(&empty)
        };
        let (just_added, child) = visit_group(child, to_add);
        params_added = params_added || just_added;
        out.push(child);
    }

    if let Some(params) = &matched
        && !params_added
    {
        let mut synthesized = Vec::new();
        append_param_interfaces(&mut synthesized, params);
        out.push(Decl::exported_namespace(PARAMETERS_NAMESPACE, synthesized));
    }

    (Decl::exported_namespace(name.clone(), out), methods)
}

/// Parameter-group level: only a namespace literally named `Parameters`
/// receives the synthesized interfaces; `Responses` is exported but left
/// alone; any other node passes through unchanged.
fn visit_group(node: &Decl, params: &MethodParams) -> (bool, Decl) {
    let Decl::Namespace { name, children, .. } = node else {
        return (false, node.clone());
    };

    match name.as_str() {
        PARAMETERS_NAMESPACE => {
            let mut out = children.clone();
            append_param_interfaces(&mut out, params);
            (true, Decl::exported_namespace(name.clone(), out))
        }
        RESPONSES_NAMESPACE => (
            false,
            Decl::exported_namespace(name.clone(), children.clone()),
        ),
        _ => (false, node.clone()),
    }
}
