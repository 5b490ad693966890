//! Membership checking and constraint-metadata resolution.

use crate::TypeMatcher;
use std::fmt;
use warden_core::{Diagnostic, TypeRef};
use warden_model::{AnnotationUse, ProgramModel};
use warden_registry::OverrideRegistry;

/// Which slot of a use-site is being checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotKind {
    /// The method's return type.
    Return,
    /// One of the method's parameter types.
    Parameter,
}

impl fmt::Display for SlotKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SlotKind::Return => write!(f, "return"),
            SlotKind::Parameter => write!(f, "parameter"),
        }
    }
}

/// Check an actual type against a compiled allow-list.
///
/// Passes iff any matcher matches; first match wins. On failure the
/// diagnostic lists every matcher in declaration order. The caller attaches
/// attribution.
pub fn check_type<M: ProgramModel>(
    model: &M,
    actual: &TypeRef,
    matchers: &[TypeMatcher],
    kind: SlotKind,
) -> Result<(), Diagnostic> {
    if matchers.iter().any(|m| m.matches(model, actual)) {
        return Ok(());
    }
    let allowed = matchers
        .iter()
        .map(|m| m.to_string())
        .collect::<Vec<_>>()
        .join(", ");
    Err(Diagnostic::error(format!(
        "Invalid {kind} type: '{actual}' must be one of: [{allowed}]"
    )))
}

/// Read a constraint meta-annotation for an annotation type, redirected
/// through the override registry.
///
/// When an override is registered for the annotation, its metadata is read
/// from the override declaration instead of the annotation declaration -
/// uniformly, including mere presence checks.
pub fn constraint_meta<'m, M: ProgramModel>(
    model: &'m M,
    overrides: &OverrideRegistry,
    annotation: &str,
    meta: &str,
) -> Option<&'m AnnotationUse> {
    match overrides.override_for(annotation) {
        Some(override_name) => model.annotation_on(override_name, meta),
        None => model.annotation_on(annotation, meta),
    }
}
