//! Accessor shape validation.
//!
//! A small per-use-site classification: the member name decides whether the
//! declaration is a getter, a setter, or neither, and the signature is
//! validated against that classification. No state is carried between
//! use-sites.

use warden_core::{Diagnostic, Diagnostics};
use warden_model::MethodDecl;

/// Classification of an accessor-annotated member by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessorKind {
    /// `getX` or `isX`.
    Getter,
    /// `setX`.
    Setter,
    /// Neither prefix applies.
    InvalidName,
}

/// Classify a member name.
pub fn classify_accessor(name: &str) -> AccessorKind {
    if (name.starts_with("get") && name.len() > 3) || (name.starts_with("is") && name.len() > 2) {
        AccessorKind::Getter
    } else if name.starts_with("set") && name.len() > 3 {
        AccessorKind::Setter
    } else {
        AccessorKind::InvalidName
    }
}

/// Validate one accessor-annotated method.
///
/// Getter checks are independent: a getter can fail both the return-type
/// check and the parameter check. An invalid name short-circuits; no shape
/// checks follow.
pub fn validate_accessor(method: &MethodDecl) -> Diagnostics {
    let mut diagnostics = Diagnostics::new();
    let mut report = |message: String| {
        let mut diagnostic = Diagnostic::error(message).with_origin(method.path());
        if let Some(loc) = &method.loc {
            diagnostic = diagnostic.with_loc(loc.clone());
        }
        diagnostics.push(diagnostic);
    };

    match classify_accessor(&method.name) {
        AccessorKind::Getter => {
            if method.return_type.is_void() {
                report("Invalid getter return type: cannot be 'void'".to_string());
            }
            if !method.params.is_empty() {
                report("Getter cannot have parameters".to_string());
            }
        }
        AccessorKind::Setter => {
            if !method.return_type.is_void() {
                report("Invalid setter return type: must be 'void'".to_string());
            }
            if method.params.len() != 1 {
                report("Setter must have a single parameter".to_string());
            }
        }
        AccessorKind::InvalidName => {
            report(format!(
                "Invalid accessor name: {} must start with 'get', 'is' or 'set'",
                method.name
            ));
        }
    }

    diagnostics
}
