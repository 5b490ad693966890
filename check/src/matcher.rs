//! Allowed-type matchers.

use std::fmt;
use warden_core::TypeRef;
use warden_model::ProgramModel;

/// Compiled form of one allowed-type entry.
///
/// The rendering is used verbatim in failure messages, so it must name the
/// allowed type the way the author declared it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeMatcher {
    /// Matches iff the actual type is type-identical to the allowed type
    /// (generic arguments compared, not erased).
    Exact(TypeRef),
    /// Matches iff the actual type is equal to or a transitive subtype of
    /// the allowed type.
    Subtype(TypeRef),
}

impl TypeMatcher {
    /// Apply this matcher to an actual declared type.
    pub fn matches<M: ProgramModel + ?Sized>(&self, model: &M, actual: &TypeRef) -> bool {
        match self {
            TypeMatcher::Exact(allowed) => model.is_same_type(actual, allowed),
            TypeMatcher::Subtype(allowed) => model.is_subtype(actual, allowed),
        }
    }

    /// The allowed type this matcher was compiled from.
    pub fn allowed(&self) -> &TypeRef {
        match self {
            TypeMatcher::Exact(allowed) | TypeMatcher::Subtype(allowed) => allowed,
        }
    }
}

// This rendering is used in error reporting
impl fmt::Display for TypeMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeMatcher::Exact(allowed) => write!(f, "{allowed}"),
            TypeMatcher::Subtype(allowed) => write!(f, "subtype of {allowed}"),
        }
    }
}
