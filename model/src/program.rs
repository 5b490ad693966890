//! The abstract program-model capability set.

use crate::{AnnotationUse, MethodDecl, TypeDecl};
use warden_core::TypeRef;

/// Read-only view of the host program consumed by the checker.
///
/// The checker never constructs types or declarations itself; everything it
/// inspects comes through this trait. `ProgramIndex` is the bundled
/// implementation; a host embedding Warden in a real toolchain supplies its
/// own.
pub trait ProgramModel {
    /// All method declarations in the current round carrying the given
    /// annotation, in a stable order.
    fn annotated_methods(&self, annotation: &str) -> Vec<&MethodDecl>;

    /// Look up a type declaration by qualified name.
    fn type_decl(&self, name: &str) -> Option<&TypeDecl>;

    /// The direct declared supertype of the given type's declaration, with
    /// its generic arguments. `None` for void, primitives, arrays and
    /// undeclared types.
    fn direct_supertype(&self, ty: &TypeRef) -> Option<&TypeRef> {
        if !ty.is_declared() {
            return None;
        }
        self.type_decl(ty.name())?.supertype.as_ref()
    }

    /// Structural type equality: same qualified name and, pairwise, the same
    /// generic arguments.
    fn is_same_type(&self, a: &TypeRef, b: &TypeRef) -> bool {
        a == b
    }

    /// Whether `sub` is equal to or a transitive subtype of `super_type`.
    fn is_subtype(&self, sub: &TypeRef, super_type: &TypeRef) -> bool;

    /// An annotation carried by the named type declaration, if present.
    fn annotation_on(&self, decl: &str, annotation: &str) -> Option<&AnnotationUse> {
        self.type_decl(decl)?.annotation(annotation)
    }
}
