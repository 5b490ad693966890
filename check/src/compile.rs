//! Compilation of allowed-type declarations into matchers.
//!
//! An allowed-type entry is usually the allowed type itself, matched
//! exactly. Authors express richer constraints by declaring a wrapper type
//! whose direct supertype is one of the well-known markers:
//! `GenericType<T>` (exact match on `T`, preserving its generic arguments)
//! or `Subtype<T>` (any subtype of `T`).

use crate::TypeMatcher;
use warden_core::well_known::{GENERIC_TYPE_MARKER, SUBTYPE_MARKER};
use warden_core::TypeRef;
use warden_model::ProgramModel;

/// Compile an ordered allow-list into matchers, one per entry, in order.
pub fn compile_specs<M: ProgramModel>(model: &M, specs: &[TypeRef]) -> Vec<TypeMatcher> {
    specs.iter().map(|spec| compile_spec(model, spec)).collect()
}

fn compile_spec<M: ProgramModel>(model: &M, spec: &TypeRef) -> TypeMatcher {
    // void, primitives, arrays and undeclared types cannot be wrappers
    if let Some(supertype) = model.direct_supertype(spec) {
        // Wrapper markers carry exactly one type argument by declaration
        // shape; a marker without one is a defect in the declaring
        // framework, not a reportable user error.
        if let [argument] = supertype.args() {
            if supertype.name() == GENERIC_TYPE_MARKER {
                return TypeMatcher::Exact(argument.clone());
            }
            if supertype.name() == SUBTYPE_MARKER {
                return TypeMatcher::Subtype(argument.clone());
            }
        }
    }
    TypeMatcher::Exact(spec.clone())
}
