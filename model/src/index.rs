//! The in-memory program index - immutable declaration lookup.

use crate::{MethodDecl, ProgramModel, SubtypeIndex, TypeDecl, TypeId};
use std::collections::HashMap;
use warden_core::TypeRef;

/// In-memory `ProgramModel` implementation.
///
/// Immutable after construction; use `ProgramIndexBuilder` to populate it.
#[derive(Debug)]
pub struct ProgramIndex {
    /// Type declarations by ID.
    types: HashMap<TypeId, TypeDecl>,
    /// Type ID lookup by qualified name.
    type_names: HashMap<String, TypeId>,
    /// Method declarations, in registration order.
    methods: Vec<MethodDecl>,
    /// Method indices by annotation name.
    methods_by_annotation: HashMap<String, Vec<usize>>,
    /// Precomputed transitive subtype relationships.
    subtype_index: SubtypeIndex,
}

impl ProgramIndex {
    pub(crate) fn new(
        types: HashMap<TypeId, TypeDecl>,
        type_names: HashMap<String, TypeId>,
        methods: Vec<MethodDecl>,
        methods_by_annotation: HashMap<String, Vec<usize>>,
        subtype_index: SubtypeIndex,
    ) -> Self {
        Self {
            types,
            type_names,
            methods,
            methods_by_annotation,
            subtype_index,
        }
    }

    /// Get a type ID by qualified name.
    pub fn type_id(&self, name: &str) -> Option<TypeId> {
        self.type_names.get(name).copied()
    }

    /// Get all method declarations, in registration order.
    pub fn all_methods(&self) -> impl Iterator<Item = &MethodDecl> {
        self.methods.iter()
    }

    /// The distinct annotation names used on methods, sorted.
    ///
    /// Convenience for hosts that drive a round from "whatever annotations
    /// appear in this compilation unit".
    pub fn used_annotations(&self) -> Vec<String> {
        let mut names: Vec<String> = self.methods_by_annotation.keys().cloned().collect();
        names.sort();
        names
    }
}

impl ProgramModel for ProgramIndex {
    fn annotated_methods(&self, annotation: &str) -> Vec<&MethodDecl> {
        self.methods_by_annotation
            .get(annotation)
            .map(|indices| indices.iter().map(|&i| &self.methods[i]).collect())
            .unwrap_or_default()
    }

    fn type_decl(&self, name: &str) -> Option<&TypeDecl> {
        self.type_names.get(name).and_then(|id| self.types.get(id))
    }

    fn is_subtype(&self, sub: &TypeRef, super_type: &TypeRef) -> bool {
        if self.is_same_type(sub, super_type) {
            return true;
        }
        if !sub.is_declared() || !super_type.is_declared() {
            return false;
        }
        // Same raw type with different arguments is not a subtype.
        if sub.name() == super_type.name() {
            return false;
        }
        match (self.type_id(sub.name()), self.type_id(super_type.name())) {
            (Some(sub_id), Some(super_id)) => self.subtype_index.is_subtype(sub_id, super_id),
            _ => false,
        }
    }
}
