//! Type declaration definitions.

use std::collections::{HashMap, HashSet};
use warden_core::{SourceLoc, TypeRef};

/// Interned identifier for a type declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypeId(u32);

impl TypeId {
    /// Create a type ID from a raw value.
    pub fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// The raw value.
    pub fn raw(&self) -> u32 {
        self.0
    }
}

/// An attribute value read off an annotation instance.
///
/// Type-valued attributes are retrieved directly as `TypeRef`s; there is no
/// signal-style indirection on this seam.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttrValue {
    /// A single type reference (e.g. an override target).
    Type(TypeRef),
    /// An ordered list of type references (e.g. an allow-list).
    Types(Vec<TypeRef>),
    /// A string value.
    Str(String),
}

impl AttrValue {
    /// The single type reference, if this value holds one.
    pub fn as_type(&self) -> Option<&TypeRef> {
        match self {
            AttrValue::Type(ty) => Some(ty),
            _ => None,
        }
    }

    /// The type list, if this value holds one.
    pub fn as_types(&self) -> Option<&[TypeRef]> {
        match self {
            AttrValue::Types(types) => Some(types),
            _ => None,
        }
    }
}

/// A concrete use of an annotation, with its attribute values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotationUse {
    /// Qualified name of the annotation type.
    pub name: String,
    /// Attribute values by attribute name.
    pub values: HashMap<String, AttrValue>,
}

impl AnnotationUse {
    /// Create an annotation use with no attributes.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            values: HashMap::new(),
        }
    }

    /// Add an attribute value.
    pub fn with_attr(mut self, attr: impl Into<String>, value: AttrValue) -> Self {
        self.values.insert(attr.into(), value);
        self
    }

    /// Get an attribute value by name.
    pub fn attr(&self, name: &str) -> Option<&AttrValue> {
        self.values.get(name)
    }
}

/// A type declaration in the host program.
///
/// Annotation types, classes and override declarations are all type
/// declarations; what distinguishes them is the annotations they carry.
#[derive(Debug, Clone)]
pub struct TypeDecl {
    /// Unique identifier.
    pub id: TypeId,
    /// Qualified name.
    pub name: String,
    /// Direct declared supertype, with its generic arguments.
    pub supertype: Option<TypeRef>,
    /// Directly implemented interfaces.
    pub interfaces: Vec<TypeRef>,
    /// Annotations present on this declaration.
    pub annotations: Vec<AnnotationUse>,
    /// Source location, if known.
    pub loc: Option<SourceLoc>,
}

impl TypeDecl {
    /// Create a new type declaration.
    pub fn new(id: TypeId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            supertype: None,
            interfaces: Vec::new(),
            annotations: Vec::new(),
            loc: None,
        }
    }

    /// Get an annotation on this declaration by annotation-type name.
    pub fn annotation(&self, name: &str) -> Option<&AnnotationUse> {
        self.annotations.iter().find(|a| a.name == name)
    }

    /// Check if this declaration carries the given annotation.
    pub fn has_annotation(&self, name: &str) -> bool {
        self.annotation(name).is_some()
    }
}

/// Precomputed transitive subtype relationships.
#[derive(Debug, Default)]
pub struct SubtypeIndex {
    /// For each type, the set of all its supertypes (transitive).
    supertypes: HashMap<TypeId, HashSet<TypeId>>,
}

impl SubtypeIndex {
    /// Create an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the index from type declarations.
    ///
    /// Both the superclass edge and interface edges contribute: subtyping
    /// treats interfaces and classes alike.
    pub fn build(types: &HashMap<TypeId, TypeDecl>, names: &HashMap<String, TypeId>) -> Self {
        let mut index = Self::new();

        for &type_id in types.keys() {
            index.supertypes.insert(type_id, HashSet::new());
        }

        // Direct edges first
        for (type_id, decl) in types {
            let parents = decl.supertype.iter().chain(decl.interfaces.iter());
            for parent in parents {
                if let Some(&parent_id) = names.get(parent.name()) {
                    if let Some(set) = index.supertypes.get_mut(type_id) {
                        set.insert(parent_id);
                    }
                }
            }
        }

        // Transitively close the relation
        let type_ids: Vec<TypeId> = types.keys().copied().collect();
        let mut changed = true;
        while changed {
            changed = false;
            for &type_id in &type_ids {
                let direct: Vec<TypeId> = index
                    .supertypes
                    .get(&type_id)
                    .map(|s| s.iter().copied().collect())
                    .unwrap_or_default();

                for super_id in direct {
                    let transitive: Vec<TypeId> = index
                        .supertypes
                        .get(&super_id)
                        .map(|s| s.iter().copied().collect())
                        .unwrap_or_default();

                    for trans_id in transitive {
                        if let Some(set) = index.supertypes.get_mut(&type_id) {
                            if set.insert(trans_id) {
                                changed = true;
                            }
                        }
                    }
                }
            }
        }

        index
    }

    /// Check if `sub` is a subtype of `super_type` (reflexive).
    pub fn is_subtype(&self, sub: TypeId, super_type: TypeId) -> bool {
        if sub == super_type {
            return true;
        }
        self.supertypes
            .get(&sub)
            .map(|set| set.contains(&super_type))
            .unwrap_or(false)
    }

    /// Get all supertypes of a type (not including the type itself).
    pub fn supertypes(&self, type_id: TypeId) -> impl Iterator<Item = TypeId> + '_ {
        self.supertypes
            .get(&type_id)
            .into_iter()
            .flat_map(|set| set.iter().copied())
    }
}
