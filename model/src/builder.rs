//! ProgramIndexBuilder for constructing an immutable ProgramIndex.

use crate::{
    AnnotationUse, MethodDecl, ModelError, ModelResult, ParamDecl, ProgramIndex, SubtypeIndex,
    TypeDecl, TypeId,
};
use std::collections::HashMap;
use warden_core::{SourceLoc, TypeRef};

/// Builder for constructing an immutable `ProgramIndex`.
#[derive(Debug, Default)]
pub struct ProgramIndexBuilder {
    /// Next type ID to allocate.
    next_type_id: u32,
    /// Type declarations being built.
    types: HashMap<TypeId, TypeDecl>,
    /// Type name to ID mapping.
    type_names: HashMap<String, TypeId>,
    /// Method declarations being built.
    methods: Vec<MethodDecl>,
}

impl ProgramIndexBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a type declaration.
    pub fn add_type(&mut self, name: impl Into<String>) -> TypeDeclBuilder<'_> {
        let name = name.into();
        let id = self.alloc_type_id();

        TypeDeclBuilder {
            builder: self,
            decl: TypeDecl::new(id, name),
        }
    }

    /// Add a method declaration.
    pub fn add_method(
        &mut self,
        owner: impl Into<String>,
        name: impl Into<String>,
    ) -> MethodDeclBuilder<'_> {
        MethodDeclBuilder {
            builder: self,
            method: MethodDecl::new(owner, name),
        }
    }

    /// Build the immutable `ProgramIndex`.
    pub fn build(mut self) -> ProgramIndex {
        // Register bare declarations for parent types that were referenced
        // but never declared, so direct subtype edges to them still resolve.
        let mut missing: Vec<String> = Vec::new();
        for decl in self.types.values() {
            for parent in decl.supertype.iter().chain(decl.interfaces.iter()) {
                if !self.type_names.contains_key(parent.name()) {
                    missing.push(parent.name().to_string());
                }
            }
        }
        for name in missing {
            if self.type_names.contains_key(&name) {
                continue;
            }
            let id = self.alloc_type_id();
            self.type_names.insert(name.clone(), id);
            self.types.insert(id, TypeDecl::new(id, name));
        }

        let subtype_index = SubtypeIndex::build(&self.types, &self.type_names);

        // Index methods by the annotations they carry
        let mut methods_by_annotation: HashMap<String, Vec<usize>> = HashMap::new();
        for (i, method) in self.methods.iter().enumerate() {
            for annotation in &method.annotations {
                methods_by_annotation
                    .entry(annotation.clone())
                    .or_default()
                    .push(i);
            }
        }

        ProgramIndex::new(
            self.types,
            self.type_names,
            self.methods,
            methods_by_annotation,
            subtype_index,
        )
    }

    fn alloc_type_id(&mut self) -> TypeId {
        let id = TypeId::new(self.next_type_id);
        self.next_type_id += 1;
        id
    }
}

/// Builder for a type declaration.
pub struct TypeDeclBuilder<'a> {
    builder: &'a mut ProgramIndexBuilder,
    decl: TypeDecl,
}

impl<'a> TypeDeclBuilder<'a> {
    /// Set the direct supertype.
    pub fn extends(mut self, supertype: TypeRef) -> Self {
        self.decl.supertype = Some(supertype);
        self
    }

    /// Add an implemented interface.
    pub fn implements(mut self, interface: TypeRef) -> Self {
        self.decl.interfaces.push(interface);
        self
    }

    /// Add an annotation to this declaration.
    pub fn annotate(mut self, annotation: AnnotationUse) -> Self {
        self.decl.annotations.push(annotation);
        self
    }

    /// Set the source location.
    pub fn at(mut self, loc: SourceLoc) -> Self {
        self.decl.loc = Some(loc);
        self
    }

    /// Finish building this type declaration.
    pub fn done(self) -> ModelResult<TypeId> {
        if self.builder.type_names.contains_key(&self.decl.name) {
            return Err(ModelError::DuplicateTypeName(self.decl.name));
        }
        let id = self.decl.id;
        self.builder.type_names.insert(self.decl.name.clone(), id);
        self.builder.types.insert(id, self.decl);
        Ok(id)
    }
}

/// Builder for a method declaration.
pub struct MethodDeclBuilder<'a> {
    builder: &'a mut ProgramIndexBuilder,
    method: MethodDecl,
}

impl<'a> MethodDeclBuilder<'a> {
    /// Set the return type (defaults to `void`).
    pub fn returns(mut self, ty: TypeRef) -> Self {
        self.method.return_type = ty;
        self
    }

    /// Add a parameter.
    pub fn param(mut self, name: impl Into<String>, ty: TypeRef) -> Self {
        self.method.params.push(ParamDecl::new(name, ty));
        self
    }

    /// Add a parameter with a source location.
    pub fn param_at(mut self, name: impl Into<String>, ty: TypeRef, loc: SourceLoc) -> Self {
        let mut param = ParamDecl::new(name, ty);
        param.loc = Some(loc);
        self.method.params.push(param);
        self
    }

    /// Add an annotation by qualified name.
    pub fn annotate(mut self, annotation: impl Into<String>) -> Self {
        self.method.annotations.push(annotation.into());
        self
    }

    /// Set the source location.
    pub fn at(mut self, loc: SourceLoc) -> Self {
        self.method.loc = Some(loc);
        self
    }

    /// Finish building this method declaration.
    pub fn done(self) {
        self.builder.methods.push(self.method);
    }
}
