//! Method and parameter declarations (use-sites).

use warden_core::{SourceLoc, TypeRef};

/// A parameter of a method declaration.
#[derive(Debug, Clone)]
pub struct ParamDecl {
    /// Parameter name.
    pub name: String,
    /// Declared parameter type.
    pub ty: TypeRef,
    /// Source location, if known.
    pub loc: Option<SourceLoc>,
}

impl ParamDecl {
    /// Create a new parameter.
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            name: name.into(),
            ty,
            loc: None,
        }
    }
}

/// A method declaration: the annotated use-site being checked.
#[derive(Debug, Clone)]
pub struct MethodDecl {
    /// Qualified name of the declaring type.
    pub owner: String,
    /// Simple method name.
    pub name: String,
    /// Declared return type.
    pub return_type: TypeRef,
    /// Parameters, in declaration order.
    pub params: Vec<ParamDecl>,
    /// Qualified names of annotations present on this method.
    pub annotations: Vec<String>,
    /// Source location, if known.
    pub loc: Option<SourceLoc>,
}

impl MethodDecl {
    /// Create a new method declaration returning `void` with no parameters.
    pub fn new(owner: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            name: name.into(),
            return_type: TypeRef::void(),
            params: Vec::new(),
            annotations: Vec::new(),
            loc: None,
        }
    }

    /// Dotted path of this method, used for diagnostic attribution.
    pub fn path(&self) -> String {
        format!("{}.{}", self.owner, self.name)
    }

    /// Dotted path of one of this method's parameters.
    pub fn param_path(&self, param: &ParamDecl) -> String {
        format!("{}.{}.{}", self.owner, self.name, param.name)
    }

    /// Check if this method carries the given annotation.
    pub fn has_annotation(&self, name: &str) -> bool {
        self.annotations.iter().any(|a| a == name)
    }
}
