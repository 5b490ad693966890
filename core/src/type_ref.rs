//! Type references.
//!
//! A `TypeRef` is a handle to a concrete type as declared in the host
//! program: a qualified name, its generic arguments, and its kind. Equality
//! is structural (name plus generic arguments, compared deeply) — generic
//! arguments are compared, never erased.

use std::fmt;

/// The kind of a referenced type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeKind {
    /// The `void` pseudo-type.
    Void,
    /// A primitive type (`int`, `boolean`, ...).
    Primitive,
    /// A declared class or interface type.
    Declared,
    /// An array type; the element type is the single argument.
    Array,
}

/// A reference to a concrete type in the host program.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypeRef {
    /// The kind of this type.
    pub kind: TypeKind,
    /// Qualified name (`java.util.List`), or the keyword for void/primitives.
    pub name: String,
    /// Generic arguments, in declaration order. Always empty for void and
    /// primitives; exactly one element for arrays.
    pub args: Vec<TypeRef>,
}

impl TypeRef {
    /// The `void` pseudo-type.
    pub fn void() -> Self {
        Self {
            kind: TypeKind::Void,
            name: "void".to_string(),
            args: Vec::new(),
        }
    }

    /// A primitive type such as `int`.
    pub fn primitive(name: impl Into<String>) -> Self {
        Self {
            kind: TypeKind::Primitive,
            name: name.into(),
            args: Vec::new(),
        }
    }

    /// A non-generic declared type.
    pub fn declared(name: impl Into<String>) -> Self {
        Self {
            kind: TypeKind::Declared,
            name: name.into(),
            args: Vec::new(),
        }
    }

    /// A generic declared type instantiation, e.g. `List<Integer>`.
    pub fn generic(name: impl Into<String>, args: Vec<TypeRef>) -> Self {
        Self {
            kind: TypeKind::Declared,
            name: name.into(),
            args,
        }
    }

    /// An array of the given element type.
    pub fn array(element: TypeRef) -> Self {
        Self {
            kind: TypeKind::Array,
            name: String::new(),
            args: vec![element],
        }
    }

    /// Returns true if this is the `void` pseudo-type.
    pub fn is_void(&self) -> bool {
        self.kind == TypeKind::Void
    }

    /// Returns true if this is a primitive type.
    pub fn is_primitive(&self) -> bool {
        self.kind == TypeKind::Primitive
    }

    /// Returns true if this is a declared class or interface type.
    pub fn is_declared(&self) -> bool {
        self.kind == TypeKind::Declared
    }

    /// The qualified name, without generic arguments.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Generic arguments, in declaration order.
    pub fn args(&self) -> &[TypeRef] {
        &self.args
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TypeKind::Void | TypeKind::Primitive => write!(f, "{}", self.name),
            TypeKind::Array => write!(f, "{}[]", self.args[0]),
            TypeKind::Declared => {
                write!(f, "{}", self.name)?;
                if !self.args.is_empty() {
                    write!(f, "<")?;
                    for (i, arg) in self.args.iter().enumerate() {
                        if i > 0 {
                            write!(f, ",")?;
                        }
                        write!(f, "{arg}")?;
                    }
                    write!(f, ">")?;
                }
                Ok(())
            }
        }
    }
}
