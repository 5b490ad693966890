//! Warden Program Model
//!
//! The seam between the checker and the host program: an abstract
//! `ProgramModel` capability set (annotated-declaration enumeration,
//! supertype lookup, type equality and subtyping, annotation attribute
//! reads), plus a complete in-memory implementation (`ProgramIndex`) built
//! through `ProgramIndexBuilder`.

mod builder;
mod decl;
mod error;
mod index;
mod program;
mod types;

pub use builder::{MethodDeclBuilder, ProgramIndexBuilder, TypeDeclBuilder};
pub use decl::{MethodDecl, ParamDecl};
pub use error::{ModelError, ModelResult};
pub use index::ProgramIndex;
pub use program::ProgramModel;
pub use types::{AnnotationUse, AttrValue, SubtypeIndex, TypeDecl, TypeId};
