//! Warden Core Types
//!
//! This crate provides the foundational types used throughout the Warden
//! system:
//! - Type references (TypeRef, TypeKind) with structural equality and
//!   host-style rendering
//! - Source attribution (SourceLoc)
//! - Diagnostics (Severity, Diagnostic, Diagnostics, DiagnosticSink)
//! - Well-known framework names (annotations, markers, attributes)

mod diagnostic;
mod source;
mod type_ref;
pub mod well_known;

pub use diagnostic::*;
pub use source::*;
pub use type_ref::*;
