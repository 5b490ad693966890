//! Warden Check
//!
//! Validate annotated use-sites against declared constraints.
//!
//! Responsibilities:
//! - Compile allowed-type declarations into matchers (exact and subtype,
//!   unwrapping the GenericType/Subtype markers)
//! - Check every use-site's return and parameter types, first match wins
//! - Validate accessor naming and shape rules
//! - Redirect constraint lookups through the override registry
//! - Produce precise, attributable diagnostics

mod accessor;
mod checker;
mod compile;
mod matcher;
mod processor;

pub use accessor::{classify_accessor, validate_accessor, AccessorKind};
pub use checker::{check_type, constraint_meta, SlotKind};
pub use compile::compile_specs;
pub use matcher::TypeMatcher;
pub use processor::Processor;
