//! Well-known framework names shared across Warden components.
//!
//! These constants keep the annotation, marker and attribute names consistent
//! between the registry, the checker and host integrations.

/// Meta-annotation marking an annotation whose use-sites are method-checked.
pub const CHECKED_METHOD: &str = "io.warden.annotations.CheckedMethod";

/// Meta-annotation marking an annotation whose use-sites are accessor-checked.
pub const CHECKED_ACCESSOR: &str = "io.warden.annotations.CheckedAccessor";

/// Annotation naming the target of an override declaration.
pub const OVERRIDE_FOR: &str = "io.warden.annotations.OverrideFor";

/// Marker interface implemented by override declarations; also the provider
/// interface name appearing in discovery failure messages.
pub const CONSTRAINT_OVERRIDE: &str = "io.warden.annotations.ConstraintOverride";

/// Wrapper base type requesting exact matching of its single type argument.
pub const GENERIC_TYPE_MARKER: &str = "io.warden.annotations.CheckedMethod.GenericType";

/// Wrapper base type requesting subtype matching of its single type argument.
pub const SUBTYPE_MARKER: &str = "io.warden.annotations.CheckedMethod.Subtype";

/// Attribute holding the allowed return types on `CheckedMethod`.
pub const ATTR_RETURN_TYPES: &str = "returnTypes";

/// Attribute holding the allowed parameter types on `CheckedMethod`.
pub const ATTR_PARAMETER_TYPES: &str = "parameterTypes";

/// Attribute holding the target reference on `OverrideFor`.
pub const ATTR_VALUE: &str = "value";

/// Logical path of the override listing resource.
pub const OVERRIDE_LISTING_PATH: &str =
    "META-INF/services/io.warden.annotations.ConstraintOverride";
