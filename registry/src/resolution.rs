//! Per-candidate resolution outcomes.

/// Outcome of resolving one override candidate identity.
///
/// Resolution never fails the session: each outcome is a tagged value and the
/// loader moves on to the next candidate regardless.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// The override was resolved and its target recorded.
    Loaded {
        /// The target annotation identity now mapped to this override.
        target: String,
    },
    /// The identity was already processed in this session; no-op.
    AlreadyLoaded,
    /// The identity did not resolve to a declaration. Ignorable: the
    /// override may live in a unit that is not compiled yet.
    NotFound,
    /// The declaration carries no usable `OverrideFor` target reference.
    MissingTarget,
    /// Another override already claimed the same target; first wins.
    DuplicateTarget {
        /// The contested target annotation identity.
        target: String,
    },
}

impl Resolution {
    /// Check if this outcome recorded a new override.
    pub fn is_loaded(&self) -> bool {
        matches!(self, Resolution::Loaded { .. })
    }
}
