//! OverrideLoader for constructing an immutable OverrideRegistry.

use crate::{
    parse_listing, provider_identity, DiscoveryError, OverrideRecord, OverrideRegistry, Resolution,
};
use std::collections::{HashMap, HashSet};
use warden_core::well_known::{ATTR_VALUE, CONSTRAINT_OVERRIDE, OVERRIDE_FOR};
use warden_core::{Diagnostic, Diagnostics};
use warden_model::ProgramModel;

/// Builds the session's `OverrideRegistry` from candidate identities.
///
/// Loading is idempotent per identity and never aborts: every candidate is
/// classified into a `Resolution` and, where warranted, a diagnostic. Built
/// once before any checking begins; the finished registry is read-only.
pub struct OverrideLoader<'m, M: ProgramModel> {
    model: &'m M,
    /// Identities already processed, loaded or not.
    seen: HashSet<String>,
    /// Identities successfully loaded via the listing channel. Used to
    /// suppress duplicate discovery noise for the same provider.
    from_listing: HashSet<String>,
    /// Override declaration name by target annotation name.
    by_target: HashMap<String, String>,
    /// Records in load order.
    records: Vec<OverrideRecord>,
}

impl<'m, M: ProgramModel> OverrideLoader<'m, M> {
    /// Create a loader over the given program model.
    pub fn new(model: &'m M) -> Self {
        Self {
            model,
            seen: HashSet::new(),
            from_listing: HashSet::new(),
            by_target: HashMap::new(),
            records: Vec::new(),
        }
    }

    /// Load every identity named by a listing resource.
    ///
    /// The resource may legitimately not exist; hosts simply skip this call
    /// then. Entries that fail to resolve here may still be picked up by the
    /// discovery channel later without duplicate noise.
    pub fn load_listing(&mut self, text: &str, diagnostics: &mut Diagnostics) {
        for identity in parse_listing(text, diagnostics) {
            let resolution = self.load(&identity, diagnostics);
            if resolution.is_loaded() {
                self.from_listing.insert(identity);
            }
        }
    }

    /// Load every entry yielded by the discovery channel.
    ///
    /// Per-entry `ProviderNotFound` failures are expected when a provider's
    /// compiled form does not exist yet; they are noted and skipped, and
    /// silenced entirely when the listing channel already loaded the same
    /// identity.
    pub fn load_discovered<I>(&mut self, entries: I, diagnostics: &mut Diagnostics)
    where
        I: IntoIterator<Item = Result<String, DiscoveryError>>,
    {
        for entry in entries {
            match entry {
                Ok(identity) => {
                    self.load(&identity, diagnostics);
                }
                Err(DiscoveryError::ProviderNotFound(message)) => {
                    match provider_identity(&message, CONSTRAINT_OVERRIDE) {
                        Some(identity) if self.from_listing.contains(identity) => {
                            // Already loaded via the listing; stay quiet.
                        }
                        Some(identity) => {
                            diagnostics.push(Diagnostic::note(format!(
                                "Failed to load service provider: {identity}"
                            )));
                        }
                        None => {
                            diagnostics.push(Diagnostic::note(format!(
                                "Failed to load service provider: {message}"
                            )));
                        }
                    }
                }
                Err(DiscoveryError::Other(message)) => {
                    diagnostics.push(Diagnostic::note(format!(
                        "Failed to load service provider: {message}"
                    )));
                }
            }
        }
    }

    /// Load a single override candidate by identity.
    pub fn load(&mut self, identity: &str, diagnostics: &mut Diagnostics) -> Resolution {
        // Do not process overrides twice
        if !self.seen.insert(identity.to_string()) {
            return Resolution::AlreadyLoaded;
        }

        let decl = match self.model.type_decl(identity) {
            Some(decl) => decl,
            None => {
                diagnostics.push(Diagnostic::warning(format!(
                    "Failed to load override class: {identity}"
                )));
                return Resolution::NotFound;
            }
        };

        let target = decl
            .annotation(OVERRIDE_FOR)
            .and_then(|a| a.attr(ATTR_VALUE))
            .and_then(|v| v.as_type());
        let target = match target {
            Some(target) => target.name().to_string(),
            None => {
                let mut diagnostic = Diagnostic::error(
                    "Override declarations must carry an OverrideFor target annotation",
                )
                .with_origin(identity);
                if let Some(loc) = &decl.loc {
                    diagnostic = diagnostic.with_loc(loc.clone());
                }
                diagnostics.push(diagnostic);
                return Resolution::MissingTarget;
            }
        };

        // At most one override per target; first registration wins
        if self.by_target.contains_key(&target) {
            diagnostics.push(
                Diagnostic::note(format!(
                    "Ignoring duplicate override for target: {target}"
                ))
                .with_origin(identity),
            );
            return Resolution::DuplicateTarget { target };
        }

        self.by_target.insert(target.clone(), identity.to_string());
        self.records.push(OverrideRecord {
            override_name: identity.to_string(),
            target_name: target.clone(),
        });
        Resolution::Loaded { target }
    }

    /// Finish loading and produce the immutable registry.
    pub fn finish(self) -> OverrideRegistry {
        OverrideRegistry::new(self.by_target, self.records)
    }
}
