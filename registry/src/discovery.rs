//! The discovery channel: registry-style enumeration of override providers.
//!
//! Discovery yields candidate identities, but individual entries can fail
//! when a provider's compiled form does not exist yet in the current unit.
//! Such failures carry a structured message naming the missing provider;
//! the identity is recovered from it by exact prefix/suffix stripping.

use thiserror::Error;

/// Per-entry failure raised by the discovery mechanism.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DiscoveryError {
    /// A provider is registered but its declaration cannot be loaded.
    /// Carries the full structured message,
    /// `"<interface>: Provider <identity> not found"`.
    #[error("{0}")]
    ProviderNotFound(String),

    /// Any other discovery failure; carries the raw message.
    #[error("{0}")]
    Other(String),
}

/// Extract the provider identity from a `ProviderNotFound` message.
///
/// Returns `None` when the message does not have the exact
/// `"<interface>: Provider <identity> not found"` shape.
pub fn provider_identity<'a>(message: &'a str, interface: &str) -> Option<&'a str> {
    let prefix = format!("{interface}: Provider ");
    let suffix = " not found";
    let rest = message.strip_prefix(prefix.as_str())?;
    rest.strip_suffix(suffix)
}
