//! Warden Override Registry
//!
//! Resolves out-of-band override declarations once per processing session.
//!
//! Responsibilities:
//! - Load override candidates from the listing resource and from
//!   registry-style discovery
//! - Deduplicate by identity (first registration wins)
//! - Validate that every override names a target
//! - Produce the immutable target-to-override mapping used to redirect
//!   constraint lookups

mod discovery;
mod listing;
mod loader;
mod registry;
mod resolution;

pub use discovery::{provider_identity, DiscoveryError};
pub use listing::parse_listing;
pub use loader::OverrideLoader;
pub use registry::{OverrideRecord, OverrideRegistry};
pub use resolution::Resolution;
