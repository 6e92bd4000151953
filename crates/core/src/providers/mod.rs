//! Hosting-provider registry and identifier heuristics.
//!
//! The registry is an ordered, immutable table of hosting providers loaded
//! once at startup (builtin defaults or from the config file). The detection
//! helpers classify template variable names that relate to the provider:
//! the selector field the user fills in, and the derived fields (address,
//! website, name) that are filled automatically at render time.

pub mod detect;
pub mod registry;

pub use detect::{
    PROVIDER_TOKEN, ProviderField, is_provider_selector, mentions_provider,
    normalize_identifier, provider_field,
};
pub use registry::{ProviderEntry, ProviderRecord, ProviderRegistry};
