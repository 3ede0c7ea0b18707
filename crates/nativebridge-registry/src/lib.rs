//! Interface registry and signature resolver.
//!
//! - [`InterfaceRegistry`] maps interface names to registered native modules
//!   and resolves their encoded signature sets.
//! - [`SignatureCache`] memoizes those sets per concrete type.
//! - [`encoding`] defines the signature-set string shared with the dynamic side.
//! - [`RegistryConfig`] builds a configured registry.

mod cache;
mod config;
pub mod encoding;
mod registry;

pub use cache::{CacheStats, SignatureCache};
pub use config::RegistryConfig;
pub use encoding::{decode_signature_set, encode_signature_set};
pub use registry::InterfaceRegistry;
