//! Native method dispatch bridge.
//!
//! Lets a dynamically-typed caller reach natively-compiled objects by
//! interface name and learn their callable surface as a transmissible string.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use nativebridge::{Interface, InterfaceRegistry, decode_signature_set, methods};
//!
//! #[derive(Interface)]
//! #[interface(name = "battery")]
//! pub struct Battery {
//!     level: f32,
//! }
//!
//! #[methods]
//! impl Battery {
//!     #[expose]
//!     pub fn level(&self) -> f32 {
//!         self.level
//!     }
//!
//!     #[expose(name = "isLow")]
//!     pub fn low(&self, threshold: f32) -> bool {
//!         self.level < threshold
//!     }
//! }
//!
//! let registry = InterfaceRegistry::new();
//! registry.register(Arc::new(Battery { level: 0.5 }));
//!
//! let encoded = registry.resolve_signatures("battery").unwrap();
//! assert_eq!(&*encoded, "{isLow=low:Z'F, level=level:F}");
//! assert_eq!(decode_signature_set(&encoded).unwrap().len(), 2);
//! ```

pub mod error;
pub mod ffi;

pub use nativebridge_macros::{Interface, methods};

pub use nativebridge_core::{
    DecodeError, DecodeResult, Exposure, InterfaceEntry, MethodDescriptor, MethodMeta,
    MethodTable, NativeModule, NativeType, Signature, TypeDescriptor, TypeKey,
};
pub use nativebridge_registry::{
    CacheStats, InterfaceRegistry, RegistryConfig, SignatureCache, decode_signature_set,
    encode_signature_set,
};

pub use error::{BridgeError, BridgeResult};

pub mod prelude {
    pub use crate::{
        Interface, InterfaceRegistry, MethodTable, NativeModule, NativeType, RegistryConfig,
        methods,
    };
}
