//! InterfaceRegistry - interface name to native module mapping.
//!
//! This module provides [`InterfaceRegistry`], the single source of truth for
//! which native object answers to which interface name, together with the
//! signature resolver that describes an object's callable surface to the
//! dynamic side.
//!
//! # Storage Model
//!
//! - **Modules**: `Arc<str>` name → `Arc<dyn NativeModule>`, behind one
//!   `RwLock`. Registration replaces any previous module under the same name.
//! - **Signatures**: a [`SignatureCache`] keyed by the module's concrete type,
//!   filled lazily by [`InterfaceRegistry::resolve_signatures`].
//!
//! # Thread Safety
//!
//! `InterfaceRegistry` is `Send + Sync`. Registration and lookup may race from
//! any thread; lookups share the read lock and only wait behind a writer's
//! insert. Share it by reference or `Arc` from process start instead of
//! reaching for a global.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use nativebridge_core::{
//!     Exposure, InterfaceEntry, MethodMeta, MethodTable, TypeDescriptor,
//! };
//! use nativebridge_registry::InterfaceRegistry;
//!
//! struct Battery;
//!
//! impl InterfaceEntry for Battery {
//!     fn interface_entry() -> Option<&'static str> {
//!         Some("battery")
//!     }
//! }
//!
//! impl MethodTable for Battery {
//!     fn method_table() -> Vec<MethodMeta> {
//!         vec![MethodMeta::new("level", vec![], TypeDescriptor::Float)
//!             .exposed(Exposure::new())]
//!     }
//! }
//!
//! let registry = InterfaceRegistry::new();
//! registry.register(Arc::new(Battery));
//!
//! assert!(registry.lookup("battery").is_some());
//! assert_eq!(registry.resolve_signatures("battery").as_deref(), Some("{level=level:F}"));
//! ```

use std::any::Any;
use std::sync::Arc;

use nativebridge_core::{MethodDescriptor, MethodMeta, NativeModule};
use parking_lot::RwLock;
use rustc_hash::FxHashMap;

use crate::cache::{CacheStats, SignatureCache};
use crate::config::RegistryConfig;
use crate::encoding::{collect_signature_map, encode_signature_set};

type ModuleMap = FxHashMap<Arc<str>, Arc<dyn NativeModule>>;

/// Registry of native modules addressable by interface name.
pub struct InterfaceRegistry {
    modules: RwLock<ModuleMap>,
    signatures: SignatureCache,
    config: RegistryConfig,
}

impl InterfaceRegistry {
    /// Create an empty registry with default configuration.
    pub fn new() -> Self {
        Self::with_config(RegistryConfig::default())
    }

    pub fn with_config(config: RegistryConfig) -> Self {
        let mut modules = ModuleMap::default();
        modules.reserve(config.capacity);
        Self {
            modules: RwLock::new(modules),
            signatures: SignatureCache::new(),
            config,
        }
    }

    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    // ==========================================================================
    // Registration
    // ==========================================================================

    /// Install `module` under its declared interface name.
    ///
    /// A module without a declared name, or with an empty one, is ignored.
    /// An existing module under the same name is replaced.
    pub fn register(&self, module: Arc<dyn NativeModule>) {
        let name = match module.entry_name() {
            Some(name) if !name.is_empty() => name,
            _ => {
                tracing::trace!(
                    native_type = ?module.type_key(),
                    "skipping module without interface entry name"
                );
                return;
            }
        };

        let native_type = module.type_key();
        let previous = self.modules.write().insert(Arc::from(name), module);

        match previous {
            Some(previous) if self.config.warn_on_collision => {
                tracing::warn!(
                    interface = name,
                    replaced = ?previous.type_key(),
                    native_type = ?native_type,
                    "replacing registered interface"
                );
            }
            Some(previous) => {
                tracing::debug!(
                    interface = name,
                    replaced = ?previous.type_key(),
                    native_type = ?native_type,
                    "replacing registered interface"
                );
            }
            None => {
                tracing::debug!(
                    interface = name,
                    native_type = ?native_type,
                    "registered interface"
                );
            }
        }
    }

    /// Wrap `module` in an `Arc` and [`register`](Self::register) it.
    pub fn register_module<T: NativeModule>(&self, module: T) {
        self.register(Arc::new(module));
    }

    // ==========================================================================
    // Lookup
    // ==========================================================================

    /// Module currently registered under `name`.
    pub fn lookup(&self, name: &str) -> Option<Arc<dyn NativeModule>> {
        let module = self.modules.read().get(name).cloned();
        if module.is_none() {
            tracing::trace!(interface = name, "interface not registered");
        }
        module
    }

    /// Module under `name`, downcast to its concrete type.
    ///
    /// Returns `None` when nothing is registered or the type differs.
    pub fn lookup_as<T>(&self, name: &str) -> Option<Arc<T>>
    where
        T: Any + Send + Sync,
    {
        self.lookup(name)?.into_any().downcast::<T>().ok()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.modules.read().contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.modules.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.read().is_empty()
    }

    /// Registered interface names, sorted.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .modules
            .read()
            .keys()
            .map(|name| name.to_string())
            .collect();
        names.sort_unstable();
        names
    }

    // ==========================================================================
    // Signature Resolution
    // ==========================================================================

    /// Encoded signature set of the module registered under `name`.
    ///
    /// Returns `None` when `name` is not registered, or when the module's type
    /// has no methods or no exposed methods. The first call per concrete type
    /// enumerates its method table; later calls for any name backed by the same
    /// type return the cached string.
    #[cfg_attr(feature = "profiling", profiling::function)]
    pub fn resolve_signatures(&self, name: &str) -> Option<Arc<str>> {
        let module = self.lookup(name)?;
        let native_type = module.type_key();

        self.signatures.get_or_resolve(native_type, || {
            let methods = module.methods();
            let descriptors = exposed_descriptors(&methods)?;
            let exposed = descriptors.len();
            let map = collect_signature_map(descriptors);

            if map.len() < exposed {
                tracing::debug!(
                    interface = name,
                    native_type = ?native_type,
                    collapsed = exposed - map.len(),
                    "exposed name collision, later method wins"
                );
            }
            tracing::debug!(
                interface = name,
                native_type = ?native_type,
                methods = methods.len(),
                exposed = map.len(),
                "resolved method signatures"
            );
            Some(Arc::from(encode_signature_set(&map)))
        })
    }

    /// Exposed method descriptors of the module under `name`, in declaration order.
    ///
    /// Uncached structured view for in-process dispatchers. Entries sharing an
    /// exposed name are all returned; the encoded set keeps only the last.
    pub fn method_descriptors(&self, name: &str) -> Option<Vec<MethodDescriptor>> {
        let module = self.lookup(name)?;
        exposed_descriptors(&module.methods())
    }

    pub fn cache_stats(&self) -> CacheStats {
        self.signatures.stats()
    }
}

/// Descriptors of marked methods; `None` when there are none.
fn exposed_descriptors(methods: &[MethodMeta]) -> Option<Vec<MethodDescriptor>> {
    if methods.is_empty() {
        return None;
    }

    let descriptors: Vec<MethodDescriptor> =
        methods.iter().filter_map(|method| method.descriptor()).collect();
    if descriptors.is_empty() {
        None
    } else {
        Some(descriptors)
    }
}

impl Default for InterfaceRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for InterfaceRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InterfaceRegistry")
            .field("interfaces", &self.names())
            .field("signatures", &self.signatures)
            .field("config", &self.config)
            .finish()
    }
}
