//! The seam between native module types and the registry.
//!
//! A native module declares two things about its type:
//!
//! - [`InterfaceEntry`] - the interface name it answers to, if any.
//! - [`MethodTable`] - the table of its methods with their exposure markers.
//!
//! Any `Send + Sync + 'static` type with both gets [`NativeModule`] for free,
//! which is the object-safe view the registry stores behind `Arc`.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use nativebridge_core::{
//!     Exposure, InterfaceEntry, MethodMeta, MethodTable, NativeModule, TypeDescriptor,
//! };
//!
//! struct Clock;
//!
//! impl InterfaceEntry for Clock {
//!     fn interface_entry() -> Option<&'static str> {
//!         Some("clock")
//!     }
//! }
//!
//! impl MethodTable for Clock {
//!     fn method_table() -> Vec<MethodMeta> {
//!         vec![MethodMeta::new("now", vec![], TypeDescriptor::Int64).exposed(Exposure::new())]
//!     }
//! }
//!
//! let module: Arc<dyn NativeModule> = Arc::new(Clock);
//! assert_eq!(module.entry_name(), Some("clock"));
//! assert_eq!(module.methods().len(), 1);
//! ```

use std::any::{Any, TypeId};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use crate::MethodMeta;

/// Identity of a concrete native type.
///
/// Compares by [`TypeId`]; the type name is carried for diagnostics only.
#[derive(Clone, Copy)]
pub struct TypeKey {
    id: TypeId,
    name: &'static str,
}

impl TypeKey {
    #[inline]
    pub fn of<T: ?Sized + 'static>() -> Self {
        TypeKey {
            id: TypeId::of::<T>(),
            name: std::any::type_name::<T>(),
        }
    }

    #[inline]
    pub fn id(&self) -> TypeId {
        self.id
    }

    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl PartialEq for TypeKey {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TypeKey {}

impl Hash for TypeKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for TypeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// Declared interface entry name of a native type.
pub trait InterfaceEntry {
    /// `None` (or an empty name) means the type is not dispatch-reachable.
    fn interface_entry() -> Option<&'static str>;
}

/// Compile-time method table of a native type.
pub trait MethodTable {
    /// Every method of the type, marked or not, in declaration order.
    fn method_table() -> Vec<MethodMeta> {
        Vec::new()
    }
}

/// Object-safe view of a registrable native module.
pub trait NativeModule: Send + Sync + 'static {
    /// Declared entry name.
    fn entry_name(&self) -> Option<&'static str>;

    /// Method table of the concrete type.
    fn methods(&self) -> Vec<MethodMeta>;

    /// Identity of the concrete type.
    fn type_key(&self) -> TypeKey;

    /// Upcast for downcasting to the concrete type.
    fn into_any(self: Arc<Self>) -> Arc<dyn Any + Send + Sync>;
}

impl<T> NativeModule for T
where
    T: InterfaceEntry + MethodTable + Send + Sync + 'static,
{
    fn entry_name(&self) -> Option<&'static str> {
        <T as InterfaceEntry>::interface_entry()
    }

    fn methods(&self) -> Vec<MethodMeta> {
        <T as MethodTable>::method_table()
    }

    fn type_key(&self) -> TypeKey {
        TypeKey::of::<T>()
    }

    fn into_any(self: Arc<Self>) -> Arc<dyn Any + Send + Sync> {
        self
    }
}

impl fmt::Debug for dyn NativeModule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NativeModule")
            .field("entry", &self.entry_name())
            .field("type", &self.type_key())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Exposure, TypeDescriptor};

    struct Plain;

    impl InterfaceEntry for Plain {
        fn interface_entry() -> Option<&'static str> {
            None
        }
    }

    impl MethodTable for Plain {}

    struct Torch;

    impl InterfaceEntry for Torch {
        fn interface_entry() -> Option<&'static str> {
            Some("torch")
        }
    }

    impl MethodTable for Torch {
        fn method_table() -> Vec<MethodMeta> {
            vec![
                MethodMeta::new("toggle", vec![], TypeDescriptor::Bool).exposed(Exposure::new()),
                MethodMeta::new("internal", vec![], TypeDescriptor::Void),
            ]
        }
    }

    #[test]
    fn blanket_module_impl() {
        let module: Arc<dyn NativeModule> = Arc::new(Torch);
        assert_eq!(module.entry_name(), Some("torch"));
        assert_eq!(module.methods().len(), 2);
        assert_eq!(module.type_key(), TypeKey::of::<Torch>());
    }

    #[test]
    fn default_method_table_is_empty() {
        let module: Arc<dyn NativeModule> = Arc::new(Plain);
        assert_eq!(module.entry_name(), None);
        assert!(module.methods().is_empty());
    }

    #[test]
    fn type_key_ignores_instance() {
        let a: Arc<dyn NativeModule> = Arc::new(Torch);
        let b: Arc<dyn NativeModule> = Arc::new(Torch);
        assert_eq!(a.type_key(), b.type_key());
        assert_ne!(a.type_key(), TypeKey::of::<Plain>());
    }

    #[test]
    fn downcast_through_any() {
        let module: Arc<dyn NativeModule> = Arc::new(Torch);
        assert!(module.clone().into_any().downcast::<Torch>().is_ok());
        assert!(module.into_any().downcast::<Plain>().is_err());
    }

    #[test]
    fn type_key_debug_is_type_name() {
        let rendered = format!("{:?}", TypeKey::of::<Torch>());
        assert!(rendered.ends_with("Torch"));
    }
}
