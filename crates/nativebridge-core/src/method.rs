//! Method metadata produced by the declaration source.
//!
//! A [`MethodMeta`] is one row of a type's method table. The `#[methods]`
//! attribute (from `nativebridge-macros`) builds these at compile time; types
//! can also build them by hand through [`MethodTable`](crate::MethodTable).
//! Only rows carrying an [`Exposure`] marker are visible to signature
//! resolution.

use crate::{Signature, TypeDescriptor};

/// The "exposed as callable" marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Exposure {
    /// Override for the name the dynamic side uses. Empty counts as absent.
    pub name: Option<&'static str>,
}

impl Exposure {
    /// Marker without a name override.
    pub const fn new() -> Self {
        Self { name: None }
    }

    /// Marker with an override name.
    pub const fn renamed(name: &'static str) -> Self {
        Self { name: Some(name) }
    }
}

/// Metadata for one native method.
///
/// `params` and `returns` are only meaningful on exposed rows; `#[methods]`
/// leaves them empty for unmarked methods.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodMeta {
    /// Native method name.
    pub name: &'static str,
    /// Exposure marker, if the method is callable from the dynamic side.
    pub exposure: Option<Exposure>,
    /// Parameter kinds, receiver excluded.
    pub params: Vec<TypeDescriptor>,
    /// Return kind.
    pub returns: TypeDescriptor,
}

impl MethodMeta {
    /// Unmarked method row.
    pub fn new(name: &'static str, params: Vec<TypeDescriptor>, returns: TypeDescriptor) -> Self {
        Self {
            name,
            exposure: None,
            params,
            returns,
        }
    }

    /// Attach an exposure marker.
    pub fn exposed(mut self, exposure: Exposure) -> Self {
        self.exposure = Some(exposure);
        self
    }

    pub fn is_exposed(&self) -> bool {
        self.exposure.is_some()
    }

    /// Name the dynamic side uses, or `None` for unmarked methods.
    pub fn exposed_name(&self) -> Option<&'static str> {
        let exposure = self.exposure?;
        match exposure.name {
            Some(name) if !name.is_empty() => Some(name),
            _ => Some(self.name),
        }
    }

    pub fn signature(&self) -> Signature {
        Signature::new(self.name, self.returns.clone(), self.params.clone())
    }

    /// Descriptor for marked methods.
    pub fn descriptor(&self) -> Option<MethodDescriptor> {
        let exposed_name = self.exposed_name()?;
        Some(MethodDescriptor {
            exposed_name: exposed_name.to_string(),
            signature: self.signature().encode(),
        })
    }
}

/// Resolved `(exposed name, encoded signature)` pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MethodDescriptor {
    pub exposed_name: String,
    pub signature: String,
}
