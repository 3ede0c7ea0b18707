//! Native Bridge Proc Macros
//!
//! This crate provides the declaration source for the native bridge: the
//! metadata that says which interface name a type answers to and which of its
//! methods the dynamic side may call.
//!
//! # Macros
//!
//! - `#[derive(Interface)]` - Implement `InterfaceEntry` and `NativeType`
//! - `#[methods]` - Generate the `MethodTable` for an inherent impl block
//!
//! # Example
//!
//! ```ignore
//! use nativebridge::{Interface, methods};
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
//! ```

use proc_macro::TokenStream;

mod attrs;
mod derive_interface;
mod methods;

/// Derive `InterfaceEntry` and `NativeType` for a module type.
///
/// # Attributes
///
/// - `#[interface(name = "...")]` - Interface entry name the registry files the
///   module under. Without it (or with an empty name) registration is a no-op.
///
/// The type also becomes usable as a parameter or return type of exposed
/// methods, travelling as an object handle named after the entry (or the
/// Rust type name when there is no entry).
///
/// # Example
///
/// ```ignore
/// #[derive(Interface)]
/// #[interface(name = "storage")]
/// pub struct Storage;
/// ```
#[proc_macro_derive(Interface, attributes(interface))]
pub fn derive_interface(input: TokenStream) -> TokenStream {
    derive_interface::derive_interface_impl(input)
}

/// Generate the method table of an inherent impl block.
///
/// Every `fn` in the block becomes a row of the table. Methods marked with
/// `#[expose]` are callable from the dynamic side; `#[expose(name = "...")]`
/// overrides the name they are called by. Exposed methods must not have type
/// parameters, and every parameter and return type must implement
/// `NativeType` (references are looked through).
///
/// Only one `#[methods]` block is allowed per type.
///
/// # Example
///
/// ```ignore
/// #[methods]
/// impl Storage {
///     #[expose(name = "getItem")]
///     pub fn get(&self, key: &str) -> Option<String> { ... }
///
///     fn evict(&mut self) { ... }
/// }
/// ```
#[proc_macro_attribute]
pub fn methods(attr: TokenStream, item: TokenStream) -> TokenStream {
    methods::methods_impl(attr, item)
}
