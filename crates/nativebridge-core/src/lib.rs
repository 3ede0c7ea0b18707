//! Core types for the native method dispatch bridge.
//!
//! This crate holds everything both sides of the bridge agree on:
//!
//! - [`TypeDescriptor`] and [`NativeType`] - the kinds of values that cross.
//! - [`Signature`] - canonical encoding of one method's parameter and return kinds.
//! - [`MethodMeta`] / [`Exposure`] - build-time method table rows.
//! - [`NativeModule`] - the object-safe seam the registry stores.
//! - [`DecodeError`] - failures decoding any of the textual formats.

pub mod descriptor;
pub mod error;
pub mod method;
pub mod module;
pub mod native_type;
pub mod signature;
pub mod text;

pub use descriptor::TypeDescriptor;
pub use error::{DecodeError, DecodeResult};
pub use method::{Exposure, MethodDescriptor, MethodMeta};
pub use module::{InterfaceEntry, MethodTable, NativeModule, TypeKey};
pub use native_type::NativeType;
pub use signature::Signature;
