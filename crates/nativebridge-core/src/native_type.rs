//! NativeType trait for values that can cross the bridge.
//!
//! Every parameter and return type of an exposed method must implement
//! [`NativeType`] so its [`TypeDescriptor`] can be computed when the method
//! table is built. Primitive and standard container implementations live here;
//! `#[derive(Interface)]` (from `nativebridge-macros`) implements it for module
//! types, which then travel as object handles.
//!
//! # Example
//!
//! ```
//! use nativebridge_core::{NativeType, TypeDescriptor};
//!
//! struct Handle;
//!
//! impl NativeType for Handle {
//!     fn descriptor() -> TypeDescriptor {
//!         TypeDescriptor::object("Handle")
//!     }
//! }
//!
//! assert_eq!(<Vec<Handle>>::descriptor().encode(), "[LHandle;");
//! ```

use std::sync::Arc;

use crate::TypeDescriptor;

/// Maps a Rust type to the descriptor the dynamic side decodes.
pub trait NativeType {
    fn descriptor() -> TypeDescriptor;
}

macro_rules! scalar_native_type {
    ($($ty:ty => $desc:ident),* $(,)?) => {
        $(
            impl NativeType for $ty {
                #[inline]
                fn descriptor() -> TypeDescriptor {
                    TypeDescriptor::$desc
                }
            }
        )*
    };
}

scalar_native_type! {
    () => Void,
    bool => Bool,
    i8 => Int8,
    i16 => Int16,
    i32 => Int32,
    i64 => Int64,
    u8 => Uint8,
    u16 => Uint16,
    u32 => Uint32,
    u64 => Uint64,
    f32 => Float,
    f64 => Double,
    char => Char,
    str => String,
    String => String,
}

impl<T: NativeType> NativeType for [T] {
    fn descriptor() -> TypeDescriptor {
        TypeDescriptor::Array(Box::new(T::descriptor()))
    }
}

impl<T: NativeType> NativeType for Vec<T> {
    fn descriptor() -> TypeDescriptor {
        TypeDescriptor::Array(Box::new(T::descriptor()))
    }
}

impl<T: NativeType> NativeType for Option<T> {
    fn descriptor() -> TypeDescriptor {
        TypeDescriptor::Optional(Box::new(T::descriptor()))
    }
}

// References and smart pointers are transparent: the dynamic side only sees
// the pointee.

impl<T: NativeType + ?Sized> NativeType for &T {
    fn descriptor() -> TypeDescriptor {
        T::descriptor()
    }
}

impl<T: NativeType + ?Sized> NativeType for Box<T> {
    fn descriptor() -> TypeDescriptor {
        T::descriptor()
    }
}

impl<T: NativeType + ?Sized> NativeType for Arc<T> {
    fn descriptor() -> TypeDescriptor {
        T::descriptor()
    }
}
