//! C ABI entry points for the dynamic runtime.
//!
//! The dynamic side cannot hold a reference to an [`InterfaceRegistry`], so the
//! process installs one registry here at startup and the exported functions
//! below read from it.
//!
//! ```text
//! nativebridge_interface_host_object(name) -> *const c_void  (null if absent)
//! nativebridge_interface_metadata(name)    -> *mut c_char    (null if absent)
//! nativebridge_string_free(ptr)
//! ```
//!
//! None of these functions panic across the boundary; bad input is logged and
//! answered with null.
//!
//! Host object pointers are borrowed from the registry, not owned by the
//! caller. Registering another module under the same name drops the previous
//! one, so a pointer obtained earlier dangles from that point on. Callers must
//! not keep host object pointers across re-registration of their name.

use std::ffi::{CStr, CString, c_char, c_void};
use std::sync::{Arc, OnceLock};

use nativebridge_registry::InterfaceRegistry;

use crate::error::{BridgeError, BridgeResult};

static PROCESS_REGISTRY: OnceLock<Arc<InterfaceRegistry>> = OnceLock::new();

/// Install the registry the C entry points read from.
///
/// Only the first call succeeds.
pub fn install(registry: Arc<InterfaceRegistry>) -> BridgeResult<()> {
    PROCESS_REGISTRY
        .set(registry)
        .map_err(|_| BridgeError::AlreadyInstalled)?;
    tracing::debug!("installed process registry");
    Ok(())
}

/// The installed process registry.
pub fn installed() -> BridgeResult<&'static Arc<InterfaceRegistry>> {
    PROCESS_REGISTRY.get().ok_or(BridgeError::NotInstalled)
}

/// Borrow a C string argument as UTF-8.
///
/// # Safety
///
/// `name` must be null or point to a NUL-terminated string that outlives `'a`.
unsafe fn name_arg<'a>(name: *const c_char, entry: &'static str) -> Option<&'a str> {
    if name.is_null() {
        tracing::error!(entry, "interface name is null");
        return None;
    }
    // SAFETY: non-null and NUL-terminated per this function's contract.
    let raw = unsafe { CStr::from_ptr(name) };
    match raw.to_str() {
        Ok(name) => Some(name),
        Err(err) => {
            tracing::error!(entry, error = %err, "interface name is not valid UTF-8");
            None
        }
    }
}

fn registry_for(entry: &'static str) -> Option<&'static Arc<InterfaceRegistry>> {
    match installed() {
        Ok(registry) => Some(registry),
        Err(err) => {
            tracing::error!(entry, error = %err, "no registry to answer the call");
            None
        }
    }
}

/// Opaque pointer to the module registered under `name`, or null.
///
/// The pointee is owned by the registry and stays valid until `name` is
/// registered again.
///
/// # Safety
///
/// `name` must be null or a valid NUL-terminated string. The returned pointer
/// must not be dereferenced after `name` is registered again, since the
/// registry drops the module it replaces.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn nativebridge_interface_host_object(
    name: *const c_char,
) -> *const c_void {
    const ENTRY: &str = "nativebridge_interface_host_object";

    // SAFETY: forwarded from the caller's contract.
    let Some(name) = (unsafe { name_arg(name, ENTRY) }) else {
        return std::ptr::null();
    };
    let Some(registry) = registry_for(ENTRY) else {
        return std::ptr::null();
    };

    match registry.lookup(name) {
        Some(module) => Arc::as_ptr(&module) as *const c_void,
        None => std::ptr::null(),
    }
}

/// Encoded signature set for `name` as an owned C string, or null.
///
/// The result must be released with [`nativebridge_string_free`].
///
/// # Safety
///
/// `name` must be null or a valid NUL-terminated string.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn nativebridge_interface_metadata(name: *const c_char) -> *mut c_char {
    const ENTRY: &str = "nativebridge_interface_metadata";

    // SAFETY: forwarded from the caller's contract.
    let Some(name) = (unsafe { name_arg(name, ENTRY) }) else {
        return std::ptr::null_mut();
    };
    let Some(registry) = registry_for(ENTRY) else {
        return std::ptr::null_mut();
    };
    let Some(encoded) = registry.resolve_signatures(name) else {
        return std::ptr::null_mut();
    };

    match CString::new(encoded.as_bytes()) {
        Ok(encoded) => encoded.into_raw(),
        Err(err) => {
            tracing::error!(
                entry = ENTRY,
                interface = name,
                error = %err,
                "signature set contains NUL"
            );
            std::ptr::null_mut()
        }
    }
}

/// Release a string returned by this library. Null is ignored.
///
/// # Safety
///
/// `ptr` must be null or a pointer returned by [`nativebridge_interface_metadata`]
/// that has not been freed yet.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn nativebridge_string_free(ptr: *mut c_char) {
    if ptr.is_null() {
        return;
    }
    // SAFETY: ptr came from CString::into_raw per this function's contract.
    drop(unsafe { CString::from_raw(ptr) });
}
