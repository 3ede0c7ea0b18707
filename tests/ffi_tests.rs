//! C ABI entry points against the process registry.

#![allow(dead_code)]

use std::ffi::{CStr, CString, c_void};
use std::sync::{Arc, Once};

use nativebridge::ffi::{
    install, installed, nativebridge_interface_host_object, nativebridge_interface_metadata,
    nativebridge_string_free,
};
use nativebridge::{BridgeError, Interface, InterfaceRegistry, methods};

#[derive(Interface)]
#[interface(name = "vibrator")]
struct Vibrator;

#[methods]
impl Vibrator {
    #[expose]
    fn pulse(&self, _millis: u32) {}

    #[expose(name = "hasAmplitude")]
    fn amplitude_control(&self) -> bool {
        true
    }
}

#[derive(Interface)]
#[interface(name = "silent")]
struct Silent;

#[methods]
impl Silent {
    fn hidden(&self) {}
}

#[derive(Interface)]
#[interface(name = "beacon")]
struct Beacon;

#[methods]
impl Beacon {
    #[expose]
    fn blink(&self) {}
}

static INSTALL: Once = Once::new();

fn process_registry() -> &'static Arc<InterfaceRegistry> {
    INSTALL.call_once(|| {
        let registry = InterfaceRegistry::new();
        registry.register(Arc::new(Vibrator));
        registry.register(Arc::new(Silent));
        install(Arc::new(registry)).unwrap();
    });
    installed().unwrap()
}

fn metadata(name: &str) -> Option<String> {
    let name = CString::new(name).unwrap();
    let raw = unsafe { nativebridge_interface_metadata(name.as_ptr()) };
    if raw.is_null() {
        return None;
    }
    let text = unsafe { CStr::from_ptr(raw) }.to_str().unwrap().to_owned();
    unsafe { nativebridge_string_free(raw) };
    Some(text)
}

#[test]
fn second_install_is_rejected() {
    process_registry();
    let err = install(Arc::new(InterfaceRegistry::new())).unwrap_err();
    assert_eq!(err, BridgeError::AlreadyInstalled);
    assert!(installed().unwrap().contains("vibrator"));
}

#[test]
fn host_object_points_at_registered_module() {
    let registry = process_registry();
    let name = CString::new("vibrator").unwrap();

    let ptr = unsafe { nativebridge_interface_host_object(name.as_ptr()) };

    let module = registry.lookup("vibrator").unwrap();
    assert!(!ptr.is_null());
    assert_eq!(ptr, Arc::as_ptr(&module) as *const c_void);
}

#[test]
fn host_object_follows_reregistration() {
    let registry = process_registry();
    let name = CString::new("beacon").unwrap();

    registry.register(Arc::new(Beacon));
    let first = unsafe { nativebridge_interface_host_object(name.as_ptr()) };
    // Keep the replaced module alive so its address cannot be reused
    let replaced = registry.lookup("beacon").unwrap();

    registry.register(Arc::new(Beacon));
    let second = unsafe { nativebridge_interface_host_object(name.as_ptr()) };

    assert_eq!(first, Arc::as_ptr(&replaced) as *const c_void);
    assert_ne!(first, second);
    let current = registry.lookup("beacon").unwrap();
    assert_eq!(second, Arc::as_ptr(&current) as *const c_void);
}

#[test]
fn host_object_for_unknown_name_is_null() {
    process_registry();
    let name = CString::new("flashlight").unwrap();
    assert!(unsafe { nativebridge_interface_host_object(name.as_ptr()) }.is_null());
}

#[test]
fn null_name_is_answered_with_null() {
    process_registry();
    assert!(unsafe { nativebridge_interface_host_object(std::ptr::null()) }.is_null());
    assert!(unsafe { nativebridge_interface_metadata(std::ptr::null()) }.is_null());
}

#[test]
fn invalid_utf8_name_is_answered_with_null() {
    process_registry();
    let name = CString::new(vec![0xff, 0xfe]).unwrap();
    assert!(unsafe { nativebridge_interface_metadata(name.as_ptr()) }.is_null());
}

#[test]
fn metadata_is_the_encoded_signature_set() {
    process_registry();
    assert_eq!(
        metadata("vibrator").as_deref(),
        Some("{hasAmplitude=amplitude_control:Z, pulse=pulse:V'i}")
    );
}

#[test]
fn metadata_for_unexposed_or_unknown_is_null() {
    process_registry();
    assert_eq!(metadata("silent"), None);
    assert_eq!(metadata("flashlight"), None);
}

#[test]
fn freeing_null_is_ignored() {
    unsafe { nativebridge_string_free(std::ptr::null_mut()) };
}
