//! Integration tests for `#[derive(Interface)]` and `#[methods]`.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Arc;

use nativebridge::{
    Exposure, Interface, InterfaceEntry, MethodMeta, MethodTable, NativeType, Signature,
    TypeDescriptor, methods,
};

#[derive(Interface)]
#[interface(name = "camera")]
struct Camera {
    zoom: f64,
}

#[derive(Interface)]
struct Frame;

#[derive(Interface)]
#[interface(name = "")]
struct Hidden;

#[methods]
impl Camera {
    #[expose]
    fn capture(&self, width: u32, height: u32, quality: u8) -> Vec<Frame> {
        let _ = (width, height, quality);
        Vec::new()
    }

    #[expose(name = "setZoom")]
    fn set_zoom(&mut self, zoom: f64) {
        self.zoom = zoom;
    }

    #[expose]
    fn label<'a>(&self, prefix: &'a str, tags: &[&'a str]) -> String {
        format!("{prefix}{}", tags.join(","))
    }

    #[expose]
    fn last_frame(&self) -> Option<Frame> {
        None
    }

    #[expose]
    fn scale(&self, factor: f32, offset: i64, steps: i16, flag: bool, mark: char) -> Option<f32> {
        let _ = (offset, steps, flag, mark);
        Some(factor)
    }

    fn cache(&self) -> HashMap<String, Vec<u8>> {
        HashMap::new()
    }
}

fn row(name: &str) -> MethodMeta {
    Camera::method_table()
        .into_iter()
        .find(|meta| meta.name == name)
        .unwrap()
}

// =============================================================================
// #[derive(Interface)]
// =============================================================================

#[test]
fn derive_declares_entry_name() {
    assert_eq!(Camera::interface_entry(), Some("camera"));
    assert_eq!(Frame::interface_entry(), None);
    assert_eq!(Hidden::interface_entry(), Some(""));
}

#[test]
fn derived_types_travel_as_objects() {
    assert_eq!(Camera::descriptor(), TypeDescriptor::object("camera"));
    assert_eq!(Frame::descriptor(), TypeDescriptor::object("Frame"));
    assert_eq!(Hidden::descriptor(), TypeDescriptor::object("Hidden"));
}

// =============================================================================
// #[methods]
// =============================================================================

#[test]
fn table_lists_every_method_in_order() {
    let names: Vec<_> = Camera::method_table().iter().map(|meta| meta.name).collect();
    assert_eq!(
        names,
        ["capture", "set_zoom", "label", "last_frame", "scale", "cache"]
    );
}

#[test]
fn unmarked_methods_carry_no_exposure() {
    let cache = row("cache");
    assert!(!cache.is_exposed());
    assert!(cache.params.is_empty());
    assert_eq!(cache.returns, TypeDescriptor::Void);
}

#[test]
fn exposure_markers_are_recorded() {
    assert_eq!(row("capture").exposure, Some(Exposure::new()));
    assert_eq!(row("set_zoom").exposure, Some(Exposure::renamed("setZoom")));
    assert_eq!(row("set_zoom").exposed_name(), Some("setZoom"));
}

#[test]
fn receiver_is_not_a_parameter() {
    let capture = row("capture");
    assert_eq!(
        capture.params,
        [TypeDescriptor::Uint32, TypeDescriptor::Uint32, TypeDescriptor::Uint8]
    );
    assert_eq!(capture.signature().encode(), "capture:[LFrame;'i'i'b");
}

#[test]
fn unit_return_is_void() {
    assert_eq!(row("set_zoom").signature().encode(), "set_zoom:V'D");
}

#[test]
fn references_are_looked_through() {
    let label = row("label");
    assert_eq!(label.returns, TypeDescriptor::String);
    assert_eq!(
        label.params,
        [
            TypeDescriptor::String,
            TypeDescriptor::Array(Box::new(TypeDescriptor::String)),
        ]
    );
}

#[test]
fn optional_object_return() {
    assert_eq!(row("last_frame").signature().encode(), "last_frame:?LFrame;");
}

#[test]
fn scalar_kinds_round_trip() {
    let scale = row("scale").signature();
    assert_eq!(scale.encode(), "scale:?F'F'J'S'Z'C");
    assert_eq!(Signature::parse(&scale.encode()).unwrap(), scale);
}

#[test]
fn methods_remain_callable() {
    let mut camera = Camera { zoom: 1.0 };
    camera.set_zoom(2.5);
    assert_eq!(camera.zoom, 2.5);
    assert_eq!(camera.label("tag:", &["a", "b"]), "tag:a,b");
    assert_eq!(camera.scale(3.0, 0, 0, true, 'x'), Some(3.0));
}

#[derive(Interface)]
#[interface(name = "album")]
struct Album;

#[methods]
impl Album {
    #[expose]
    fn add<'a>(&self, frame: Option<&'a Frame>, tags: Vec<&'a str>) -> bool {
        frame.is_some() && !tags.is_empty()
    }
}

#[test]
fn references_inside_containers_are_looked_through() {
    let add = &Album::method_table()[0];
    assert_eq!(add.signature().encode(), "add:Z'?LFrame;'[T");
    assert!(Album.add(Some(&Frame), vec!["x"]));
}

// =============================================================================
// Generic module types
// =============================================================================

#[derive(Interface)]
#[interface(name = "buffer")]
struct Buffer<T: Send + Sync + 'static> {
    items: Vec<T>,
}

#[methods]
impl<T: Send + Sync + 'static> Buffer<T> {
    #[expose]
    fn len(&self) -> u64 {
        self.items.len() as u64
    }

    fn first(&self) -> Option<&T> {
        self.items.first()
    }
}

#[test]
fn generic_types_get_tables() {
    assert_eq!(<Buffer<u8>>::interface_entry(), Some("buffer"));
    let table = <Buffer<String>>::method_table();
    assert_eq!(table.len(), 2);
    assert_eq!(table[0].signature().encode(), "len:j");
}

#[test]
fn generic_instantiations_are_distinct_types() {
    let registry = nativebridge::InterfaceRegistry::new();
    registry.register(Arc::new(Buffer::<u8> { items: vec![1, 2] }));
    assert!(registry.lookup_as::<Buffer<u8>>("buffer").is_some());
    assert!(registry.lookup_as::<Buffer<u16>>("buffer").is_none());
}
