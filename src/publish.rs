//! Hand frame output to the host renderer.
//!
//! The renderer (a three.js scene owned by the page) listens on the canvas
//! for `globe-ready` once and `globe-frame` every animation frame. Vectors
//! travel as `Float32Array`s; point lists are flattened xyz triples.

use globe_core::{FrameOutput, MarkerState, StaticGeometry};
use glam::{Quat, Vec3};
use js_sys::{Array, Float32Array, Object, Reflect};
use wasm_bindgen::JsValue;
use web_sys as web;

#[inline]
fn set(obj: &Object, key: &str, value: &JsValue) {
    let _ = Reflect::set(obj, &JsValue::from_str(key), value);
}

#[inline]
fn vec3(v: Vec3) -> JsValue {
    Float32Array::from(&v.to_array()[..]).into()
}

#[inline]
fn quat(q: Quat) -> JsValue {
    Float32Array::from(&q.to_array()[..]).into()
}

fn points(list: &[Vec3]) -> JsValue {
    let flat: Vec<f32> = list.iter().flat_map(|p| p.to_array()).collect();
    Float32Array::from(flat.as_slice()).into()
}

fn marker(m: &MarkerState) -> JsValue {
    let obj = Object::new();
    set(&obj, "label", &JsValue::from_str(&m.label));
    set(&obj, "position", &vec3(m.position));
    set(&obj, "visible", &JsValue::from_bool(m.visible));
    set(&obj, "haloOpacity", &JsValue::from_f64(m.halo_opacity as f64));
    set(&obj, "emissive", &JsValue::from_f64(m.emissive as f64));
    obj.into()
}

pub fn ready_detail(geometry: &StaticGeometry) -> Object {
    let obj = Object::new();
    set(&obj, "globeRadius", &JsValue::from_f64(geometry.globe_radius as f64));
    set(&obj, "flightArc", &points(&geometry.flight_arc));
    set(&obj, "stars", &points(&geometry.stars));
    let markers = Array::new();
    for (label, position) in &geometry.markers {
        let m = Object::new();
        set(&m, "label", &JsValue::from_str(label));
        set(&m, "position", &vec3(*position));
        markers.push(&m);
    }
    set(&obj, "markers", &markers);
    obj
}

pub fn frame_detail(out: &FrameOutput) -> Object {
    let camera = Object::new();
    set(&camera, "position", &vec3(out.camera.position));
    set(&camera, "lookAt", &vec3(out.camera.look_at));
    set(&camera, "zoom", &JsValue::from_f64(out.camera.zoom as f64));

    let flight = Object::new();
    set(&flight, "visible", &JsValue::from_bool(out.flight_marker.visible));
    set(&flight, "position", &vec3(out.flight_marker.position));
    set(&flight, "heading", &vec3(out.flight_marker.heading));
    set(&flight, "quaternion", &quat(out.flight_marker.orientation));
    set(&flight, "t", &JsValue::from_f64(out.flight_marker.t as f64));

    let markers = Array::new();
    for m in &out.markers {
        markers.push(&marker(m));
    }

    let obj = Object::new();
    set(&obj, "progress", &JsValue::from_f64(out.progress as f64));
    set(&obj, "stage", &JsValue::from_str(out.stage.name()));
    set(&obj, "camera", &camera);
    set(&obj, "flightMarker", &flight);
    set(&obj, "flightArcVisible", &JsValue::from_bool(out.flight_arc_visible));
    set(&obj, "markers", &markers);
    obj
}

pub fn dispatch(target: &web::EventTarget, name: &str, detail: &Object) -> Result<(), JsValue> {
    let init = web::CustomEventInit::new();
    init.set_detail(detail);
    let event = web::CustomEvent::new_with_event_init_dict(name, &init)?;
    target.dispatch_event(&event)?;
    Ok(())
}
