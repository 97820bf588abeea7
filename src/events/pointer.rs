use crate::dom;
use crate::input;
use crate::styles;
use globe_core::{DragTracker, SharedRotation};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct PointerWiring {
    pub canvas: web::HtmlCanvasElement,
    pub drag: Rc<RefCell<DragTracker>>,
    pub rotation: Rc<SharedRotation>,
}

pub fn wire_pointer_handlers(w: PointerWiring) {
    wire_pointerdown(&w);
    wire_pointermove(&w);
    wire_pointerup(&w, "pointerup");
    wire_pointerup(&w, "pointerleave");
    wire_pointerup(&w, "pointercancel");
    dom::apply_style(&w.canvas, &styles::cursor(false));
}

fn listen(canvas: &web::HtmlCanvasElement, event: &str, handler: impl FnMut(web::PointerEvent) + 'static) {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(_)>);
    let _ = canvas.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointerdown(w: &PointerWiring) {
    let w = w.clone();
    let canvas = w.canvas.clone();
    listen(&canvas, "pointerdown", move |ev: web::PointerEvent| {
        let pos = input::client_pos(ev.client_x(), ev.client_y());
        w.drag.borrow_mut().begin(ev.pointer_id(), pos);
        let _ = w.canvas.set_pointer_capture(ev.pointer_id());
        dom::apply_style(&w.canvas, &styles::cursor(true));
        log::debug!("[drag] begin pointer={} at ({:.0},{:.0})", ev.pointer_id(), pos.x, pos.y);
    });
}

fn wire_pointermove(w: &PointerWiring) {
    let w = w.clone();
    let canvas = w.canvas.clone();
    listen(&canvas, "pointermove", move |ev: web::PointerEvent| {
        let pos = input::client_pos(ev.client_x(), ev.client_y());
        let next = w.drag.borrow_mut().drag_to(pos);
        if let Some(rotation) = next {
            w.rotation.store(rotation);
        }
    });
}

fn wire_pointerup(w: &PointerWiring, event: &str) {
    let w = w.clone();
    let canvas = w.canvas.clone();
    listen(&canvas, event, move |ev: web::PointerEvent| {
        if !w.drag.borrow_mut().end(ev.pointer_id()) {
            return;
        }
        if w.canvas.has_pointer_capture(ev.pointer_id()) {
            let _ = w.canvas.release_pointer_capture(ev.pointer_id());
        }
        dom::apply_style(&w.canvas, &styles::cursor(false));
        let r = w.rotation.load();
        log::debug!("[drag] end pitch={:.3} yaw={:.3}", r.pitch, r.yaw);
    });
}
