use crate::input;
use crate::styles::{self, Declaration};
use globe_core::ScrollGeometry;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Attach a window-level listener for the lifetime of the page.
pub fn add_window_listener(event: &str, mut handler: impl FnMut() + 'static) {
    if let Some(window) = web::window() {
        let closure = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
        let _ = window.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

/// Scroll geometry of `section` against the current window.
pub fn read_scroll_geometry(section: &web::HtmlElement) -> Option<ScrollGeometry> {
    let window = web::window()?;
    let scroll_y = window.scroll_y().ok()? as f32;
    let viewport_height = input::viewport_height(window.inner_height().ok()?.as_f64());
    Some(ScrollGeometry {
        scroll_y,
        region_top: section.offset_top() as f32,
        region_height: section.offset_height() as f32,
        viewport_height,
    })
}

/// Keep the canvas backing store at CSS size times the capped pixel ratio.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let viewport_width = w
            .inner_width()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0);
        let dpr = input::capped_dpr(w.device_pixel_ratio(), viewport_width);
        let rect = canvas.get_bounding_client_rect();
        let (w_px, h_px) = input::backing_size(rect.width(), rect.height(), dpr);
        canvas.set_width(w_px);
        canvas.set_height(h_px);
    }
}

/// Set each declared property on `el`'s inline style, leaving other properties intact.
pub fn apply_style(el: &web::HtmlElement, decls: &[Declaration]) {
    let style = el.style();
    for (property, value) in decls {
        let _ = style.set_property(property, value);
    }
}

#[inline]
pub fn set_style_by_id(document: &web::Document, id: &str, decls: &[Declaration]) {
    if let Some(el) = document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
    {
        apply_style(&el, decls);
    }
}

/// Style the first element whose `attr` equals `value`.
#[inline]
pub fn set_style_by_attr(document: &web::Document, attr: &str, value: &str, decls: &[Declaration]) {
    let selector = styles::attr_selector(attr, value);
    match document.query_selector(&selector) {
        Ok(Some(el)) => {
            if let Ok(el) = el.dyn_into::<web::HtmlElement>() {
                apply_style(&el, decls);
            }
        }
        Ok(None) => {}
        Err(e) => log::warn!("[dom] bad selector {}: {:?}", selector, e),
    }
}

/// Text of an inline `<script>` element, if present.
pub fn script_text(document: &web::Document, id: &str) -> Option<String> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.text_content())
        .filter(|s| !s.trim().is_empty())
}
