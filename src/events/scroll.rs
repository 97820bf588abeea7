use crate::dom;
use globe_core::{ProgressCell, ProgressTracker};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

#[derive(Clone)]
pub struct ScrollWiring {
    pub section: web::HtmlElement,
    pub canvas: web::HtmlCanvasElement,
    pub tracker: Rc<RefCell<ProgressTracker>>,
    pub progress: Rc<ProgressCell>,
}

/// Recompute progress from the section's current geometry and publish it.
pub fn refresh_progress(w: &ScrollWiring) {
    let Some(geometry) = dom::read_scroll_geometry(&w.section) else {
        return;
    };
    let mut tracker = w.tracker.borrow_mut();
    if tracker.update(geometry) {
        w.progress.set(tracker.progress());
    }
}

pub fn wire_scroll_handlers(w: ScrollWiring) {
    refresh_progress(&w);
    dom::sync_canvas_backing_size(&w.canvas);
    log::info!(
        "[scroll] initial progress={:.3} geometry={:?}",
        w.progress.get(),
        w.tracker.borrow().geometry()
    );

    let on_scroll = w.clone();
    dom::add_window_listener("scroll", move || refresh_progress(&on_scroll));

    let on_resize = w;
    dom::add_window_listener("resize", move || {
        dom::sync_canvas_backing_size(&on_resize.canvas);
        refresh_progress(&on_resize);
        log::debug!(
            "[resize] progress={:.3} geometry={:?}",
            on_resize.progress.get(),
            on_resize.tracker.borrow().geometry()
        );
    });
}
