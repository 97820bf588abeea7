use crate::constants::{FRAME_EVENT, MAX_FRAME_GAP_SEC};
use crate::panel;
use crate::publish;
use globe_core::{FrameInput, ProgressCell, SceneDirector, SharedRotation};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub director: SceneDirector,
    pub progress: Rc<ProgressCell>,
    pub rotation: Rc<SharedRotation>,

    pub document: web::Document,
    pub canvas: web::HtmlCanvasElement,

    pub last_instant: Instant,
    /// Progress the DOM panel was last styled for; styles are only rewritten on change.
    pub applied_progress: Option<f32>,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt = now - self.last_instant;
        self.last_instant = now;

        let input = FrameInput {
            progress: self.progress.get(),
            rotation: self.rotation.load(),
            elapsed: Some(dt),
        };
        let out = if dt.as_secs_f32() > MAX_FRAME_GAP_SEC {
            log::debug!("[frame] gap of {:.2}s; snapping camera", dt.as_secs_f32());
            self.director.settle(input)
        } else {
            self.director.frame(input)
        };

        if self.applied_progress != Some(out.progress) {
            panel::apply_timeline(&self.document, &out.timeline);
            panel::apply_cues(&self.document, &out.cues);
            self.applied_progress = Some(out.progress);
        }

        if let Err(e) = publish::dispatch(
            &self.canvas,
            FRAME_EVENT,
            &publish::frame_detail(&out),
        ) {
            log::error!("[frame] dispatch error: {:?}", e);
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(closure)) = (web::window(), tick.borrow().as_ref()) {
        let _ = w.request_animation_frame(closure.as_ref().unchecked_ref());
    }
}

/// Initial frame: camera placed directly at the current scroll position.
pub fn first_frame(frame_ctx: &Rc<RefCell<FrameContext>>) {
    let mut ctx = frame_ctx.borrow_mut();
    let progress = ctx.progress.get();
    let rotation = ctx.rotation.load();
    let out = ctx.director.settle(FrameInput {
        progress,
        rotation,
        elapsed: Some(Duration::ZERO),
    });
    panel::apply_timeline(&ctx.document, &out.timeline);
    panel::apply_cues(&ctx.document, &out.cues);
    ctx.applied_progress = Some(out.progress);
    log::info!(
        "[frame] first frame stage={} progress={:.3}",
        out.stage.name(),
        out.progress
    );
}
